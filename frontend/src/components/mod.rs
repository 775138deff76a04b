pub mod footer;
pub mod incident_feed;
pub mod navbar;
pub mod overlay;
pub mod report_form;
pub mod utils;
