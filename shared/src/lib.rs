pub mod decode;
pub mod encode;
pub mod feed;
pub mod presenter;
pub mod report;

pub use decode::decode_or_default;
pub use encode::image_data_url;
pub use feed::{RowCells, display_order};
pub use presenter::{OverlayState, Presenter, RequestToken};
pub use report::{
    AnalysisResult, GeoCoordinate, ImageAnalysis, IncidentList, IncidentRecord, LlamaAnalysis,
    SubmissionPayload,
};

/// Report categories offered by the capture form.
pub const CATEGORIES: [&str; 6] = [
    "Injury",
    "Accident",
    "Medical Emergency",
    "Fire",
    "Theft",
    "Breaking and Entering",
];
