use gloo_file::File as GlooFile;
use gloo_file::futures::read_as_bytes;
use gloo_net::http::Request;
use shared::{AnalysisResult, IncidentList, IncidentRecord, SubmissionPayload, image_data_url};
use thiserror::Error;

use crate::geo::{self, LocationError};

/// Analysis service endpoint; overridable at build time.
const BASE_URL: &str = match option_env!("SNAP_REPORT_API") {
    Some(url) => url,
    None => "https://snap-report-437019.uc.r.appspot.com",
};

/// Ways a submission can end before a request ever reaches the service.
/// These are logged and swallowed by the caller; only transport-level
/// failures surface to the user, and those arrive as the generic failure
/// payload inside a normal `AnalysisResult`.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Location(#[from] LocationError),
    #[error("could not read the selected image: {0}")]
    ImageRead(String),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("incident list request failed with status {0}")]
    Status(u16),
    #[error(transparent)]
    Net(#[from] gloo_net::Error),
}

/// Runs the full capture pipeline: encode the selected image (if any),
/// acquire a device fix, assemble the payload, then issue exactly one POST.
/// The steps are strictly sequential; geolocation is not requested until
/// the image has finished encoding, and either failure aborts the attempt.
///
/// A non-2xx status discards the body and yields the generic failure
/// payload, same as a transport error, so the overlay always leaves its
/// loading state.
pub async fn submit_report(
    category: String,
    description: String,
    image: Option<GlooFile>,
) -> Result<AnalysisResult, SubmitError> {
    let image_base64 = match image {
        Some(file) => {
            let mime = file.raw_mime_type();
            let bytes = read_as_bytes(&file)
                .await
                .map_err(|err| SubmitError::ImageRead(err.to_string()))?;
            Some(image_data_url(&mime, &bytes))
        }
        None => None,
    };

    let location = geo::current_position().await?;

    let payload = SubmissionPayload {
        category,
        description,
        location,
        image_base64,
    };
    log::debug!(
        "submitting {} report from ({}, {})",
        payload.category,
        payload.location.latitude,
        payload.location.longitude
    );

    let response = match Request::post(&format!("{BASE_URL}/analyze")).json(&payload) {
        Ok(request) => request.send().await,
        Err(err) => Err(err),
    };

    match response {
        Ok(response) if response.ok() => match response.json::<AnalysisResult>().await {
            Ok(result) => Ok(result),
            Err(err) => {
                log::error!("analysis response was not valid JSON: {err}");
                Ok(AnalysisResult::failure())
            }
        },
        Ok(response) => {
            log::error!("analysis request rejected with status {}", response.status());
            Ok(AnalysisResult::failure())
        }
        Err(err) => {
            log::error!("analysis request failed: {err}");
            Ok(AnalysisResult::failure())
        }
    }
}

/// Single fetch of the full incident list. No parameters, no pagination;
/// ordering for display is decided by the caller.
pub async fn fetch_incidents() -> Result<Vec<IncidentRecord>, FetchError> {
    let response = Request::get(&format!("{BASE_URL}/getalldata")).send().await?;
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    let list: IncidentList = response.json().await?;
    Ok(list.data)
}
