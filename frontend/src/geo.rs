use js_sys::Promise;
use shared::GeoCoordinate;
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Position, PositionError};

// PositionError.POSITION_UNAVAILABLE, used when the browser hands back
// something that isn't a PositionError at all.
const POSITION_UNAVAILABLE: u16 = 2;

#[derive(Error, Debug)]
pub enum LocationError {
    /// The geolocation API is missing entirely; no request was attempted.
    #[error("geolocation is not supported by this browser")]
    Unavailable,
    /// The device declined or failed to produce a fix.
    #[error("geolocation error code {code}: {message}")]
    Position { code: u16, message: String },
}

/// One-shot current-position request. Resolves exactly once with either a
/// coordinate pair or the provider's code and message; there is no retry
/// and no way to cancel a request already in flight.
pub async fn current_position() -> Result<GeoCoordinate, LocationError> {
    let window = web_sys::window().ok_or(LocationError::Unavailable)?;
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| LocationError::Unavailable)?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(err) =
            geolocation.get_current_position_with_error_callback(&resolve, Some(&reject))
        {
            let _ = reject.call1(&wasm_bindgen::JsValue::NULL, &err);
        }
    });

    match JsFuture::from(promise).await {
        Ok(value) => {
            let position: Position = value.unchecked_into();
            let coords = position.coords();
            Ok(GeoCoordinate {
                latitude: coords.latitude(),
                longitude: coords.longitude(),
            })
        }
        Err(err) => {
            let (code, message) = match err.dyn_ref::<PositionError>() {
                Some(err) => (err.code(), err.message()),
                None => (POSITION_UNAVAILABLE, format!("{err:?}")),
            };
            Err(LocationError::Position { code, message })
        }
    }
}
