use base64::Engine;
use base64::engine::general_purpose::STANDARD;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Encodes raw file bytes as a `data:` URL, matching what the browser's
/// `FileReader.readAsDataURL` produces. The MIME type is whatever the
/// browser reported for the selected file; nothing here validates type or
/// size, both limits shown in the form are advisory only.
pub fn image_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = if mime.is_empty() { FALLBACK_MIME } else { mime };
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
