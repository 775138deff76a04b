use serde::de::DeserializeOwned;

/// Decodes a nested JSON fragment, falling back to `T::default()` when the
/// field is absent or the string is not valid JSON for `T`. Parse failures
/// are logged and stop here; nothing past this boundary ever sees them.
///
/// The analysis service embeds JSON documents as plain strings inside its
/// responses and list records, and those fragments are only partially
/// trusted. Every consumer goes through this one function.
pub fn decode_or_default<T>(raw: Option<&str>) -> T
where
    T: DeserializeOwned + Default,
{
    let Some(raw) = raw else {
        return T::default();
    };

    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            log::warn!("failed to decode nested analysis fragment: {err}");
            T::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{ImageAnalysis, LlamaAnalysis};
    use serde_json::{Map, Value};

    #[test]
    fn garbage_input_yields_empty_object() {
        let decoded: Map<String, Value> = decode_or_default(Some("not json"));
        assert!(decoded.is_empty());
    }

    #[test]
    fn absent_input_yields_default() {
        let decoded: ImageAnalysis = decode_or_default(None);
        assert_eq!(decoded, ImageAnalysis::default());
    }

    #[test]
    fn well_formed_fragment_decodes() {
        let decoded: ImageAnalysis = decode_or_default(Some(
            r#"{"severity": "High", "confidence": 87, "first_responders": ["Fire", "EMS"]}"#,
        ));
        assert_eq!(decoded.severity.as_deref(), Some("High"));
        assert_eq!(decoded.confidence, Some(87.0));
        assert_eq!(
            decoded.first_responders,
            Some(vec!["Fire".to_string(), "EMS".to_string()])
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let decoded: LlamaAnalysis =
            decode_or_default(Some(r#"{"analysis": "fire", "model": "llama-3"}"#));
        assert_eq!(decoded.analysis.as_deref(), Some("fire"));
        assert!(decoded.recommendations.is_none());
    }

    #[test]
    fn truncated_fragment_falls_back() {
        let decoded: LlamaAnalysis = decode_or_default(Some(r#"{"analysis": "fi"#));
        assert_eq!(decoded, LlamaAnalysis::default());
    }
}
