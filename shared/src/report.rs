use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single device fix, produced once per submission attempt.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// The assembled request body for the analysis service. Built once per
/// submit and never mutated afterwards. `image_base64` is `None` exactly
/// when no file was selected, and serializes as JSON `null`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SubmissionPayload {
    pub category: String,
    pub description: String,
    pub location: GeoCoordinate,
    pub image_base64: Option<String>,
}

/// Raw analysis response as returned by the service. `image_analysis` and
/// `llama_analysis` are strings that themselves contain JSON; decoding them
/// is a separate step that may fail independently of the outer parse, so
/// they stay opaque here. Unknown fields are carried along untouched.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct AnalysisResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub llama_analysis: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnalysisResult {
    /// Generic failure payload shown when the request itself fails. The
    /// underlying cause is logged, never rendered.
    pub fn failure() -> Self {
        Self {
            message: Some("Submission failed. Please try again later.".to_string()),
            ..Self::default()
        }
    }
}

/// One previously submitted incident as returned by the list endpoint.
/// Read-only snapshot; the two analysis fields are nested JSON strings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct IncidentRecord {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub image_analysis: Option<String>,
    #[serde(default)]
    pub llama_analysis: Option<String>,
}

/// Envelope of the list endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct IncidentList {
    #[serde(default)]
    pub data: Vec<IncidentRecord>,
}

/// Decoded form of the nested `image_analysis` fragment. Every field is
/// optional; `Default` is the fallback when the fragment is malformed.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct ImageAnalysis {
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub first_responders: Option<Vec<String>>,
}

/// Decoded form of the nested `llama_analysis` fragment.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct LlamaAnalysis {
    #[serde(default)]
    pub analysis: Option<String>,
    #[serde(default)]
    pub recommendations: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_serializes_missing_image_as_null() {
        let payload = SubmissionPayload {
            category: "Fire".to_string(),
            description: "smoke near the park".to_string(),
            location: GeoCoordinate {
                latitude: 37.42,
                longitude: -122.08,
            },
            image_base64: None,
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["image_base64"], Value::Null);
        assert_eq!(value["location"]["latitude"], json!(37.42));
        assert_eq!(value["location"]["longitude"], json!(-122.08));
    }

    #[test]
    fn payload_carries_encoded_image_verbatim() {
        let payload = SubmissionPayload {
            category: "Accident".to_string(),
            description: String::new(),
            location: GeoCoordinate {
                latitude: 0.0,
                longitude: 0.0,
            },
            image_base64: Some("data:image/png;base64,AAAA".to_string()),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["image_base64"], json!("data:image/png;base64,AAAA"));
    }

    #[test]
    fn analysis_result_keeps_unknown_fields() {
        let raw = r#"{
            "image_analysis": "{\"severity\": \"High\"}",
            "llama_analysis": "{}",
            "request_id": "abc-123"
        }"#;

        let result: AnalysisResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.image_analysis.as_deref(), Some("{\"severity\": \"High\"}"));
        assert_eq!(result.extra["request_id"], json!("abc-123"));
        assert!(result.message.is_none());
    }

    #[test]
    fn incident_record_tolerates_sparse_rows() {
        let record: IncidentRecord = serde_json::from_str("{}").unwrap();
        assert!(record.location.is_none());
        assert!(record.created_at.is_none());
        assert!(record.image_analysis.is_none());
        assert!(record.llama_analysis.is_none());
    }
}
