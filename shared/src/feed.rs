use chrono::{DateTime, NaiveDateTime, Utc};

use crate::decode::decode_or_default;
use crate::report::{ImageAnalysis, IncidentRecord, LlamaAnalysis};

/// Display strings for one feed row. Each cell has a defined fallback, so a
/// malformed fragment in one column never blanks out the others. An empty
/// responder list renders as its own literal on the table side.
#[derive(Clone, Debug, PartialEq)]
pub struct RowCells {
    pub severity: String,
    pub emergency: String,
    pub responders: Vec<String>,
    pub location: String,
    pub confidence: String,
}

impl RowCells {
    /// Derives the row from a record by independently decoding its two
    /// nested fragments. Either fragment failing to decode degrades only
    /// the cells that depend on it.
    pub fn from_record(record: &IncidentRecord) -> Self {
        let image: ImageAnalysis = decode_or_default(record.image_analysis.as_deref());
        let llama: LlamaAnalysis = decode_or_default(record.llama_analysis.as_deref());

        Self {
            severity: image.severity.unwrap_or_else(|| "N/A".to_string()),
            emergency: llama.analysis.unwrap_or_else(|| "N/A".to_string()),
            responders: image.first_responders.unwrap_or_default(),
            location: record
                .location
                .clone()
                .unwrap_or_else(|| "Location not provided".to_string()),
            // No confidence value means the image was judged not to be an
            // emergency at all, not that data is missing.
            confidence: match image.confidence {
                Some(value) => format!("{value}%"),
                None => "Not an emergency".to_string(),
            },
        }
    }
}

/// Orders records newest first. The list endpoint returns ascending
/// creation order, so the baseline is a positional reverse; when every
/// record carries a parseable timestamp the rows are additionally sorted by
/// it, which corrects feeds that arrive out of order. Records without
/// usable timestamps keep the reversed positional order.
pub fn display_order(mut records: Vec<IncidentRecord>) -> Vec<IncidentRecord> {
    records.reverse();
    if records.iter().all(|r| creation_time(r).is_some()) {
        records.sort_by_key(|r| std::cmp::Reverse(creation_time(r)));
    }
    records
}

fn creation_time(record: &IncidentRecord) -> Option<DateTime<Utc>> {
    let raw = record.created_at.as_deref()?;
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    // The service also emits bare datetimes; treat those as UTC.
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(parsed.and_utc());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(created_at: Option<&str>) -> IncidentRecord {
        IncidentRecord {
            created_at: created_at.map(str::to_string),
            ..IncidentRecord::default()
        }
    }

    #[test]
    fn untimestamped_feed_is_positionally_reversed() {
        let feed: Vec<IncidentRecord> = ["r1", "r2", "r3", "r4"]
            .iter()
            .map(|loc| IncidentRecord {
                location: Some(loc.to_string()),
                ..IncidentRecord::default()
            })
            .collect();

        let ordered = display_order(feed);
        let locations: Vec<_> = ordered.iter().map(|r| r.location.clone().unwrap()).collect();
        assert_eq!(locations, vec!["r4", "r3", "r2", "r1"]);
    }

    #[test]
    fn out_of_order_timestamps_are_sorted_newest_first() {
        let feed = vec![
            record(Some("2024-10-05T12:00:00Z")),
            record(Some("2024-10-07T12:00:00Z")),
            record(Some("2024-10-06T12:00:00Z")),
        ];

        let ordered = display_order(feed);
        let stamps: Vec<_> = ordered.iter().map(|r| r.created_at.clone().unwrap()).collect();
        assert_eq!(
            stamps,
            vec![
                "2024-10-07T12:00:00Z",
                "2024-10-06T12:00:00Z",
                "2024-10-05T12:00:00Z",
            ]
        );
    }

    #[test]
    fn ascending_feed_orders_the_same_with_or_without_sorting() {
        let feed = vec![
            record(Some("2024-10-05 08:00:00")),
            record(Some("2024-10-05 09:00:00")),
            record(Some("2024-10-05 10:00:00")),
        ];

        let ordered = display_order(feed);
        let stamps: Vec<_> = ordered.iter().map(|r| r.created_at.clone().unwrap()).collect();
        assert_eq!(
            stamps,
            vec![
                "2024-10-05 10:00:00",
                "2024-10-05 09:00:00",
                "2024-10-05 08:00:00",
            ]
        );
    }

    #[test]
    fn confidence_value_renders_as_percentage() {
        let rec = IncidentRecord {
            image_analysis: Some(r#"{"confidence": 87}"#.to_string()),
            ..IncidentRecord::default()
        };
        assert_eq!(RowCells::from_record(&rec).confidence, "87%");
    }

    #[test]
    fn missing_confidence_is_a_domain_signal() {
        let rec = IncidentRecord {
            image_analysis: Some(r#"{"severity": "Low"}"#.to_string()),
            ..IncidentRecord::default()
        };
        let cells = RowCells::from_record(&rec);
        assert_eq!(cells.confidence, "Not an emergency");
        assert_eq!(cells.severity, "Low");
    }

    #[test]
    fn malformed_llama_fragment_only_degrades_its_own_cells() {
        let rec = IncidentRecord {
            location: Some("5th and Main".to_string()),
            created_at: Some("2024-10-05T12:00:00Z".to_string()),
            image_analysis: Some(
                r#"{"severity": "High", "confidence": 92, "first_responders": ["Police"]}"#
                    .to_string(),
            ),
            llama_analysis: Some("{broken".to_string()),
        };

        let cells = RowCells::from_record(&rec);
        assert_eq!(cells.location, "5th and Main");
        assert_eq!(cells.severity, "High");
        assert_eq!(cells.confidence, "92%");
        assert_eq!(cells.responders, vec!["Police"]);
        assert_eq!(cells.emergency, "N/A");
    }

    #[test]
    fn empty_record_falls_back_everywhere() {
        let cells = RowCells::from_record(&IncidentRecord::default());
        assert_eq!(cells.severity, "N/A");
        assert_eq!(cells.emergency, "N/A");
        assert!(cells.responders.is_empty());
        assert_eq!(cells.location, "Location not provided");
        assert_eq!(cells.confidence, "Not an emergency");
    }
}
