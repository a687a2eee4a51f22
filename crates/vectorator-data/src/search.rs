//! Quick-search result projection.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A single quick-search hit, ranked by the backend.
///
/// Result sets arrive ordered by `score` descending; the ranking is computed
/// server-side and must not be re-sorted by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickSearchDocument {
    /// Server-side relevance score.
    pub score: f64,
    /// Filename of the matching document.
    pub filename: String,
    /// Matching excerpt.
    pub content: String,
    /// Full text of the matching chunk.
    pub full_content: String,
    /// Ingestion time of the matching chunk.
    pub timestamp: Timestamp,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_from_wire_json() {
        let hit: QuickSearchDocument = serde_json::from_str(
            r#"{
                "score": 0.82,
                "filename": "handbook.pdf",
                "content": "vacation policy",
                "full_content": "the vacation policy allows...",
                "timestamp": "2024-05-01T12:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(hit.filename, "handbook.pdf");
        assert!((hit.score - 0.82).abs() < f64::EPSILON);
    }
}
