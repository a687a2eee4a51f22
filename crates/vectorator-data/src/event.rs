//! Structured events emitted on the answer stream.

use serde::{Deserialize, Serialize};

/// Events emitted while the backend generates an answer.
///
/// Carried newline-delimited on the event-mode answer stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// Text fragment of the answer.
    TextDelta {
        /// The appended text.
        delta: String,
    },
    /// Documents cited as evidence for the answer so far.
    References {
        /// Cited document ids, in ranking order.
        document_ids: Vec<i64>,
    },
    /// Answer generation completed.
    Done,
    /// Answer generation failed.
    Error {
        /// Failure detail from the backend.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_are_internally_tagged() {
        let event = StreamEvent::TextDelta {
            delta: "Hello".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("text_delta"));
        assert!(json.contains("Hello"));
    }

    #[test]
    fn done_event_round_trip() {
        let json = serde_json::to_string(&StreamEvent::Done).unwrap();
        let back: StreamEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, StreamEvent::Done);
    }

    #[test]
    fn decodes_references_event() {
        let event: StreamEvent =
            serde_json::from_str(r#"{"type": "references", "document_ids": [4, 1]}"#).unwrap();

        assert_eq!(
            event,
            StreamEvent::References {
                document_ids: vec![4, 1]
            }
        );
    }
}
