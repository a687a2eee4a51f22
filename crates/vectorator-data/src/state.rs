//! Processing-state and persona enumerations.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Lifecycle state of an asynchronous chat answer.
///
/// A chat moves `PENDING -> PROCESSING -> {DONE, FAILED}`; the two final
/// states are terminal until a new user message re-enters the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ProcessingState {
    /// Queued on the backend, no worker has picked it up yet.
    Pending,
    /// A worker is generating the answer.
    Processing,
    /// The answer is available.
    Done,
    /// Answer generation failed; the chat carries an error message.
    Failed,
}

impl ProcessingState {
    /// Returns whether this state ends the current answer cycle.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ProcessingState::Done | ProcessingState::Failed)
    }

    /// Returns whether the answer completed successfully.
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, ProcessingState::Done)
    }

    /// Returns whether answer generation failed.
    #[inline]
    pub fn is_failed(self) -> bool {
        matches!(self, ProcessingState::Failed)
    }
}

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Persona {
    /// Message written by the calling application's end user.
    User,
    /// Message produced by the answering agent.
    Agent,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn processing_state_wire_names() {
        assert_eq!(
            serde_json::to_string(&ProcessingState::Pending).unwrap(),
            "\"PENDING\""
        );
        let state: ProcessingState = serde_json::from_str("\"DONE\"").unwrap();
        assert_eq!(state, ProcessingState::Done);
    }

    #[test]
    fn processing_state_terminality() {
        assert!(!ProcessingState::Pending.is_terminal());
        assert!(!ProcessingState::Processing.is_terminal());
        assert!(ProcessingState::Done.is_terminal());
        assert!(ProcessingState::Failed.is_terminal());
        assert!(ProcessingState::Done.is_done());
        assert!(ProcessingState::Failed.is_failed());
    }

    #[test]
    fn processing_state_display_round_trip() {
        let state = ProcessingState::from_str("PROCESSING").unwrap();
        assert_eq!(state, ProcessingState::Processing);
        assert_eq!(state.to_string(), "PROCESSING");
    }

    #[test]
    fn persona_wire_names() {
        assert_eq!(serde_json::to_string(&Persona::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Persona::Agent).unwrap(), "\"agent\"");
        let persona: Persona = serde_json::from_str("\"agent\"").unwrap();
        assert_eq!(persona, Persona::Agent);
    }
}
