//! Chat and chat-message entities.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::state::{Persona, ProcessingState};
use crate::tenant::TenantScope;

/// A conversation owned by a project.
///
/// The chat carries the processing state of its latest answer cycle. The
/// client only ever holds a transient copy; state transitions are observed
/// by re-fetching, never by mutating a cached value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Tenant the chat belongs to.
    pub tenant_scope: TenantScope,
    /// Name of the owning project.
    pub project: String,
    /// Creation time.
    pub created_at: Timestamp,
    /// State of the latest answer cycle.
    pub processing_state: ProcessingState,
    /// Failure detail, set by the backend when answering failed.
    #[serde(default)]
    pub error_message: Option<String>,
    /// Ordered message history. Lightweight listings omit it.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

impl Chat {
    /// Returns whether the latest answer cycle completed successfully.
    pub fn is_done(&self) -> bool {
        self.processing_state.is_done()
    }

    /// Returns the text of the most recent agent message, if any.
    pub fn latest_answer(&self) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|message| message.persona == Persona::Agent)
            .map(|message| message.message.as_str())
    }
}

/// A single message in a chat, append-only and immutable once created.
///
/// `referenced_document_ids` carries denormalized evidence links instead of
/// full document objects for payload efficiency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Server-assigned identifier; absent on messages the client composes.
    #[serde(default)]
    pub id: Option<i64>,
    /// Owning chat; absent on messages sent with a chat-creation payload.
    #[serde(default)]
    pub chat_id: Option<i64>,
    /// Message text.
    pub message: String,
    /// Author of the message.
    pub persona: Persona,
    /// Creation time.
    pub created_at: Timestamp,
    /// Documents cited as evidence, in ranking order. Never null on the
    /// wire; absence decodes to an empty sequence.
    #[serde(default)]
    pub referenced_document_ids: Vec<i64>,
}

impl ChatMessage {
    /// Composes a new user message, timestamped now.
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            id: None,
            chat_id: None,
            message: message.into(),
            persona: Persona::User,
            created_at: Timestamp::now(),
            referenced_document_ids: Vec::new(),
        }
    }

    /// Composes a new agent message, timestamped now.
    pub fn agent(message: impl Into<String>) -> Self {
        Self {
            persona: Persona::Agent,
            ..Self::user(message)
        }
    }

    /// Returns whether the end user authored this message.
    pub fn is_from_user(&self) -> bool {
        self.persona == Persona::User
    }
}

/// Payload for creating a chat, optionally seeded with messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChat {
    /// Display name for the new chat.
    pub name: String,
    /// Tenant the chat belongs to.
    pub tenant_scope: TenantScope,
    /// Name of the owning project.
    pub project: String,
    /// Initial message history; a seeded user message triggers answering.
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Payload for renaming a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenameChat {
    /// New display name.
    pub name: String,
}
