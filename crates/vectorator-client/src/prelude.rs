//! Prelude module for vectorator-client.
//!
//! This module re-exports the most commonly used types from the client and
//! its wire schema, making it easy to import everything you need with a
//! single `use` statement.

#[doc(inline)]
pub use crate::{AnswerChunk, Error, Result, StreamMode, VectoratorClient, VectoratorConfig};
#[doc(inline)]
pub use vectorator_data::{
    Chat, ChatMessage, Document, DocumentUploadRequest, FileUpload, Persona, ProcessingState,
    Project, QuickSearchDocument, StreamEvent, TenantScope,
};
