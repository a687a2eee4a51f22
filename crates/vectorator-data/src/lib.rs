#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod chat;
mod document;
mod event;
mod input;
mod project;
mod search;
mod state;
mod tenant;
mod upload;

pub use crate::chat::{Chat, ChatMessage, NewChat, RenameChat};
pub use crate::document::Document;
pub use crate::event::StreamEvent;
pub use crate::input::FileUpload;
pub use crate::project::Project;
pub use crate::search::QuickSearchDocument;
pub use crate::state::{Persona, ProcessingState};
pub use crate::tenant::{TenantScope, TenantScopeError};
pub use crate::upload::DocumentUploadRequest;
