#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the main library.
pub const TRACING_TARGET: &str = "vectorator_client";

/// Tracing target for client construction and request plumbing.
pub const TRACING_TARGET_CLIENT: &str = "vectorator_client::client";

/// Tracing target for document and upload operations.
pub const TRACING_TARGET_DOCUMENTS: &str = "vectorator_client::documents";

/// Tracing target for chat operations and the answer wait loop.
pub const TRACING_TARGET_CHAT: &str = "vectorator_client::chat";

/// Tracing target for the answer stream.
pub const TRACING_TARGET_STREAM: &str = "vectorator_client::stream";

mod client;
mod config;
mod error;
mod route;
#[doc(hidden)]
pub mod prelude;

pub use crate::client::stream::{AnswerChunk, StreamMode};
pub use crate::client::VectoratorClient;
pub use crate::config::{VectoratorBuilder, VectoratorConfig};
pub use crate::error::{Error, Result};
