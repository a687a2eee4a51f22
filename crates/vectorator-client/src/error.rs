//! Error types for vectorator-client.

use thiserror::Error;
use vectorator_data::TenantScopeError;

/// Result type alias for vectorator-client operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for the vectorator-client library.
///
/// Server-observable failures are surfaced to the caller verbatim; the
/// client never swallows an error and never retries a single-shot request.
/// The only retry behavior in the crate is the bounded status poll inside
/// [`ask_and_wait`](crate::VectoratorClient::ask_and_wait).
#[derive(Debug, Error)]
pub enum Error {
    /// Local configuration problem, including tenant-scope derivation
    /// failures. Not retryable.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration problem.
        message: String,
    },

    /// The service answered with a non-success status.
    #[error("remote service error ({status}): {body}")]
    Remote {
        /// HTTP status code of the response.
        status: u16,
        /// Response body, propagated verbatim.
        body: String,
    },

    /// A chat did not reach `DONE` within the polling budget.
    #[error("chat {chat_id} did not reach DONE within {attempts} status polls")]
    Timeout {
        /// The chat that was being waited on.
        chat_id: i64,
        /// Number of status polls performed.
        attempts: u32,
    },

    /// The answer stream terminated abnormally before logical completion.
    #[error("stream error: {message}")]
    Stream {
        /// Description of the stream failure.
        message: String,
    },

    /// Transport-level failure before any response arrived.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a remote service error from a status code and body.
    pub fn remote(status: u16, body: impl Into<String>) -> Self {
        Self::Remote {
            status,
            body: body.into(),
        }
    }

    /// Creates a polling timeout error.
    pub fn timeout(chat_id: i64, attempts: u32) -> Self {
        Self::Timeout { chat_id, attempts }
    }

    /// Creates a stream error.
    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream {
            message: message.into(),
        }
    }

    /// Returns true if this error is a local configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Config { .. })
    }

    /// Returns true if the service answered with a non-success status.
    pub fn is_remote_error(&self) -> bool {
        matches!(self, Error::Remote { .. })
    }

    /// Returns true if a chat wait exhausted its polling budget.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Timeout { .. })
    }

    /// Returns true if the answer stream terminated abnormally.
    pub fn is_stream_error(&self) -> bool {
        matches!(self, Error::Stream { .. })
    }

    /// Returns the HTTP status code if this error carries one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Remote { status, .. } => Some(*status),
            Error::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

impl From<TenantScopeError> for Error {
    fn from(err: TenantScopeError) -> Self {
        Self::config(err.to_string())
    }
}
