//! Incremental answer delivery.
//!
//! One stream per chat turn, server to client, consumed lazily. A dropped
//! connection is not resumable; callers re-open the stream with the same
//! message history.

use async_stream::try_stream;
use bytes::Bytes;
use futures::stream::BoxStream;
use futures::{Stream, StreamExt};
use vectorator_data::{ChatMessage, StreamEvent, TenantScope};

use super::{expect_success, VectoratorClient};
use crate::error::{Error, Result};
use crate::route::Route;
use crate::TRACING_TARGET_STREAM;

/// Content shape of the answer stream.
///
/// One parameter selects between the three shapes; they share a single
/// protocol and differ only in route suffix and chunk decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamMode {
    /// Verbatim response bytes.
    Raw,
    /// UTF-8 answer fragments.
    Tokens,
    /// Newline-delimited structured events.
    Events,
}

impl StreamMode {
    /// Returns the route suffix selecting this shape, if any.
    pub(crate) fn route_suffix(self) -> Option<&'static str> {
        match self {
            StreamMode::Raw => None,
            StreamMode::Tokens => Some("tokens"),
            StreamMode::Events => Some("events"),
        }
    }
}

/// One chunk of an incrementally delivered answer.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerChunk {
    /// Verbatim bytes from the raw stream.
    Raw(Bytes),
    /// A UTF-8 answer fragment from the token stream.
    Token(String),
    /// A structured event from the event stream.
    Event(StreamEvent),
}

impl VectoratorClient {
    /// Opens an answer stream for a message history.
    ///
    /// The returned sequence is lazy and must be consumed incrementally;
    /// nothing is buffered ahead of the consumer. It ends when the backend
    /// closes the connection and cannot be restarted; re-open with the same
    /// history instead.
    ///
    /// # Errors
    ///
    /// A non-success status before the stream begins surfaces as
    /// [`Error::Remote`]. A failure mid-stream (connection reset, invalid
    /// UTF-8 on the token stream, an undecodable event) ends the sequence
    /// with [`Error::Stream`] rather than silently truncating it.
    pub async fn stream_answer(
        &self,
        tenant: &TenantScope,
        project: &str,
        history: &[ChatMessage],
        mode: StreamMode,
    ) -> Result<BoxStream<'static, Result<AnswerChunk>>> {
        let response = self
            .request(&Route::StreamAnswer {
                tenant,
                project,
                mode,
            })?
            .json(&history)
            .send()
            .await?;
        let response = expect_success(response).await?;

        tracing::debug!(
            target: TRACING_TARGET_STREAM,
            tenant = %tenant,
            project,
            mode = ?mode,
            history_len = history.len(),
            "Opened answer stream"
        );

        Ok(decode_chunks(response.bytes_stream(), mode).boxed())
    }
}

/// Decodes a byte stream into answer chunks for the selected mode.
fn decode_chunks(
    bytes: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
    mode: StreamMode,
) -> impl Stream<Item = Result<AnswerChunk>> + Send {
    try_stream! {
        futures::pin_mut!(bytes);
        let mut carry: Vec<u8> = Vec::new();

        while let Some(chunk) = bytes.next().await {
            let chunk = chunk
                .map_err(|err| Error::stream(format!("connection lost mid-stream: {err}")))?;

            match mode {
                StreamMode::Raw => yield AnswerChunk::Raw(chunk),
                StreamMode::Tokens => {
                    if let Some(token) = drain_token(&mut carry, &chunk)? {
                        yield AnswerChunk::Token(token);
                    }
                }
                StreamMode::Events => {
                    for event in drain_events(&mut carry, &chunk)? {
                        yield AnswerChunk::Event(event);
                    }
                }
            }
        }

        if !carry.is_empty() {
            match mode {
                StreamMode::Raw => {}
                StreamMode::Tokens => {
                    Err(Error::stream("stream ended inside a multi-byte character"))?;
                }
                StreamMode::Events => {
                    // The final event may arrive without a trailing newline.
                    let event = parse_event(&carry)?;
                    yield AnswerChunk::Event(event);
                }
            }
        }
    }
}

/// Appends a chunk to the carry buffer and takes the longest complete UTF-8
/// prefix as a token, keeping a partial trailing code point for the next
/// chunk.
fn drain_token(carry: &mut Vec<u8>, chunk: &[u8]) -> Result<Option<String>> {
    carry.extend_from_slice(chunk);

    match std::str::from_utf8(carry) {
        Ok(text) => {
            let token = text.to_owned();
            carry.clear();
            Ok((!token.is_empty()).then_some(token))
        }
        Err(err) if err.error_len().is_none() => {
            let valid = err.valid_up_to();
            if valid == 0 {
                return Ok(None);
            }
            let token = String::from_utf8_lossy(&carry[..valid]).into_owned();
            carry.drain(..valid);
            Ok(Some(token))
        }
        Err(_) => Err(Error::stream("invalid UTF-8 on the token stream")),
    }
}

/// Appends a chunk to the carry buffer and parses every complete
/// newline-delimited event out of it.
fn drain_events(carry: &mut Vec<u8>, chunk: &[u8]) -> Result<Vec<StreamEvent>> {
    carry.extend_from_slice(chunk);

    let mut events = Vec::new();
    while let Some(newline) = carry.iter().position(|&byte| byte == b'\n') {
        let line: Vec<u8> = carry.drain(..=newline).collect();
        let line = &line[..line.len() - 1];
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        events.push(parse_event(line)?);
    }

    Ok(events)
}

fn parse_event(line: &[u8]) -> Result<StreamEvent> {
    serde_json::from_slice(line)
        .map_err(|err| Error::stream(format!("undecodable stream event: {err}")))
}
