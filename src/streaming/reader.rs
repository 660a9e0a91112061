use bytes::{Bytes, BytesMut};
use futures::{Stream, StreamExt};
use std::pin::Pin;
use tracing::trace;

use crate::error::{ClientError, Result};
use crate::models::stream::{MessageStreamDelta, MessageStreamEvent};

/// Byte source feeding a [`MessageStream`]; normally a streaming HTTP
/// response body.
pub type EventSource = Pin<Box<dyn Stream<Item = Result<Bytes>> + Send>>;

const DATA_PREFIX: &[u8] = b"data: ";

/// Reader position within the SSE byte stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReaderState {
    /// Looking for the next `data: ` line
    AwaitingLine,
    /// Source finished, or a logical `message_stop` was consumed
    Exhausted,
    /// A read or decode failure latched the reader shut
    Failed,
}

/// Pull-based decoder for a streaming Messages API response.
///
/// Owns the response body exclusively and advances through it one SSE line
/// at a time; it never rewinds. Every read call consumes forward on the same
/// cursor, so mixing [`recv`](Self::recv) and
/// [`recv_event`](Self::recv_event) on one instance is allowed but each call
/// still moves the stream. Reads take `&mut self`; callers that share a
/// stream across tasks must serialize access themselves.
///
/// Both read modes return `Ok(None)` when the stream is done, which is
/// completion, not failure. The underlying body is released when the stream
/// is dropped; [`close`](Self::close) makes that point explicit and covers
/// early abandonment.
pub struct MessageStream {
    source: EventSource,
    buffer: BytesMut,
    state: ReaderState,
}

impl MessageStream {
    pub fn new(source: EventSource) -> Self {
        Self {
            source,
            buffer: BytesMut::with_capacity(8192),
            state: ReaderState::AwaitingLine,
        }
    }

    /// Receive the next event of any type, in arrival order.
    ///
    /// Returns `Ok(None)` once the underlying stream ends.
    pub async fn recv_event(&mut self) -> Result<Option<MessageStreamEvent>> {
        let Some(data) = self.next_data_line().await? else {
            return Ok(None);
        };

        match serde_json::from_slice(&data) {
            Ok(event) => Ok(Some(event)),
            Err(e) => {
                self.state = ReaderState::Failed;
                Err(ClientError::MalformedPayload(e))
            }
        }
    }

    /// Receive the next content delta, skipping every other event type.
    ///
    /// Returns `Ok(None)` on `message_stop` (the logical end of the turn) or
    /// when the underlying stream ends, and fails with
    /// [`ClientError::StreamProtocol`] on an `error` event.
    pub async fn recv(&mut self) -> Result<Option<MessageStreamDelta>> {
        loop {
            match self.recv_event().await? {
                None => return Ok(None),
                Some(MessageStreamEvent::ContentBlockDelta { delta, .. }) => {
                    return Ok(Some(delta));
                }
                Some(MessageStreamEvent::Error { error }) => {
                    self.state = ReaderState::Failed;
                    return Err(ClientError::StreamProtocol {
                        error_type: error.error_type,
                        message: error.message,
                    });
                }
                Some(MessageStreamEvent::MessageStop) => {
                    self.state = ReaderState::Exhausted;
                    return Ok(None);
                }
                Some(_) => continue,
            }
        }
    }

    /// Release the underlying response body. Dropping the stream has the
    /// same effect; this just names the point of release.
    pub fn close(self) {}

    /// Advance to the next `data: ` line and return its payload bytes.
    ///
    /// Performs one line read per buffered line, looping only to skip blank
    /// separators and non-data lines (`event:`, `id:`, comments). A trailing
    /// unterminated line at end of source is discarded.
    async fn next_data_line(&mut self) -> Result<Option<Bytes>> {
        loop {
            match self.state {
                ReaderState::Exhausted => return Ok(None),
                ReaderState::Failed => {
                    return Err(ClientError::StreamProtocol {
                        error_type: "state_error".to_string(),
                        message: "read from a stream that previously failed".to_string(),
                    });
                }
                ReaderState::AwaitingLine => {}
            }

            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let mut line = self.buffer.split_to(pos + 1);
                line.truncate(pos);
                if line.last() == Some(&b'\r') {
                    line.truncate(line.len() - 1);
                }

                if line.is_empty() {
                    // frame separator
                    continue;
                }

                if line.starts_with(DATA_PREFIX) {
                    return Ok(Some(line.split_off(DATA_PREFIX.len()).freeze()));
                }

                // Unrecognized SSE fields are skipped for forward
                // compatibility.
                trace!(line = %String::from_utf8_lossy(&line), "skipping non-data line");
                continue;
            }

            match self.source.next().await {
                Some(Ok(chunk)) => self.buffer.extend_from_slice(&chunk),
                Some(Err(e)) => {
                    self.state = ReaderState::Failed;
                    return Err(e);
                }
                None => {
                    self.state = ReaderState::Exhausted;
                    return Ok(None);
                }
            }
        }
    }
}

impl std::fmt::Debug for MessageStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStream")
            .field("buffered", &self.buffer.len())
            .field("state", &self.state)
            .finish()
    }
}
