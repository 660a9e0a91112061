use serde::{Deserialize, Serialize};

use super::content::ContentBlock;
use super::message::{MessageResponse, StopReason};

/// One decoded SSE frame from a streaming Messages API response.
///
/// Constructed fresh per frame, immutable afterwards; equality is
/// structural.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageStreamEvent {
    MessageStart {
        message: MessageResponse,
    },

    ContentBlockStart {
        index: u32,
        content_block: ContentBlock,
    },

    ContentBlockDelta {
        index: u32,
        delta: MessageStreamDelta,
    },

    ContentBlockStop {
        index: u32,
    },

    MessageDelta {
        delta: MessageDeltaBody,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        usage: Option<UsageDelta>,
    },

    MessageStop,

    Ping,

    Error {
        error: ApiErrorDetail,
    },

    /// Event types this library doesn't know yet. Decoded rather than
    /// rejected so new server-side event types don't break the stream; the
    /// delta read mode skips them like any other non-delta event.
    #[serde(other)]
    Unknown,
}

/// Incremental content fragment carried by `content_block_delta`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageStreamDelta {
    TextDelta { text: String },
    InputJsonDelta { partial_json: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessageDeltaBody {
    #[serde(default)]
    pub stop_reason: Option<StopReason>,

    #[serde(default)]
    pub stop_sequence: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct UsageDelta {
    pub output_tokens: u32,
}

/// Provider-supplied error detail, carried by `error` stream events and by
/// the non-2xx error envelope.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiErrorDetail {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
}

/// Top-level body of a non-success HTTP response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ApiErrorDetail,
}
