use serde::{Deserialize, Serialize};

use super::content::{ContentBlock, InputMessage, Role, is_false};
use crate::error::Result;

pub const CLAUDE_3_5_SONNET: &str = "claude-3-5-sonnet-20240620";
pub const CLAUDE_3_OPUS: &str = "claude-3-opus-20240229";
pub const CLAUDE_3_SONNET: &str = "claude-3-sonnet-20240229";
pub const CLAUDE_3_HAIKU: &str = "claude-3-haiku-20240307";

/// Messages API request body.
///
/// Wire field order is `model`, `messages`, `max_tokens`, then the optional
/// sampling and tool parameters; optionals are omitted when unset.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MessageRequest {
    pub model: String,

    pub messages: Vec<InputMessage>,

    /// Maximum tokens to generate (always emitted, even when 0)
    #[serde(default)]
    pub max_tokens: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequences: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RequestMetadata>,

    /// Enable streaming
    #[serde(default, skip_serializing_if = "is_false")]
    pub stream: bool,

    /// Optional system prompt (top-level field)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,

    /// Top-K sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<u32>,

    /// Top-P sampling
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<Tool>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_choice: Option<ToolChoice>,
}

impl MessageRequest {
    pub fn new(model: impl Into<String>, messages: Vec<InputMessage>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages,
            max_tokens,
            temperature: None,
            stop_sequences: None,
            metadata: None,
            stream: false,
            system: None,
            top_k: None,
            top_p: None,
            tools: None,
            tool_choice: None,
        }
    }

    /// Check every message's content-exclusivity invariant before encoding,
    /// so the conflict surfaces as a typed error instead of a serializer
    /// failure.
    pub fn validate(&self) -> Result<()> {
        for message in &self.messages {
            message.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RequestMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tool {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// JSON Schema describing the tool's input
    pub input_schema: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolChoice {
    Auto,
    Any,
    Tool { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    EndTurn,
    MaxTokens,
    StopSequence,
    ToolUse,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Messages API response body, also carried whole by the `message_start`
/// stream event.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MessageResponse {
    pub id: String,

    /// Always "message"
    #[serde(rename = "type")]
    pub response_type: String,

    pub content: Vec<ContentBlock>,

    pub role: Role,

    pub model: String,

    #[serde(default)]
    pub stop_reason: Option<StopReason>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_sequence: Option<String>,

    #[serde(default)]
    pub usage: Usage,
}
