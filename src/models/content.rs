use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, SerializeStruct, Serializer};

use crate::error::{ClientError, Result};

/// Message author role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Encoding kind of an [`ImageSource`]. The API only accepts base64.
pub const IMAGE_SOURCE_BASE64: &str = "base64";

/// Media types accepted for image content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum MediaType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/gif")]
    Gif,
    #[serde(rename = "image/webp")]
    Webp,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageSource {
    /// Always "base64"
    #[serde(rename = "type")]
    pub source_type: String,

    pub media_type: MediaType,

    /// Base64-encoded image data
    pub data: String,
}

impl ImageSource {
    pub fn base64(media_type: MediaType, data: impl Into<String>) -> Self {
        Self {
            source_type: IMAGE_SOURCE_BASE64.to_string(),
            media_type,
            data: data.into(),
        }
    }
}

/// A single block of message content.
///
/// Serialized as a `type`-tagged object carrying only the fields of the
/// active variant. The `source` of an image and the nested `content` of a
/// tool result are omitted entirely when unset, never emitted as empty
/// objects.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        text: String,
    },
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<ImageSource>,
    },
    ToolUse {
        id: String,
        name: String,
        input: serde_json::Map<String, serde_json::Value>,
    },
    ToolResult {
        tool_use_id: String,
        #[serde(default, skip_serializing_if = "is_false")]
        is_error: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<ToolResultContent>,
    },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    pub fn image(source: ImageSource) -> Self {
        Self::Image {
            source: Some(source),
        }
    }

    pub fn tool_use(
        id: impl Into<String>,
        name: impl Into<String>,
        input: serde_json::Map<String, serde_json::Value>,
    ) -> Self {
        Self::ToolUse {
            id: id.into(),
            name: name.into(),
            input,
        }
    }

    pub fn tool_result(tool_use_id: impl Into<String>, content: ToolResultContent) -> Self {
        Self::ToolResult {
            tool_use_id: tool_use_id.into(),
            is_error: false,
            content: Some(content),
        }
    }
}

/// Content nested inside a `tool_result` block. Same shape as the top-level
/// text/image blocks, minus further nesting.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolResultContent {
    Text {
        text: String,
    },
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<ImageSource>,
    },
}

pub(crate) fn is_false(v: &bool) -> bool {
    !*v
}

/// One turn of conversation input.
///
/// `content` and `content_blocks` are mutually exclusive: use the plain
/// string for simple text, the block vector for multiple or non-text parts.
/// Both fields are freely assignable; the conflict is caught when the
/// message is encoded, not when it is built. Call [`InputMessage::validate`]
/// to get the typed [`ClientError::ContentConflict`] ahead of serialization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputMessage {
    pub role: Role,
    pub content: String,
    pub content_blocks: Vec<ContentBlock>,
}

impl InputMessage {
    pub fn text(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            content_blocks: Vec::new(),
        }
    }

    pub fn blocks(role: Role, content_blocks: Vec<ContentBlock>) -> Self {
        Self {
            role,
            content: String::new(),
            content_blocks,
        }
    }

    /// Check the content-exclusivity invariant.
    pub fn validate(&self) -> Result<()> {
        if !self.content.is_empty() && !self.content_blocks.is_empty() {
            return Err(ClientError::ContentConflict);
        }
        Ok(())
    }
}

impl Serialize for InputMessage {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.validate().map_err(S::Error::custom)?;

        let mut state = serializer.serialize_struct("InputMessage", 2)?;
        state.serialize_field("role", &self.role)?;
        if !self.content_blocks.is_empty() {
            state.serialize_field("content", &self.content_blocks)?;
        } else {
            // An empty string is valid "no content".
            state.serialize_field("content", &self.content)?;
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for InputMessage {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // `content` is polymorphic on the wire: a plain string for the common
        // case, an array of blocks otherwise. The untagged enum tries the
        // candidates in declaration order, each attempt isolated.
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum WireContent {
            Text(String),
            Blocks(Vec<ContentBlock>),
        }

        #[derive(serde::Deserialize)]
        struct WireMessage {
            role: Role,
            content: WireContent,
        }

        let wire = WireMessage::deserialize(deserializer)?;
        Ok(match wire.content {
            WireContent::Text(content) => InputMessage {
                role: wire.role,
                content,
                content_blocks: Vec::new(),
            },
            WireContent::Blocks(content_blocks) => InputMessage {
                role: wire.role,
                content: String::new(),
                content_blocks,
            },
        })
    }
}
