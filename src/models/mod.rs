pub mod content;
pub mod message;
pub mod stream;

pub use content::{ContentBlock, ImageSource, InputMessage, MediaType, Role, ToolResultContent};
pub use message::{
    MessageRequest, MessageResponse, RequestMetadata, StopReason, Tool, ToolChoice, Usage,
};
pub use stream::{
    ApiErrorDetail, ErrorEnvelope, MessageDeltaBody, MessageStreamDelta, MessageStreamEvent,
    UsageDelta,
};
