//! # Anthropic Client
//!
//! Client library for the Anthropic Messages API.
//!
//! ## Overview
//!
//! This library provides:
//! - Typed message content blocks (text, image, tool use, tool result) with
//!   the exact wire JSON shapes the API expects
//! - Request/response models for the `/messages` endpoint
//! - Incremental SSE decoding of streaming responses into typed events
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use anthropic_client::{Client, InputMessage, MessageRequest, Role};
//!
//! # async fn run() -> anthropic_client::Result<()> {
//! let client = Client::new("my-api-key")?;
//!
//! let request = MessageRequest::new(
//!     anthropic_client::models::message::CLAUDE_3_5_SONNET,
//!     vec![InputMessage::text(Role::User, "Hello, Claude")],
//!     1024,
//! );
//!
//! // Single-shot completion
//! let response = client.create_message(&request).await?;
//!
//! // Or stream it, pulling one delta at a time
//! let mut stream = client.create_message_stream(request).await?;
//! while let Some(delta) = stream.recv().await? {
//!     println!("{delta:?}");
//! }
//! stream.close();
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - HTTP client for the Messages API
//! - [`config`] - Client configuration
//! - [`error`] - Error types and handling
//! - [`models`] - Content blocks, requests, responses, stream events
//! - [`streaming`] - Pull-based SSE stream decoder

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod streaming;

pub use client::Client;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use models::{
    ContentBlock, ImageSource, InputMessage, MediaType, MessageRequest, MessageResponse,
    MessageStreamDelta, MessageStreamEvent, Role, ToolResultContent,
};
pub use streaming::{EventSource, MessageStream};
