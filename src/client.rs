use futures::TryStreamExt;
use reqwest::Response;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::message::{MessageRequest, MessageResponse};
use crate::models::stream::ErrorEnvelope;
use crate::streaming::MessageStream;

const MESSAGES_PATH: &str = "/messages";

/// Anthropic Messages API client.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Client with the default configuration and the given API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(ClientConfig::new(api_key))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { http, config })
    }

    /// Single-shot message completion.
    ///
    /// Rejects requests with `stream` enabled; use
    /// [`create_message_stream`](Self::create_message_stream) for those.
    pub async fn create_message(&self, request: &MessageRequest) -> Result<MessageResponse> {
        if request.stream {
            return Err(ClientError::InvalidRequest(
                "streaming is not supported by create_message, use create_message_stream"
                    .to_string(),
            ));
        }

        let response = self.post_messages(request).await?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Streaming message completion.
    ///
    /// Forces `stream` on and hands the response body to a
    /// [`MessageStream`], which owns it until dropped or closed.
    pub async fn create_message_stream(&self, mut request: MessageRequest) -> Result<MessageStream> {
        request.stream = true;

        let response = self.post_messages(&request).await?;
        info!(status = %response.status(), "opened message stream");

        let source = response.bytes_stream().map_err(ClientError::from);
        Ok(MessageStream::new(Box::pin(source)))
    }

    async fn post_messages(&self, request: &MessageRequest) -> Result<Response> {
        request.validate()?;
        let body = serde_json::to_vec(request)?;

        let url = format!("{}{}", self.config.base_url, MESSAGES_PATH);
        debug!(bytes = body.len(), %url, "sending messages request");

        let response = self
            .http
            .post(&url)
            .header("content-type", "application/json")
            .header("anthropic-version", &self.config.api_version)
            .header("x-api-key", &self.config.api_key)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = %status, "messages request failed");
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(e) => return Err(ClientError::Http(e)),
            };
            return Err(decode_error_body(status.as_u16(), &body));
        }

        Ok(response)
    }
}

/// Decode a non-success response body into an [`ClientError::Api`].
///
/// Bodies that don't carry the `{"error":{"type","message"}}` envelope
/// degrade to a generic error wrapping the raw body.
fn decode_error_body(status: u16, body: &[u8]) -> ClientError {
    match serde_json::from_slice::<ErrorEnvelope>(body) {
        Ok(envelope) => ClientError::Api {
            status,
            error_type: envelope.error.error_type,
            message: envelope.error.message,
        },
        Err(_) => ClientError::Api {
            status,
            error_type: "api_error".to_string(),
            message: String::from_utf8_lossy(body).into_owned(),
        },
    }
}
