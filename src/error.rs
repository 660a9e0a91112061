use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("can't use both content and content_blocks on the same message")]
    ContentConflict,

    #[error("malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("API error {status} of type \"{error_type}\": {message}")]
    Api {
        status: u16,
        error_type: String,
        message: String,
    },

    #[error("stream error of type \"{error_type}\": {message}")]
    StreamProtocol {
        error_type: String,
        message: String,
    },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
