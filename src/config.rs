use crate::error::{ClientError, Result};
use std::env;
use std::time::Duration;

/// Default base URL of the Anthropic Messages API.
pub const ANTHROPIC_API_URL: &str = "https://api.anthropic.com/v1";

/// API version sent in the `anthropic-version` header.
pub const ANTHROPIC_API_VERSION: &str = "2023-06-01";

const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Standard configuration with just an API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: ANTHROPIC_API_URL.to_string(),
            api_version: ANTHROPIC_API_VERSION.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// `ANTHROPIC_API_KEY` is required; `ANTHROPIC_BASE_URL` overrides the
    /// default endpoint.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("ANTHROPIC_API_KEY")
            .map_err(|_| ClientError::Config("ANTHROPIC_API_KEY not set".to_string()))?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = env::var("ANTHROPIC_BASE_URL") {
            config.base_url = base_url;
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(ClientError::Config("API key is empty".to_string()));
        }

        if self.base_url.is_empty() {
            return Err(ClientError::Config("Base URL is empty".to_string()));
        }

        Ok(())
    }
}
