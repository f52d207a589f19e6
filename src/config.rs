//! Configuration management for vidscout.
//!
//! Configuration can be set via environment variables:
//! - `OPENAI_API_KEY` - Required. API key for the chat-completions provider.
//! - `YOUTUBE_API_KEY` - Required. API key for the YouTube Data API.
//! - `OPENAI_BASE_URL` - Optional. Base URL of an OpenAI-compatible API. Defaults to `https://api.openai.com/v1`.
//! - `DEFAULT_MODEL` - Optional. The default LLM model to use. Defaults to `gpt-4o-mini`.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations per turn. Defaults to `10`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat-completions provider API key
    pub openai_api_key: String,

    /// YouTube Data API key
    pub youtube_api_key: String,

    /// Base URL of the chat-completions API
    pub openai_base_url: String,

    /// Default LLM model identifier
    pub default_model: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum iterations for the agent loop per user turn
    pub max_iterations: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENAI_API_KEY` or
    /// `YOUTUBE_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let openai_api_key = std::env::var("OPENAI_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENAI_API_KEY".to_string()))?;

        let youtube_api_key = std::env::var("YOUTUBE_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("YOUTUBE_API_KEY".to_string()))?;

        let openai_base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

        let default_model =
            std::env::var("DEFAULT_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            openai_api_key,
            youtube_api_key,
            openai_base_url,
            default_model,
            host,
            port,
            max_iterations,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(openai_api_key: String, youtube_api_key: String, default_model: String) -> Self {
        Self {
            openai_api_key,
            youtube_api_key,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            default_model,
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_iterations: 10,
        }
    }
}
