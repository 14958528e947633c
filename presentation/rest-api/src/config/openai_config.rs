use std::time::Duration;

use openai::client::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use super::env;

/// Configuration for OpenAI API access.
///
/// Environment variables:
/// - OPENAI_API_KEY: API key (required)
/// - OPENAI_BASE_URL: API root (default: "https://api.openai.com/v1")
/// - OPENAI_MODEL: chat model (default: "gpt-4o-mini")
pub struct OpenAIConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    /// HTTP-level timeout; set slightly above the generation timeout.
    pub request_timeout: Duration,
}

impl OpenAIConfig {
    pub fn from_env(generation_timeout: Duration) -> anyhow::Result<Self> {
        Ok(Self {
            api_key: env::required("OPENAI_API_KEY")?,
            base_url: env::optional_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            model: env::optional_or("OPENAI_MODEL", DEFAULT_MODEL),
            request_timeout: generation_timeout + Duration::from_secs(5),
        })
    }
}
