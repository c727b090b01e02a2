//! Configuration models loaded from `thrive.toml`.

use serde::{Deserialize, Serialize};
use url::Url;

use super::InvocationMode;
use crate::domain::AppError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThriveConfig {
    /// Language-model endpoint configuration.
    #[serde(default)]
    pub model: ModelApiConfig,
}

impl ThriveConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.model.validate()
    }
}

/// Language-model endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelApiConfig {
    /// Whether invocations call the endpoint or answer from template examples.
    #[serde(default)]
    pub mode: InvocationMode,
    /// Chat-completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model used when a request does not name one.
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl Default for ModelApiConfig {
    fn default() -> Self {
        Self {
            mode: InvocationMode::default(),
            api_url: default_api_url(),
            default_model: default_model(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout(),
        }
    }
}

impl ModelApiConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.default_model.trim().is_empty() {
            return Err(AppError::InvalidConfig("default_model must not be empty".to_string()));
        }
        if self.api_key_env.trim().is_empty() {
            return Err(AppError::InvalidConfig("api_key_env must not be empty".to_string()));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4-1106-preview".to_string()
}

fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_timeout() -> u64 {
    60
}
