use std::io;

use thiserror::Error;

/// Library-wide error type for thrive operations.
///
/// Template rendering and response validation never produce this type; their
/// failures are carried inside `RenderOutput` and `ParseResult`. `AppError`
/// covers configuration, embedded assets, I/O and the model client port.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Required environment variable is not set.
    #[error("Environment variable '{0}' is not set")]
    EnvironmentVariableMissing(String),

    /// Embedded asset is missing or malformed.
    #[error("Asset error: {0}")]
    AssetError(String),

    /// Two templates were registered under the same id.
    #[error("Duplicate template id '{0}'")]
    DuplicateTemplate(String),

    /// Requested template id is not registered.
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// Language-model endpoint request failed.
    #[error("Model API error: {}", format_model_api_error(.status, .message))]
    ModelApiError { message: String, status: Option<u16> },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },
}

fn format_model_api_error(status: &Option<u16>, message: &str) -> String {
    match status {
        Some(code) => format!("{} - {}", code, message),
        None => message.to_string(),
    }
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
