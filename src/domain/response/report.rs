use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How serious a [`ValidationError`] is. Only `Error` fails a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Machine-readable classification of a [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidJson,
    ParseError,
    MissingRequired,
    InvalidType,
    InvalidEnum,
    InvalidNumber,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidJson => "INVALID_JSON",
            ErrorCode::ParseError => "PARSE_ERROR",
            ErrorCode::MissingRequired => "MISSING_REQUIRED",
            ErrorCode::InvalidType => "INVALID_TYPE",
            ErrorCode::InvalidEnum => "INVALID_ENUM",
            ErrorCode::InvalidNumber => "INVALID_NUMBER",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
    pub severity: Severity,
    pub code: ErrorCode,
}

impl ValidationError {
    pub fn error(path: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into(), severity: Severity::Error, code }
    }

    pub fn warning(path: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into(), severity: Severity::Warning, code }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into(), suggestion: None }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// The format the parser actually read, which may differ from the requested one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsedFormat {
    Json,
    Yaml,
    Text,
    Unknown,
}

/// Outcome of parsing and validating one model response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult<T = Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub original_text: String,
    pub parsed_format: ParsedFormat,
}

impl<T> ParseResult<T> {
    pub(crate) fn empty(original_text: &str) -> Self {
        Self {
            success: false,
            data: None,
            errors: Vec::new(),
            warnings: Vec::new(),
            original_text: original_text.to_string(),
            parsed_format: ParsedFormat::Unknown,
        }
    }

    /// Entries with severity `error`.
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|error| error.is_error()).count()
    }

    /// Warning-severity entries in `errors` plus every entry in `warnings`.
    pub fn warning_count(&self) -> usize {
        self.errors.len() - self.error_count() + self.warnings.len()
    }

    /// The report part of the result, for attaching to an invocation outcome.
    pub fn without_data(&self) -> ParseResult<()> {
        ParseResult {
            success: self.success,
            data: None,
            errors: self.errors.clone(),
            warnings: self.warnings.clone(),
            original_text: self.original_text.clone(),
            parsed_format: self.parsed_format,
        }
    }
}
