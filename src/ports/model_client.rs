//! Language-model client port definition.

use crate::domain::AppError;

/// Answer shape the model is asked to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Ask the endpoint to return a single JSON object.
    #[default]
    JsonObject,
    /// Free text.
    Text,
}

impl ResponseFormat {
    /// API string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseFormat::JsonObject => "json_object",
            ResponseFormat::Text => "text",
        }
    }
}

/// One chat-completion exchange: a system and a user message.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub response_format: ResponseFormat,
}

/// The assistant message and what it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionResponse {
    pub content: String,
    pub tokens_used: u32,
}

/// Port for language-model completions.
pub trait ModelClient {
    /// Send one completion request. Implementations perform no validation of
    /// the returned content.
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError>;
}
