//! OpenAI-compatible chat-completions client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue, RETRY_AFTER};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, ModelApiConfig};
use crate::ports::{CompletionRequest, CompletionResponse, ModelClient, ResponseFormat};

const DEFAULT_STATUS_MESSAGE: &str = "Model API request failed";

/// HTTP transport for the chat-completions endpoint.
///
/// Each call sends exactly one request. A numeric `Retry-After` header on a
/// failure is surfaced in the error message as `retry_after_ms=<n>` so callers
/// can schedule their own retry.
#[derive(Clone)]
pub struct HttpModelClient {
    api_key: String,
    api_url: Url,
    client: Client,
}

impl std::fmt::Debug for HttpModelClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpModelClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpModelClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &ModelApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::ModelApiError {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self { api_key, api_url: config.api_url.clone(), client })
    }

    /// Create from the environment variable named by `config.api_key_env`.
    pub fn from_env_with_config(config: &ModelApiConfig) -> Result<Self, AppError> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| AppError::EnvironmentVariableMissing(config.api_key_env.clone()))?;

        Self::new(api_key, config)
    }

    fn send_request(&self, request: &ApiRequest) -> Result<CompletionResponse, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| AppError::ModelApiError {
                message: format!("HTTP request failed: {}", e),
                status: None,
            })?;

        let status = response.status();
        let retry_after_ms = response.headers().get(RETRY_AFTER).and_then(parse_retry_after_ms);
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            let api_response: ApiResponse =
                serde_json::from_str(&body_text).map_err(|e| AppError::ModelApiError {
                    message: format!("Failed to parse response: {}", e),
                    status: Some(status.as_u16()),
                })?;

            let content = api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .ok_or_else(|| AppError::ModelApiError {
                    message: "No response from the model".into(),
                    status: Some(status.as_u16()),
                })?;

            return Ok(CompletionResponse {
                content,
                tokens_used: api_response.usage.map(|usage| usage.total_tokens).unwrap_or(0),
            });
        }

        let mut message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if status.as_u16() == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        if let Some(value) = retry_after_ms {
            message.push_str(&format!(" (retry_after_ms={})", value));
        }

        Err(AppError::ModelApiError { message, status: Some(status.as_u16()) })
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormatBody>,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ResponseFormatBody {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
    #[serde(default)]
    usage: Option<ApiUsage>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Debug, Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiUsage {
    #[serde(default)]
    total_tokens: u32,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

fn parse_retry_after_ms(value: &HeaderValue) -> Option<u64> {
    let raw = value.to_str().ok()?.trim();
    let seconds = raw.parse::<u64>().ok()?;
    Some(seconds.saturating_mul(1000))
}

impl ModelClient for HttpModelClient {
    fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AppError> {
        let response_format = match request.response_format {
            ResponseFormat::JsonObject => {
                Some(ResponseFormatBody { kind: ResponseFormat::JsonObject.as_str() })
            }
            ResponseFormat::Text => None,
        };

        let api_request = ApiRequest {
            model: request.model,
            messages: vec![
                ChatMessage { role: "system", content: request.system_prompt },
                ChatMessage { role: "user", content: request.user_prompt },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
            response_format,
        };

        self.send_request(&api_request)
    }
}
