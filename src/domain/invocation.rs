//! Invocation request and result types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::response::ParseResult;

/// One template invocation as callers submit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationRequest {
    pub template_id: String,
    #[serde(default = "empty_variables")]
    pub variables: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

fn empty_variables() -> Value {
    Value::Object(Default::default())
}

impl InvocationRequest {
    pub fn new(template_id: impl Into<String>, variables: Value) -> Self {
        Self { template_id: template_id.into(), variables, model: None, temperature: None, max_tokens: None }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Cost and latency of one invocation. Partial on failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationMetrics {
    pub tokens_used: u32,
    pub processing_time_ms: u64,
}

/// Uniform outcome of an invocation. `data` is set only on success and
/// `error` only on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvocationResult<T = Value> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<String>,
    pub metrics: InvocationMetrics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation: Option<ParseResult<()>>,
}

impl<T> InvocationResult<T> {
    pub fn succeeded(data: T, raw_response: String, metrics: InvocationMetrics) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            raw_response: Some(raw_response),
            metrics,
            validation: None,
        }
    }

    pub fn failed(error: impl Into<String>, metrics: InvocationMetrics) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            raw_response: None,
            metrics,
            validation: None,
        }
    }

    pub fn with_raw_response(mut self, raw_response: impl Into<String>) -> Self {
        self.raw_response = Some(raw_response.into());
        self
    }

    pub fn with_validation(mut self, validation: ParseResult<()>) -> Self {
        self.validation = Some(validation);
        self
    }
}
