//! Template invocation: resolve, render, call the model and validate the answer.

use std::time::Instant;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::coaching::{
    BiohackSuggesterInput, BiohackSuggesterResponse, CheckInSentimentInput,
    CheckInSentimentResponse, CoachingTask, GptModel, HabitReviewInput, HabitReviewResponse,
    JournalInsightInput, JournalInsightResponse,
};
use crate::domain::{
    InvocationMetrics, InvocationRequest, InvocationResult, OutputFormat, PromptTemplate,
    ResponseParser,
};
use crate::ports::{CompletionRequest, ModelClient, ResponseFormat, TemplateCatalog};

const TEST_PROMPT_TEMPERATURE: f64 = 0.3;

/// Where answers come from.
pub enum InvocationBackend {
    /// Answer from each template's first worked example without any network call.
    Offline,
    /// Call the model endpoint through the given client.
    Live(Box<dyn ModelClient>),
}

impl std::fmt::Debug for InvocationBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvocationBackend::Offline => f.write_str("Offline"),
            InvocationBackend::Live(_) => f.write_str("Live"),
        }
    }
}

/// Runs prompt templates end to end.
///
/// Every outcome, including lookup and transport failures, is reported through
/// [`InvocationResult`]; no method returns `Err` or panics.
#[derive(Debug)]
pub struct PromptOrchestrator<C: TemplateCatalog> {
    catalog: C,
    backend: InvocationBackend,
    default_model: String,
}

impl<C: TemplateCatalog> PromptOrchestrator<C> {
    pub fn new(catalog: C, backend: InvocationBackend, default_model: impl Into<String>) -> Self {
        Self { catalog, backend, default_model: default_model.into() }
    }

    pub fn offline(catalog: C) -> Self {
        Self::new(catalog, InvocationBackend::Offline, GptModel::default().as_str())
    }

    pub fn is_offline(&self) -> bool {
        matches!(self.backend, InvocationBackend::Offline)
    }

    pub fn default_model(&self) -> &str {
        &self.default_model
    }

    pub fn templates(&self) -> Vec<&PromptTemplate> {
        self.catalog.list()
    }

    pub fn template(&self, id: &str) -> Option<&PromptTemplate> {
        self.catalog.get(id)
    }

    /// Invoke a template and decode the validated answer into `T`.
    pub fn invoke<T: DeserializeOwned>(&self, request: &InvocationRequest) -> InvocationResult<T> {
        let started = Instant::now();

        let Some(template) = self.catalog.get(&request.template_id) else {
            tracing::info!(template = %request.template_id, "unknown template requested");
            return InvocationResult::failed(
                format!("Template not found: {}", request.template_id),
                elapsed(started, 0),
            );
        };

        let rendered = template.render_user_prompt(&request.variables);
        if !rendered.is_complete() {
            tracing::debug!(
                template = %template.id,
                unresolved = ?rendered.unresolved,
                "prompt rendered with unresolved variables"
            );
        }

        let client = match &self.backend {
            InvocationBackend::Offline => {
                let value = template.offline_response();
                let raw = offline_raw_response(&value, template.output_format);
                tracing::info!(template = %template.id, "answered from offline example");
                return finish(template, raw, InvocationMetrics::default());
            }
            InvocationBackend::Live(client) => client,
        };

        let completion = CompletionRequest {
            model: request.model.clone().unwrap_or_else(|| self.default_model.clone()),
            system_prompt: template.system_prompt.clone(),
            user_prompt: rendered.text,
            temperature: request.temperature.unwrap_or(template.defaults.temperature),
            max_tokens: request.max_tokens.unwrap_or(template.defaults.max_tokens),
            response_format: match template.output_format {
                OutputFormat::Json => ResponseFormat::JsonObject,
                OutputFormat::Yaml | OutputFormat::Text => ResponseFormat::Text,
            },
        };

        match client.complete(completion) {
            Ok(response) => {
                let metrics = elapsed(started, response.tokens_used);
                tracing::info!(
                    template = %template.id,
                    tokens_used = metrics.tokens_used,
                    processing_time_ms = metrics.processing_time_ms,
                    "model call completed"
                );
                finish(template, response.content, metrics)
            }
            Err(err) => {
                tracing::warn!(template = %template.id, error = %err, "model call failed");
                InvocationResult::failed(err.to_string(), elapsed(started, 0))
            }
        }
    }

    pub fn invoke_value(&self, request: &InvocationRequest) -> InvocationResult<Value> {
        self.invoke(request)
    }

    /// Try a template with `sample_input`, or its first example input when none is given.
    pub fn test_prompt(&self, template_id: &str, sample_input: Option<Value>) -> InvocationResult {
        let Some(template) = self.catalog.get(template_id) else {
            return InvocationResult::failed(
                format!("Template not found: {}", template_id),
                InvocationMetrics::default(),
            );
        };

        let variables = sample_input
            .or_else(|| template.first_example().map(|example| example.input.clone()))
            .unwrap_or_else(|| Value::Object(Default::default()));

        let request = InvocationRequest::new(template_id, variables)
            .with_model(GptModel::Gpt4Turbo.as_str())
            .with_temperature(TEST_PROMPT_TEMPERATURE);
        self.invoke(&request)
    }

    /// Run a typed coaching task with its tuned model and temperature.
    pub fn analyze<I: CoachingTask>(&self, input: &I) -> InvocationResult<I::Response> {
        let variables = match serde_json::to_value(input) {
            Ok(variables) => variables,
            Err(err) => {
                return InvocationResult::failed(
                    format!("Failed to encode input: {}", err),
                    InvocationMetrics::default(),
                );
            }
        };

        let request = InvocationRequest::new(I::TEMPLATE.as_str(), variables)
            .with_model(I::MODEL.as_str())
            .with_temperature(I::TEMPERATURE);
        self.invoke(&request)
    }

    pub fn analyze_habits(&self, input: &HabitReviewInput) -> InvocationResult<HabitReviewResponse> {
        self.analyze(input)
    }

    pub fn analyze_check_in_sentiment(
        &self,
        input: &CheckInSentimentInput,
    ) -> InvocationResult<CheckInSentimentResponse> {
        self.analyze(input)
    }

    pub fn analyze_journal_entry(
        &self,
        input: &JournalInsightInput,
    ) -> InvocationResult<JournalInsightResponse> {
        self.analyze(input)
    }

    pub fn suggest_biohacks(
        &self,
        input: &BiohackSuggesterInput,
    ) -> InvocationResult<BiohackSuggesterResponse> {
        self.analyze(input)
    }
}

fn elapsed(started: Instant, tokens_used: u32) -> InvocationMetrics {
    InvocationMetrics { tokens_used, processing_time_ms: started.elapsed().as_millis() as u64 }
}

/// Text a model would have sent for `value`. Plain-text templates get
/// string answers verbatim so they are not re-quoted as JSON.
fn offline_raw_response(value: &Value, format: OutputFormat) -> String {
    match (format, value) {
        (OutputFormat::Text, Value::String(text)) => text.clone(),
        _ => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
    }
}

/// Validate raw model text against the template schema and decode it.
fn finish<T: DeserializeOwned>(
    template: &PromptTemplate,
    raw: String,
    metrics: InvocationMetrics,
) -> InvocationResult<T> {
    let parsed = ResponseParser::parse_and_validate(&raw, &template.response_schema, template.output_format);
    let report = parsed.without_data();

    if !parsed.success {
        tracing::warn!(
            template = %template.id,
            errors = parsed.error_count(),
            "model response failed validation"
        );
        return InvocationResult::failed(
            format!("Response validation failed with {} errors", parsed.error_count()),
            metrics,
        )
        .with_raw_response(raw)
        .with_validation(report);
    }

    let value = parsed.data.unwrap_or(Value::Null);
    match serde_json::from_value::<T>(value) {
        Ok(data) => InvocationResult::succeeded(data, raw, metrics).with_validation(report),
        Err(err) => InvocationResult::failed(format!("Failed to decode response: {}", err), metrics)
            .with_raw_response(raw)
            .with_validation(report),
    }
}
