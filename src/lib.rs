//! thrive: prompt-template compilation, model invocation and response validation
//! for the Thrive wellness coach.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use adapters::catalogs::builtin_registry;
pub use app::api::{ThriveOrchestrator, build_orchestrator, orchestrator_from_config_file};
pub use app::{InvocationBackend, PromptOrchestrator};
pub use domain::template::{compile, render};
pub use domain::{
    AppError, InvocationRequest, InvocationResult, OutputFormat, ParseResult, PromptTemplate,
    RenderOutput, ResponseParser, SchemaNode, ThriveConfig, generate_validation_summary,
};

/// Parse and validate a model response against `schema`.
pub fn validate_response(
    content: &str,
    schema: &SchemaNode,
    format: OutputFormat,
) -> ParseResult {
    ResponseParser::parse_and_validate(content, schema, format)
}

/// Answer a request from the built-in templates' examples, without network access.
pub fn invoke_offline(request: &InvocationRequest) -> Result<InvocationResult, AppError> {
    let orchestrator = PromptOrchestrator::offline(builtin_registry()?);
    Ok(orchestrator.invoke_value(request))
}
