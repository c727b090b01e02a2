//! Invoke command implementation.

use std::path::PathBuf;

use clap::Args;

use super::VariablesArgs;
use crate::app::api;
use crate::domain::{AppError, InvocationRequest};

#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// Template id
    template: String,
    #[command(flatten)]
    input: VariablesArgs,
    /// Model id (defaults to the configured model)
    #[arg(long)]
    model: Option<String>,
    /// Sampling temperature (defaults to the template's)
    #[arg(long)]
    temperature: Option<f64>,
    /// Completion token limit (defaults to the template's)
    #[arg(long)]
    max_tokens: Option<u32>,
    /// Configuration file (defaults to ./thrive.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Answer from template examples without calling the model
    #[arg(long)]
    offline: bool,
}

/// Print the invocation result as JSON. Exit code 1 when it failed.
pub fn run_invoke(args: InvokeArgs) -> Result<i32, AppError> {
    let orchestrator = api::orchestrator_from_config_file(args.config.as_deref(), args.offline)?;

    let variables = match orchestrator.template(&args.template) {
        Some(template) => args.input.resolve(template)?,
        None => serde_json::Value::Object(Default::default()),
    };

    let mut request = InvocationRequest::new(args.template, variables);
    request.model = args.model;
    request.temperature = args.temperature;
    request.max_tokens = args.max_tokens;

    let result = orchestrator.invoke_value(&request);
    let json = serde_json::to_string_pretty(&result).map_err(|e| AppError::ParseError {
        what: "invocation result".to_string(),
        details: e.to_string(),
    })?;
    println!("{}", json);

    Ok(if result.success { 0 } else { 1 })
}
