//! API facade for the application.
//!
//! Glue between configuration, the embedded catalogue and the model adapters.

use std::path::Path;

use crate::adapters::catalogs::builtin_registry;
use crate::adapters::HttpModelClient;
use crate::app::orchestrator::{InvocationBackend, PromptOrchestrator};
use crate::domain::{AppError, InvocationMode, TemplateRegistry, ThriveConfig, load_config};

pub type ThriveOrchestrator = PromptOrchestrator<TemplateRegistry>;

/// Build an orchestrator over the built-in templates for the configured mode.
///
/// Live mode reads the API key from `config.model.api_key_env` and fails when
/// it is unset.
pub fn build_orchestrator(config: &ThriveConfig) -> Result<ThriveOrchestrator, AppError> {
    let registry = builtin_registry()?;
    let model = &config.model;

    let backend = match model.mode {
        InvocationMode::Offline => InvocationBackend::Offline,
        InvocationMode::Live => {
            InvocationBackend::Live(Box::new(HttpModelClient::from_env_with_config(model)?))
        }
    };

    tracing::debug!(mode = model.mode.label(), templates = registry.len(), "orchestrator ready");
    Ok(PromptOrchestrator::new(registry, backend, model.default_model.clone()))
}

/// Load configuration from `config_path` (or `thrive.toml`) and build the orchestrator.
pub fn orchestrator_from_config_file(
    config_path: Option<&Path>,
    force_offline: bool,
) -> Result<ThriveOrchestrator, AppError> {
    let mut config = load_config(config_path)?;
    if force_offline {
        config.model.mode = InvocationMode::Offline;
    }
    build_orchestrator(&config)
}
