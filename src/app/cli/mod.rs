//! CLI Adapter.

mod invoke;
mod render;
mod templates;
mod validate;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::domain::{AppError, PromptTemplate};

#[derive(Parser)]
#[command(name = "thrive")]
#[command(version)]
#[command(
    about = "Compile coaching prompts, invoke the model and validate its answers",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect built-in prompt templates
    #[clap(visible_alias = "t")]
    Templates {
        #[command(subcommand)]
        command: templates::TemplatesCommands,
    },
    /// Print the compiled user prompt for a template
    #[clap(visible_alias = "r")]
    Render {
        /// Template id
        template: String,
        #[command(flatten)]
        input: VariablesArgs,
    },
    /// Invoke a template and print the result as JSON
    #[clap(visible_alias = "i")]
    Invoke(invoke::InvokeArgs),
    /// Validate a model response against a template or schema
    #[clap(visible_alias = "v")]
    Validate(validate::ValidateArgs),
}

/// Where template variables come from.
#[derive(clap::Args, Debug, Default)]
pub(crate) struct VariablesArgs {
    /// JSON or YAML file with template variables
    #[arg(long, conflicts_with = "example")]
    vars: Option<PathBuf>,
    /// Use the template's first example input
    #[arg(long)]
    example: bool,
}

impl VariablesArgs {
    fn resolve(&self, template: &PromptTemplate) -> Result<Value, AppError> {
        if let Some(path) = &self.vars {
            return read_structured_file(path, "variables file");
        }
        if self.example {
            return template.first_example().map(|example| example.input.clone()).ok_or_else(
                || AppError::config_error(format!("Template '{}' has no examples", template.id)),
            );
        }
        Ok(Value::Object(Default::default()))
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Templates { command } => templates::run_templates(command).map(|_| 0),
        Commands::Render { template, input } => render::run_render(&template, &input).map(|_| 0),
        Commands::Invoke(args) => invoke::run_invoke(args),
        Commands::Validate(args) => validate::run_validate(args),
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Read a JSON or YAML document. YAML is a superset of JSON, so one parser covers both.
fn read_structured_file(path: &Path, what: &str) -> Result<Value, AppError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::config_error(format!("Failed to read {} {}: {}", what, path.display(), e))
    })?;
    serde_yaml::from_str(&content).map_err(|e| AppError::ParseError {
        what: format!("{} {}", what, path.display()),
        details: e.to_string(),
    })
}
