//! Validate command implementation.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use super::read_structured_file;
use crate::adapters::catalogs::builtin_registry;
use crate::domain::response::{extract_field, sanitize};
use crate::domain::{
    AppError, OutputFormat, ResponseParser, SchemaNode, generate_validation_summary,
};

#[derive(Args, Debug)]
#[command(group(clap::ArgGroup::new("source").required(true).args(["template", "schema"])))]
pub struct ValidateArgs {
    /// Validate against a built-in template's response schema
    #[arg(short, long)]
    template: Option<String>,
    /// Validate against a JSON or YAML schema file
    #[arg(short, long)]
    schema: Option<PathBuf>,
    /// Response file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,
    /// Response format (defaults to the template's, else json)
    #[arg(short, long)]
    format: Option<OutputFormat>,
    /// Trim strings and collapse blank-line runs in the parsed data
    #[arg(long)]
    sanitize: bool,
    /// Print one field of the parsed data by dotted path
    #[arg(long)]
    field: Option<String>,
    /// Print the full parse result as JSON instead of the summary
    #[arg(long)]
    json: bool,
}

/// Print the validation summary. Exit code 1 when the response has errors.
pub fn run_validate(args: ValidateArgs) -> Result<i32, AppError> {
    let (schema, template_format) = match (&args.template, &args.schema) {
        (Some(id), _) => {
            let registry = builtin_registry()?;
            let template =
                registry.get(id).ok_or_else(|| AppError::TemplateNotFound(id.clone()))?;
            (template.response_schema.clone(), template.output_format)
        }
        (None, Some(path)) => {
            let value = read_structured_file(path, "schema file")?;
            let schema: SchemaNode =
                serde_json::from_value(value).map_err(|e| AppError::ParseError {
                    what: format!("schema file {}", path.display()),
                    details: e.to_string(),
                })?;
            (schema, OutputFormat::Json)
        }
        (None, None) => {
            return Err(AppError::config_error("Either --template or --schema is required"));
        }
    };

    let content = match &args.input {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            AppError::config_error(format!("Failed to read response file {}: {}", path.display(), e))
        })?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let format = args.format.unwrap_or(template_format);
    let mut result = ResponseParser::parse_and_validate(&content, &schema, format);
    if args.sanitize {
        result.data = result.data.map(sanitize);
    }

    if let Some(path) = &args.field {
        let field = result.data.as_ref().and_then(|data| extract_field(data, path));
        match field {
            Some(value) => println!("{}", to_pretty_json(value)?),
            None => eprintln!("⚠️ Field not found: {}", path),
        }
    } else if args.json {
        println!("{}", to_pretty_json(&result)?);
    } else {
        println!("{}", generate_validation_summary(&result));
    }

    Ok(if result.success { 0 } else { 1 })
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::ParseError {
        what: "validation output".to_string(),
        details: e.to_string(),
    })
}
