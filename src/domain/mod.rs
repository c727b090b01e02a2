pub mod coaching;
pub mod configuration;
pub mod error;
pub mod invocation;
pub mod prompt;
pub mod response;
pub mod schema;
pub mod template;

pub use configuration::{
    DEFAULT_CONFIG_FILE, InvocationMode, ModelApiConfig, ThriveConfig, load_config,
    parse_config_content,
};
pub use error::AppError;
pub use invocation::{InvocationMetrics, InvocationRequest, InvocationResult};
pub use prompt::{GenerationDefaults, OutputFormat, PromptExample, PromptTemplate, TemplateRegistry};
pub use response::{
    ErrorCode, ParseResult, ParsedFormat, ResponseParser, Severity, ValidationError,
    ValidationWarning, generate_validation_summary,
};
pub use schema::{SchemaKind, SchemaNode};
pub use template::{RenderOutput, RenderVariables};
