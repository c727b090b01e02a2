//! Prompt templates and the registry that holds them.

mod registry;

pub use registry::TemplateRegistry;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::schema::SchemaNode;
use crate::domain::template::{self, RenderOutput};

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

/// How a template expects the model to answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Text,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            "text" => Ok(OutputFormat::Text),
            other => Err(format!("Unknown output format '{}'. Expected json, yaml or text", other)),
        }
    }
}

/// Sampling settings used when a request does not override them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationDefaults {
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
}

impl Default for GenerationDefaults {
    fn default() -> Self {
        Self { temperature: default_temperature(), max_tokens: default_max_tokens() }
    }
}

/// A worked input/output pair shipped with a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptExample {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub input: Value,
    pub expected_output: Value,
}

/// A named prompt: system instruction, user prompt template and expected answer shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PromptTemplate {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub system_prompt: String,
    pub user_prompt_template: String,
    #[serde(default)]
    pub output_format: OutputFormat,
    pub response_schema: SchemaNode,
    #[serde(default)]
    pub examples: Vec<PromptExample>,
    #[serde(default)]
    pub defaults: GenerationDefaults,
}

impl PromptTemplate {
    /// Compile the user prompt against caller variables.
    pub fn render_user_prompt(&self, variables: &Value) -> RenderOutput {
        template::render(&self.user_prompt_template, variables)
    }

    pub fn first_example(&self) -> Option<&PromptExample> {
        self.examples.first()
    }

    /// Canned answer used when no model is called: the first example's
    /// expected output, or a value generated from the schema.
    pub fn offline_response(&self) -> Value {
        match self.first_example() {
            Some(example) => example.expected_output.clone(),
            None => self.response_schema.mock_value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn template_yaml() -> &'static str {
        r#"
id: greet
name: Greeting
system_prompt: Be kind.
user_prompt_template: "Hello {{name}}"
response_schema:
  type: object
  properties:
    reply:
      type: string
  required: [reply]
"#
    }

    #[test]
    fn defaults_apply_when_omitted() {
        let template: PromptTemplate = serde_yaml::from_str(template_yaml()).unwrap();
        assert_eq!(template.output_format, OutputFormat::Json);
        assert_eq!(template.defaults, GenerationDefaults { temperature: 0.7, max_tokens: 2000 });
        assert!(template.examples.is_empty());
        assert_eq!(template.description, "");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let yaml = format!("{}unexpected: true\n", template_yaml());
        assert!(serde_yaml::from_str::<PromptTemplate>(&yaml).is_err());
    }

    #[test]
    fn renders_user_prompt() {
        let template: PromptTemplate = serde_yaml::from_str(template_yaml()).unwrap();
        assert_eq!(template.render_user_prompt(&json!({"name": "Sam"})).text, "Hello Sam");
    }

    #[test]
    fn offline_response_prefers_first_example() {
        let mut template: PromptTemplate = serde_yaml::from_str(template_yaml()).unwrap();
        assert_eq!(template.offline_response(), json!({"reply": "Mock string value"}));

        template.examples.push(PromptExample {
            description: None,
            input: json!({"name": "Sam"}),
            expected_output: json!({"reply": "Hi Sam"}),
        });
        assert_eq!(template.offline_response(), json!({"reply": "Hi Sam"}));
    }

    #[test]
    fn output_format_parses_from_str() {
        assert_eq!("yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
