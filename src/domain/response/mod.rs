//! Parsing and validation of untrusted model output.
//!
//! The parser never fails: every problem is recorded in the returned
//! [`ParseResult`].

mod extract;
mod repair;
mod report;
mod sanitize;
mod summary;
mod validate;

pub use extract::extract_structured;
pub use repair::{RepairStep, Repaired, repair_json};
pub use report::{ErrorCode, ParseResult, ParsedFormat, Severity, ValidationError, ValidationWarning};
pub use sanitize::{extract_field, sanitize};
pub use summary::generate_validation_summary;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::prompt::OutputFormat;
use crate::domain::schema::SchemaNode;

/// Stateless entry point for response parsing.
pub struct ResponseParser;

impl ResponseParser {
    /// Parse `content` as `format` and validate it against `schema`.
    pub fn parse_and_validate(content: &str, schema: &SchemaNode, format: OutputFormat) -> ParseResult {
        let mut result = ParseResult::empty(content);

        let (value, parsed_format) = match format {
            OutputFormat::Text => (Value::String(content.to_string()), ParsedFormat::Text),
            OutputFormat::Json | OutputFormat::Yaml => match parse_structured(content, format, &mut result) {
                Some(parsed) => parsed,
                None => return result,
            },
        };

        let findings = validate::validate(&value, schema);
        result.errors.extend(findings.errors);
        result.warnings.extend(findings.warnings);
        result.parsed_format = parsed_format;
        result.success = result.error_count() == 0;
        result.data = Some(value);

        if !result.success {
            tracing::warn!(errors = result.error_count(), "response failed schema validation");
        }
        result
    }

    /// Like [`ResponseParser::parse_and_validate`], then decode into `T`.
    ///
    /// A valid value that does not decode becomes a `PARSE_ERROR`.
    pub fn parse_and_validate_as<T: DeserializeOwned>(
        content: &str,
        schema: &SchemaNode,
        format: OutputFormat,
    ) -> ParseResult<T> {
        let ParseResult { success, data, mut errors, warnings, original_text, parsed_format } =
            Self::parse_and_validate(content, schema, format);

        let mut typed = None;
        if success && let Some(value) = data {
            match serde_json::from_value::<T>(value) {
                Ok(decoded) => typed = Some(decoded),
                Err(err) => errors.push(ValidationError::error(
                    "root",
                    ErrorCode::ParseError,
                    format!("Parse error: {}", err),
                )),
            }
        }

        ParseResult { success: typed.is_some(), data: typed, errors, warnings, original_text, parsed_format }
    }
}

/// Strict parse, optional YAML fallback, then repair. Records failures on `result`.
///
/// The YAML fallback only accepts mappings and sequences; any prose is a valid
/// YAML scalar, so a scalar answer goes on to repair and fails as `INVALID_JSON`.
fn parse_structured(
    content: &str,
    format: OutputFormat,
    result: &mut ParseResult,
) -> Option<(Value, ParsedFormat)> {
    let candidate = extract_structured(content);

    let strict_error = match serde_json::from_str::<Value>(candidate) {
        Ok(value) => return Some((value, ParsedFormat::Json)),
        Err(err) => err,
    };

    if format == OutputFormat::Yaml
        && let Ok(value) = serde_yaml::from_str::<Value>(candidate)
        && (value.is_object() || value.is_array())
    {
        return Some((value, ParsedFormat::Yaml));
    }

    match repair_json(candidate) {
        Some(repaired) => {
            tracing::warn!(steps = %repaired.describe(), "model response needed JSON repair");
            result.errors.push(ValidationError::warning(
                "root",
                ErrorCode::InvalidJson,
                format!("JSON was auto-corrected ({})", repaired.describe()),
            ));
            Some((repaired.value, ParsedFormat::Json))
        }
        None => {
            result.errors.push(ValidationError::error(
                "root",
                ErrorCode::InvalidJson,
                format!("Invalid JSON format: {}", strict_error),
            ));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    use super::*;

    fn required_a() -> SchemaNode {
        SchemaNode::object([("a", SchemaNode::string())], &["a"])
    }

    /// Schema that `value` satisfies exactly, with every key required.
    fn schema_for(value: &Value) -> SchemaNode {
        match value {
            Value::Object(object) => SchemaNode::Object {
                properties: Some(
                    object.iter().map(|(key, child)| (key.clone(), schema_for(child))).collect(),
                ),
                required: object.keys().cloned().collect(),
                description: None,
            },
            Value::Array(_) => SchemaNode::array(SchemaNode::string()),
            Value::String(_) => SchemaNode::string(),
            Value::Number(_) => SchemaNode::number(),
            Value::Bool(_) | Value::Null => SchemaNode::boolean(),
        }
    }

    fn json_object() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            "[a-zA-Z0-9 ]{1,12}".prop_map(Value::from),
            any::<i64>().prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
            prop::collection::vec("[a-z]{1,6}", 0..4).prop_map(|items| json!(items)),
        ]
        .boxed();
        let nested = leaf.prop_recursive(3, 24, 5, |inner| {
            prop::collection::btree_map("[a-z]{1,8}", inner, 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect()))
        });
        prop::collection::btree_map("[a-z]{1,8}", nested, 0..6)
            .prop_map(|entries| Value::Object(entries.into_iter().collect()))
    }

    proptest! {
        #[test]
        fn well_formed_json_round_trips(value in json_object()) {
            let result = ResponseParser::parse_and_validate(
                &value.to_string(),
                &schema_for(&value),
                OutputFormat::Json,
            );

            prop_assert!(result.success);
            prop_assert!(result.errors.is_empty());
            prop_assert!(result.warnings.is_empty());
            prop_assert_eq!(result.parsed_format, ParsedFormat::Json);
            prop_assert_eq!(result.data, Some(value));
        }
    }

    #[test]
    fn trailing_comma_is_repaired_with_one_warning() {
        let result = ResponseParser::parse_and_validate(r#"{"a": "x",}"#, &required_a(), OutputFormat::Json);

        assert!(result.success);
        assert_eq!(result.data, Some(json!({"a": "x"})));
        assert_eq!(result.error_count(), 0);
        assert_eq!(result.warning_count(), 1);
        assert_eq!(result.errors[0].severity, Severity::Warning);
        assert_eq!(result.errors[0].code, ErrorCode::InvalidJson);
        assert!(result.errors[0].message.starts_with("JSON was auto-corrected"));
    }

    #[test]
    fn missing_required_field() {
        let result = ResponseParser::parse_and_validate("{}", &required_a(), OutputFormat::Json);

        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].path, "root.a");
        assert_eq!(result.errors[0].code, ErrorCode::MissingRequired);
        assert_eq!(result.errors[0].message, "Missing required field: a");
    }

    #[test]
    fn unknown_property_is_only_a_warning() {
        let result =
            ResponseParser::parse_and_validate(r#"{"a": "x", "b": "y"}"#, &required_a(), OutputFormat::Json);

        assert!(result.success);
        assert!(result.errors.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].path, "root.b");
        assert!(result.warnings[0].message.contains('b'));
    }

    #[test]
    fn enum_rejection() {
        let schema = SchemaNode::string_enum(&["easy", "medium", "hard"]);
        let result = ResponseParser::parse_and_validate("\"extreme\"", &schema, OutputFormat::Json);

        assert!(!result.success);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ErrorCode::InvalidEnum);
        assert_eq!(result.errors[0].message, "Value must be one of: easy, medium, hard. Got: extreme");
    }

    #[test]
    fn unrepairable_text_has_no_data() {
        let result =
            ResponseParser::parse_and_validate("I cannot help with that.", &required_a(), OutputFormat::Json);

        assert!(!result.success);
        assert_eq!(result.data, None);
        assert_eq!(result.parsed_format, ParsedFormat::Unknown);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ErrorCode::InvalidJson);
        assert!(result.errors[0].message.starts_with("Invalid JSON format: "));
        assert_eq!(result.original_text, "I cannot help with that.");
    }

    #[test]
    fn markdown_wrapped_payload_is_extracted() {
        let content = "Here is the analysis:\n```json\n{\"a\": \"x\"}\n```";
        let result = ResponseParser::parse_and_validate(content, &required_a(), OutputFormat::Json);
        assert!(result.success);
        assert_eq!(result.data, Some(json!({"a": "x"})));
    }

    #[test]
    fn text_format_validates_raw_string() {
        let result = ResponseParser::parse_and_validate("hello", &SchemaNode::string(), OutputFormat::Text);
        assert!(result.success);
        assert_eq!(result.data, Some(json!("hello")));
        assert_eq!(result.parsed_format, ParsedFormat::Text);
    }

    #[test]
    fn yaml_format_falls_back_to_yaml() {
        let result = ResponseParser::parse_and_validate("a: x\n", &required_a(), OutputFormat::Yaml);
        assert!(result.success);
        assert_eq!(result.data, Some(json!({"a": "x"})));
        assert_eq!(result.parsed_format, ParsedFormat::Yaml);
    }

    #[test]
    fn yaml_format_prose_is_not_accepted_as_a_scalar() {
        let content = "Sorry, I could not analyse this entry.";
        let result = ResponseParser::parse_and_validate(content, &required_a(), OutputFormat::Yaml);

        assert!(!result.success);
        assert_eq!(result.data, None);
        assert_eq!(result.parsed_format, ParsedFormat::Unknown);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].code, ErrorCode::InvalidJson);
    }

    #[test]
    fn yaml_format_accepts_sequences() {
        let schema = SchemaNode::array(SchemaNode::string());
        let result = ResponseParser::parse_and_validate("- walk\n- stretch\n", &schema, OutputFormat::Yaml);
        assert!(result.success);
        assert_eq!(result.data, Some(json!(["walk", "stretch"])));
        assert_eq!(result.parsed_format, ParsedFormat::Yaml);
    }

    #[test]
    fn repaired_nan_is_an_invalid_number() {
        let schema = SchemaNode::object([("score", SchemaNode::number())], &["score"]);
        let result = ResponseParser::parse_and_validate(r#"{"score": NaN}"#, &schema, OutputFormat::Json);

        assert!(!result.success);
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 1);
        let codes: Vec<ErrorCode> = result.errors.iter().map(|error| error.code).collect();
        assert_eq!(codes, vec![ErrorCode::InvalidJson, ErrorCode::InvalidNumber]);
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        a: String,
    }

    #[test]
    fn typed_parse_decodes_valid_data() {
        let result =
            ResponseParser::parse_and_validate_as::<Payload>(r#"{"a": "x"}"#, &required_a(), OutputFormat::Json);
        assert!(result.success);
        assert_eq!(result.data, Some(Payload { a: "x".into() }));
    }

    #[test]
    fn typed_parse_reports_decode_failures() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Strict {
            a: String,
            b: u32,
        }

        let result =
            ResponseParser::parse_and_validate_as::<Strict>(r#"{"a": "x"}"#, &required_a(), OutputFormat::Json);
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.errors.last().map(|error| error.code), Some(ErrorCode::ParseError));
    }

    #[test]
    fn typed_parse_keeps_validation_failures() {
        let result = ResponseParser::parse_and_validate_as::<Payload>("{}", &required_a(), OutputFormat::Json);
        assert!(!result.success);
        assert!(result.data.is_none());
        assert_eq!(result.errors[0].code, ErrorCode::MissingRequired);
    }
}
