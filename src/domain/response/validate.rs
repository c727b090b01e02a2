use serde_json::Value;

use super::report::{ErrorCode, ValidationError, ValidationWarning};
use crate::domain::schema::SchemaNode;
use crate::domain::template::display_value;

const NON_FINITE_MARKERS: [&str; 3] = ["NaN", "Infinity", "-Infinity"];

/// Findings from one schema walk, in discovery order.
#[derive(Debug, Default)]
pub struct Findings {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

/// Validate `value` against `schema`, rooted at path `root`.
pub fn validate(value: &Value, schema: &SchemaNode) -> Findings {
    let mut findings = Findings::default();
    validate_node(value, schema, "root", &mut findings);
    findings
}

fn validate_node(value: &Value, schema: &SchemaNode, path: &str, findings: &mut Findings) {
    if let SchemaNode::Number { .. } = schema
        && let Some(marker) = non_finite_marker(value)
    {
        findings.errors.push(ValidationError::error(
            path,
            ErrorCode::InvalidNumber,
            format!("Invalid number value ({})", marker),
        ));
        return;
    }

    if !matches_kind(value, schema) {
        findings.errors.push(ValidationError::error(
            path,
            ErrorCode::InvalidType,
            format!("Expected type {}, got {}", schema.kind(), json_type_name(value)),
        ));
        return;
    }

    match (schema, value) {
        (SchemaNode::Object { properties, required, .. }, Value::Object(object)) => {
            for field in required {
                if object.get(field).is_none_or(Value::is_null) {
                    findings.errors.push(ValidationError::error(
                        format!("{}.{}", path, field),
                        ErrorCode::MissingRequired,
                        format!("Missing required field: {}", field),
                    ));
                }
            }

            let Some(properties) = properties else {
                return;
            };

            for (name, child_schema) in properties {
                let Some(child) = object.get(name) else {
                    continue;
                };
                if child.is_null() && required.contains(name) {
                    continue;
                }
                validate_node(child, child_schema, &format!("{}.{}", path, name), findings);
            }

            for name in object.keys() {
                if !properties.contains_key(name) {
                    findings.warnings.push(
                        ValidationWarning::new(
                            format!("{}.{}", path, name),
                            format!("Unexpected property: {}", name),
                        )
                        .with_suggestion("This property is not defined in the schema"),
                    );
                }
            }
        }
        (SchemaNode::Array { items, .. }, Value::Array(elements)) => {
            for (index, element) in elements.iter().enumerate() {
                validate_node(element, items, &format!("{}[{}]", path, index), findings);
            }
        }
        (SchemaNode::String { allowed, .. }, Value::String(text)) => {
            if let Some(allowed) = allowed
                && !allowed.iter().any(|candidate| candidate == text)
            {
                findings.errors.push(ValidationError::error(
                    path,
                    ErrorCode::InvalidEnum,
                    format!("Value must be one of: {}. Got: {}", allowed.join(", "), text),
                ));
            }
            if text.is_empty() {
                findings.warnings.push(
                    ValidationWarning::new(path, "Empty string value")
                        .with_suggestion("Consider providing a meaningful value"),
                );
            }
        }
        (SchemaNode::Number { allowed: Some(allowed), .. }, Value::Number(number)) => {
            let actual = number.as_f64();
            if !allowed.iter().any(|candidate| Some(*candidate) == actual) {
                let listed: Vec<String> =
                    allowed.iter().map(|candidate| display_value(&Value::from(*candidate))).collect();
                findings.errors.push(ValidationError::error(
                    path,
                    ErrorCode::InvalidEnum,
                    format!("Value must be one of: {}. Got: {}", listed.join(", "), display_value(value)),
                ));
            }
        }
        _ => {}
    }
}

fn matches_kind(value: &Value, schema: &SchemaNode) -> bool {
    matches!(
        (schema, value),
        (SchemaNode::Object { .. }, Value::Object(_))
            | (SchemaNode::Array { .. }, Value::Array(_))
            | (SchemaNode::String { .. }, Value::String(_))
            | (SchemaNode::Number { .. }, Value::Number(_))
            | (SchemaNode::Boolean { .. }, Value::Bool(_))
    )
}

fn non_finite_marker(value: &Value) -> Option<&str> {
    let text = value.as_str()?;
    NON_FINITE_MARKERS.iter().copied().find(|marker| *marker == text)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
