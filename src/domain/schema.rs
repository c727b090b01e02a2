//! Response schema model.
//!
//! Serialized in the JSON-Schema-like shape templates declare:
//! `type`, `properties`, `items`, `required`, `enum`, `description`.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Expected shape of a value, one variant per `type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SchemaNode {
    Object {
        /// `None` means a free-form object: extra properties are not reported.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        properties: Option<BTreeMap<String, SchemaNode>>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        required: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Array {
        items: Box<SchemaNode>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    String {
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        allowed: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Number {
        #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
        allowed: Option<Vec<f64>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
    Boolean {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

/// The `type` tag of a schema node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Object,
    Array,
    String,
    Number,
    Boolean,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SchemaNode {
    pub fn object<'a>(
        properties: impl IntoIterator<Item = (&'a str, SchemaNode)>,
        required: &[&str],
    ) -> Self {
        SchemaNode::Object {
            properties: Some(
                properties.into_iter().map(|(name, node)| (name.to_string(), node)).collect(),
            ),
            required: required.iter().map(|name| name.to_string()).collect(),
            description: None,
        }
    }

    pub fn array(items: SchemaNode) -> Self {
        SchemaNode::Array { items: Box::new(items), description: None }
    }

    pub fn string() -> Self {
        SchemaNode::String { allowed: None, description: None }
    }

    pub fn string_enum(allowed: &[&str]) -> Self {
        SchemaNode::String {
            allowed: Some(allowed.iter().map(|value| value.to_string()).collect()),
            description: None,
        }
    }

    pub fn number() -> Self {
        SchemaNode::Number { allowed: None, description: None }
    }

    pub fn boolean() -> Self {
        SchemaNode::Boolean { description: None }
    }

    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        let text = Some(text.into());
        match &mut self {
            SchemaNode::Object { description, .. }
            | SchemaNode::Array { description, .. }
            | SchemaNode::String { description, .. }
            | SchemaNode::Number { description, .. }
            | SchemaNode::Boolean { description } => *description = text,
        }
        self
    }

    pub fn kind(&self) -> SchemaKind {
        match self {
            SchemaNode::Object { .. } => SchemaKind::Object,
            SchemaNode::Array { .. } => SchemaKind::Array,
            SchemaNode::String { .. } => SchemaKind::String,
            SchemaNode::Number { .. } => SchemaKind::Number,
            SchemaNode::Boolean { .. } => SchemaKind::Boolean,
        }
    }

    /// Build a placeholder value that satisfies this schema.
    ///
    /// Objects get every declared property, arrays a single element, strings
    /// the first enum value (else the description), numbers the first enum
    /// value (else 0), booleans `false`.
    pub fn mock_value(&self) -> Value {
        match self {
            SchemaNode::Object { properties, .. } => {
                let mut object = Map::new();
                for (name, node) in properties.iter().flatten() {
                    object.insert(name.clone(), node.mock_value());
                }
                Value::Object(object)
            }
            SchemaNode::Array { items, .. } => Value::Array(vec![items.mock_value()]),
            SchemaNode::String { allowed, description } => {
                let text = allowed
                    .as_ref()
                    .and_then(|values| values.first().cloned())
                    .or_else(|| description.clone())
                    .unwrap_or_else(|| "Mock string value".to_string());
                Value::String(text)
            }
            SchemaNode::Number { allowed, .. } => allowed
                .as_ref()
                .and_then(|values| values.first().copied())
                .map(Value::from)
                .unwrap_or_else(|| Value::from(0)),
            SchemaNode::Boolean { .. } => Value::Bool(false),
        }
    }
}
