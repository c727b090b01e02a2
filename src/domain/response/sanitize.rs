use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("newline run pattern is valid"));

/// Dotted lookup into a parsed response. Returns `None` at the first missing
/// segment or non-mapping value; callers supply their own fallback.
pub fn extract_field<'v>(value: &'v Value, path: &str) -> Option<&'v Value> {
    path.split('.').try_fold(value, |current, key| current.as_object()?.get(key))
}

/// Trim every string and collapse runs of three or more newlines to two.
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::String(text) => Value::String(NEWLINE_RUN.replace_all(text.trim(), "\n\n").into_owned()),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        Value::Object(object) => {
            Value::Object(object.into_iter().map(|(key, value)| (key, sanitize(value))).collect())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn extracts_nested_fields() {
        let value = json!({"summary": {"overallScore": 72}});
        assert_eq!(extract_field(&value, "summary.overallScore"), Some(&json!(72)));
        assert_eq!(extract_field(&value, "summary.missing"), None);
        assert_eq!(extract_field(&value, "summary.overallScore.deeper"), None);
    }

    #[test]
    fn fallback_is_the_callers_choice() {
        let value = json!({});
        let score = extract_field(&value, "summary.overallScore").and_then(Value::as_f64).unwrap_or(50.0);
        assert_eq!(score, 50.0);
    }

    #[test]
    fn sanitizes_recursively() {
        let value = json!({
            "title": "  Morning  ",
            "body": "one\n\n\n\ntwo",
            "list": [" a ", {"inner": "x\n\n\ny "}],
            "n": 3
        });
        assert_eq!(
            sanitize(value),
            json!({"title": "Morning", "body": "one\n\ntwo", "list": ["a", {"inner": "x\n\ny"}], "n": 3})
        );
    }
}
