//! Best-effort textual fixes for almost-JSON model output.
//!
//! Steps run in a fixed order and accumulate. After every step that changes
//! the text, parsing is retried, so the first fixed text that parses wins.
//! These fixes are blind: the quote conversion will also rewrite apostrophes
//! inside string values. Callers always get a warning when a repair was used.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static TRAILING_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\s*[}\]])").expect("trailing comma pattern is valid"));

static UNQUOTED_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([{,]\s*)([a-zA-Z_][a-zA-Z0-9_]*)\s*:").expect("unquoted key pattern is valid")
});

static NON_FINITE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([:\[,]\s*)(-?Infinity|NaN)\b").expect("non-finite literal pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairStep {
    TrailingCommas,
    UnquotedKeys,
    SingleQuotes,
    EscapedQuotes,
    NonFiniteNumbers,
}

impl RepairStep {
    pub const ALL: [RepairStep; 5] = [
        RepairStep::TrailingCommas,
        RepairStep::UnquotedKeys,
        RepairStep::SingleQuotes,
        RepairStep::EscapedQuotes,
        RepairStep::NonFiniteNumbers,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RepairStep::TrailingCommas => "trailing commas",
            RepairStep::UnquotedKeys => "unquoted keys",
            RepairStep::SingleQuotes => "single quotes",
            RepairStep::EscapedQuotes => "escaped quotes",
            RepairStep::NonFiniteNumbers => "non-finite numbers",
        }
    }

    fn apply(&self, text: &str) -> String {
        match self {
            RepairStep::TrailingCommas => TRAILING_COMMA.replace_all(text, "$1").into_owned(),
            RepairStep::UnquotedKeys => {
                UNQUOTED_KEY.replace_all(text, "${1}\"${2}\":").into_owned()
            }
            RepairStep::SingleQuotes => text.replace('\'', "\""),
            RepairStep::EscapedQuotes => text.replace("\\\"", "\""),
            RepairStep::NonFiniteNumbers => NON_FINITE.replace_all(text, "${1}\"${2}\"").into_owned(),
        }
    }
}

/// A successfully repaired document.
#[derive(Debug, Clone, PartialEq)]
pub struct Repaired {
    pub value: Value,
    pub steps: Vec<RepairStep>,
}

impl Repaired {
    pub fn describe(&self) -> String {
        self.steps.iter().map(RepairStep::label).collect::<Vec<_>>().join(", ")
    }
}

/// Try the repair steps on `text`. `None` when no combination parses.
pub fn repair_json(text: &str) -> Option<Repaired> {
    let mut current = text.to_string();
    let mut steps = Vec::new();

    for step in RepairStep::ALL {
        let next = step.apply(&current);
        if next == current {
            continue;
        }
        current = next;
        steps.push(step);

        if let Ok(value) = serde_json::from_str::<Value>(&current) {
            tracing::debug!(steps = ?steps, "repaired malformed JSON");
            return Some(Repaired { value, steps });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strips_trailing_commas() {
        let repaired = repair_json(r#"{"a": [1, 2,], "b": 3,}"#).unwrap();
        assert_eq!(repaired.value, json!({"a": [1, 2], "b": 3}));
        assert_eq!(repaired.steps, vec![RepairStep::TrailingCommas]);
    }

    #[test]
    fn quotes_bare_keys() {
        let repaired = repair_json("{name: \"x\", count: 2}").unwrap();
        assert_eq!(repaired.value, json!({"name": "x", "count": 2}));
        assert_eq!(repaired.describe(), "unquoted keys");
    }

    #[test]
    fn converts_single_quotes() {
        let repaired = repair_json("{'mood': 'calm'}").unwrap();
        assert_eq!(repaired.value, json!({"mood": "calm"}));
    }

    #[test]
    fn steps_accumulate() {
        let repaired = repair_json("{mood: 'calm', tags: ['a',],}").unwrap();
        assert_eq!(repaired.value, json!({"mood": "calm", "tags": ["a"]}));
        assert_eq!(
            repaired.steps,
            vec![RepairStep::TrailingCommas, RepairStep::UnquotedKeys, RepairStep::SingleQuotes]
        );
    }

    #[test]
    fn collapses_escaped_quotes() {
        let repaired = repair_json(r#"{\"a\": 1}"#).unwrap();
        assert_eq!(repaired.value, json!({"a": 1}));
    }

    #[test]
    fn quotes_non_finite_literals() {
        let repaired = repair_json(r#"{"score": NaN, "list": [Infinity, -Infinity]}"#).unwrap();
        assert_eq!(repaired.value, json!({"score": "NaN", "list": ["Infinity", "-Infinity"]}));
        assert_eq!(repaired.steps, vec![RepairStep::NonFiniteNumbers]);
    }

    #[test]
    fn hopeless_input_is_not_repaired() {
        assert_eq!(repair_json("this is not json at all"), None);
        assert_eq!(repair_json("{\"a\": }"), None);
    }
}
