use super::report::{ParseResult, Severity};

/// Human-readable report for display and logs.
pub fn generate_validation_summary<T>(result: &ParseResult<T>) -> String {
    let error_count = result.error_count();
    let warning_count = result.warning_count();

    if error_count == 0 && warning_count == 0 {
        return "✅ Response is valid and complete".to_string();
    }

    let mut lines = Vec::new();
    if error_count > 0 {
        lines.push(format!("❌ Validation failed with {} errors", error_count));
    } else {
        lines.push("✅ Response is valid".to_string());
    }
    if warning_count > 0 {
        lines.push(format!("⚠️ {} warnings", warning_count));
    }

    if error_count > 0 {
        lines.push(format!("\nErrors ({}):", error_count));
        for error in result.errors.iter().filter(|error| error.severity == Severity::Error) {
            lines.push(item(&error.path, &error.message));
        }
    }

    if warning_count > 0 {
        lines.push(format!("\nWarnings ({}):", warning_count));
        for error in result.errors.iter().filter(|error| error.severity == Severity::Warning) {
            lines.push(item(&error.path, &error.message));
        }
        for warning in &result.warnings {
            lines.push(item(&warning.path, &warning.message));
        }
    }

    let suggestions: Vec<String> = result
        .warnings
        .iter()
        .filter_map(|warning| warning.suggestion.as_deref().map(|text| item(&warning.path, text)))
        .collect();
    if !suggestions.is_empty() {
        lines.push("\nSuggestions:".to_string());
        lines.extend(suggestions);
    }

    lines.join("\n")
}

fn item(path: &str, text: &str) -> String {
    format!("  • {}: {}", path, text)
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::domain::response::{ErrorCode, ValidationError, ValidationWarning};

    #[test]
    fn clean_result() {
        let mut result = ParseResult::<Value>::empty("{}");
        result.success = true;
        assert_eq!(generate_validation_summary(&result), "✅ Response is valid and complete");
    }

    #[test]
    fn failed_result_lists_errors() {
        let mut result = ParseResult::<Value>::empty("{}");
        result.errors.push(ValidationError::error(
            "root.a",
            ErrorCode::MissingRequired,
            "Missing required field: a",
        ));

        assert_eq!(
            generate_validation_summary(&result),
            "❌ Validation failed with 1 errors\n\nErrors (1):\n  • root.a: Missing required field: a"
        );
    }

    #[test]
    fn warnings_and_suggestions() {
        let mut result = ParseResult::<Value>::empty("{}");
        result.success = true;
        result.errors.push(ValidationError::warning(
            "root",
            ErrorCode::InvalidJson,
            "JSON was auto-corrected (trailing commas)",
        ));
        result.warnings.push(
            ValidationWarning::new("root.b", "Unexpected property: b")
                .with_suggestion("This property is not defined in the schema"),
        );

        let expected = [
            "✅ Response is valid",
            "⚠️ 2 warnings",
            "\nWarnings (2):",
            "  • root: JSON was auto-corrected (trailing commas)",
            "  • root.b: Unexpected property: b",
            "\nSuggestions:",
            "  • root.b: This property is not defined in the schema",
        ]
        .join("\n");
        assert_eq!(generate_validation_summary(&result), expected);
    }

    #[test]
    fn summary_is_deterministic() {
        let mut result = ParseResult::<Value>::empty("x");
        result.errors.push(ValidationError::error("root", ErrorCode::InvalidType, "bad"));
        assert_eq!(generate_validation_summary(&result), generate_validation_summary(&result));
    }
}
