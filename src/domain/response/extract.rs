use std::sync::LazyLock;

use regex::Regex;

static FENCED_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json|yaml)?\s*(.*?)\s*```").expect("fenced block pattern is valid")
});

static BRACED_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("braced span pattern is valid"));

/// Pick the part of a model response most likely to hold the structured payload.
///
/// Order: first fenced code block, then the widest `{ ... }` span, then the
/// whole trimmed text.
pub fn extract_structured(content: &str) -> &str {
    if let Some(inner) = FENCED_BLOCK.captures(content).and_then(|caps| caps.get(1)) {
        tracing::debug!("extracted payload from fenced code block");
        return inner.as_str().trim();
    }

    if let Some(span) = BRACED_SPAN.find(content) {
        return span.as_str();
    }

    content.trim()
}
