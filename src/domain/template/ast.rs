//! Syntax tree for prompt templates.

use std::fmt;

/// A parsed template fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, emitted verbatim.
    Text(String),
    /// `{{path}}`
    Variable(VarPath),
    /// `{{#each path}} ... {{/each}}`
    Each { source: VarPath, body: Vec<Node> },
    /// `{{#if path}} ... {{/if}}`
    If { condition: VarPath, body: Vec<Node> },
    /// `{{#unless path}} ... {{/unless}}`
    Unless { condition: VarPath, body: Vec<Node> },
}

/// Block helpers understood by the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Each,
    If,
    Unless,
}

impl BlockKind {
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "each" => Some(BlockKind::Each),
            "if" => Some(BlockKind::If),
            "unless" => Some(BlockKind::Unless),
            _ => None,
        }
    }
}

/// A reference to a value in the render scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarPath {
    /// `this`: the current iteration element (or the root outside a loop).
    This,
    /// `@index`: zero-based position inside `#each`.
    Index,
    /// `@last`: whether the current element is the final one.
    Last,
    /// Dotted walk through nested mappings.
    Segments(Vec<String>),
}

impl VarPath {
    /// Parse the inside of a tag into a path.
    ///
    /// Segments follow word-character rules (`[A-Za-z0-9_]`). A leading
    /// `this.` is accepted and dropped since lookups already start at the
    /// current element.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        match raw {
            "" => None,
            "this" => Some(VarPath::This),
            "@index" => Some(VarPath::Index),
            "@last" => Some(VarPath::Last),
            _ => {
                let raw = raw.strip_prefix("this.").unwrap_or(raw);
                let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
                if segments.iter().all(|segment| is_word(segment)) {
                    Some(VarPath::Segments(segments))
                } else {
                    None
                }
            }
        }
    }
}

fn is_word(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

impl fmt::Display for VarPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarPath::This => write!(f, "this"),
            VarPath::Index => write!(f, "@index"),
            VarPath::Last => write!(f, "@last"),
            VarPath::Segments(segments) => write!(f, "{}", segments.join(".")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dotted_paths() {
        assert_eq!(
            VarPath::parse("context.timeOfDay"),
            Some(VarPath::Segments(vec!["context".into(), "timeOfDay".into()]))
        );
    }

    #[test]
    fn parses_special_paths() {
        assert_eq!(VarPath::parse(" this "), Some(VarPath::This));
        assert_eq!(VarPath::parse("@index"), Some(VarPath::Index));
        assert_eq!(VarPath::parse("@last"), Some(VarPath::Last));
        assert_eq!(VarPath::parse("this.name"), Some(VarPath::Segments(vec!["name".into()])));
    }

    #[test]
    fn rejects_non_word_paths() {
        assert_eq!(VarPath::parse("hello world"), None);
        assert_eq!(VarPath::parse("a..b"), None);
        assert_eq!(VarPath::parse("@first"), None);
        assert_eq!(VarPath::parse(""), None);
    }
}
