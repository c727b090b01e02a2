use std::borrow::Cow;

use serde_json::Value;

use super::ast::{Node, VarPath};

/// Rendered template text plus the variable paths that did not resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOutput {
    pub text: String,
    /// Unresolved paths in first-seen order, without duplicates.
    pub unresolved: Vec<String>,
}

impl RenderOutput {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

#[derive(Clone, Copy)]
struct Frame<'v> {
    value: &'v Value,
    index: Option<usize>,
    last: Option<bool>,
}

pub(super) fn render_nodes(nodes: &[Node], variables: &Value) -> RenderOutput {
    let mut renderer = Renderer { output: RenderOutput::default() };
    let mut frames = vec![Frame { value: variables, index: None, last: None }];
    renderer.render(nodes, &mut frames);
    renderer.output
}

struct Renderer {
    output: RenderOutput,
}

impl Renderer {
    fn render<'v>(&mut self, nodes: &[Node], frames: &mut Vec<Frame<'v>>) {
        for node in nodes {
            match node {
                Node::Text(text) => self.output.text.push_str(text),
                Node::Variable(path) => match resolve(path, frames) {
                    Some(value) if !value.is_null() => {
                        self.output.text.push_str(&display_value(&value));
                    }
                    _ => self.mark_unresolved(path),
                },
                Node::If { condition, body } => {
                    if is_truthy(resolve(condition, frames).as_deref()) {
                        self.render(body, frames);
                    }
                }
                Node::Unless { condition, body } => {
                    if !is_truthy(resolve(condition, frames).as_deref()) {
                        self.render(body, frames);
                    }
                }
                Node::Each { source, body } => match resolve(source, frames) {
                    Some(Cow::Borrowed(Value::Array(items))) => {
                        let len = items.len();
                        for (index, item) in items.iter().enumerate() {
                            frames.push(Frame {
                                value: item,
                                index: Some(index),
                                last: Some(index + 1 == len),
                            });
                            self.render(body, frames);
                            frames.pop();
                        }
                    }
                    Some(_) => {}
                    None => self.mark_unresolved(source),
                },
            }
        }
    }

    fn mark_unresolved(&mut self, path: &VarPath) {
        let path = path.to_string();
        if !self.output.unresolved.contains(&path) {
            tracing::debug!(path = %path, "template variable did not resolve");
            self.output.unresolved.push(path);
        }
    }
}

/// Resolve a path against the innermost frame.
///
/// Named paths look inside the innermost mapping element. Loop elements that
/// are not mappings (strings, numbers) defer to the enclosing scope, so a
/// list of strings can still reference top-level variables.
fn resolve<'v>(path: &VarPath, frames: &[Frame<'v>]) -> Option<Cow<'v, Value>> {
    let current = frames.last()?;
    match path {
        VarPath::This => Some(Cow::Borrowed(current.value)),
        VarPath::Index => current.index.map(|index| Cow::Owned(Value::from(index))),
        VarPath::Last => current.last.map(|last| Cow::Owned(Value::Bool(last))),
        VarPath::Segments(segments) => {
            let scope = frames
                .iter()
                .rev()
                .find(|frame| frame.value.is_object())
                .map(|frame| frame.value)?;
            lookup(scope, segments).map(Cow::Borrowed)
        }
    }
}

fn lookup<'v>(root: &'v Value, segments: &[String]) -> Option<&'v Value> {
    segments.iter().try_fold(root, |current, segment| current.as_object()?.get(segment))
}

/// Dynamic-language truthiness: missing, null, false, 0 and "" are falsy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// String form used for interpolation.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                int.to_string()
            } else if let Some(uint) = number.as_u64() {
                uint.to_string()
            } else {
                let float = number.as_f64().unwrap_or_default();
                if float.fract() == 0.0 && float.abs() < 1e15 {
                    format!("{}", float as i64)
                } else {
                    float.to_string()
                }
            }
        }
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(display_value).collect::<Vec<_>>().join(","),
        Value::Object(_) => value.to_string(),
    }
}
