//! Handlebars-style prompt template compiler.
//!
//! Supported forms: `{{path}}`, `{{#each path}}..{{/each}}` (with `{{this}}`,
//! `{{@index}}`, `{{@last}}`), `{{#if path}}..{{/if}}` and
//! `{{#unless path}}..{{/unless}}`. Blocks nest. Rendering never fails:
//! missing data renders as an empty string and is reported in
//! [`RenderOutput::unresolved`].

mod ast;
mod parser;
mod render;

pub use ast::{BlockKind, Node, VarPath};
pub use render::RenderOutput;

pub(crate) use render::display_value;

use serde_json::Value;

/// Caller-supplied data tree used while rendering.
pub type RenderVariables = Value;

/// A parsed template, reusable across renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    pub fn parse(source: &str) -> Self {
        Self { nodes: parser::parse(source) }
    }

    pub fn render(&self, variables: &RenderVariables) -> RenderOutput {
        render::render_nodes(&self.nodes, variables)
    }
}

/// Render `template` and return only the text.
pub fn compile(template: &str, variables: &RenderVariables) -> String {
    render(template, variables).text
}

/// Render `template`, keeping the list of unresolved paths.
pub fn render(template: &str, variables: &RenderVariables) -> RenderOutput {
    Template::parse(template).render(variables)
}
