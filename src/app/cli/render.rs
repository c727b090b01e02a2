//! Render command implementation.

use super::VariablesArgs;
use crate::adapters::catalogs::builtin_registry;
use crate::domain::AppError;

pub fn run_render(template_id: &str, input: &VariablesArgs) -> Result<(), AppError> {
    let registry = builtin_registry()?;
    let template = registry
        .get(template_id)
        .ok_or_else(|| AppError::TemplateNotFound(template_id.to_string()))?;

    let variables = input.resolve(template)?;
    let rendered = template.render_user_prompt(&variables);

    println!("{}", rendered.text);
    if !rendered.is_complete() {
        eprintln!("⚠️ Unresolved variables: {}", rendered.unresolved.join(", "));
    }
    Ok(())
}
