//! Built-in prompt templates embedded in the binary.

use include_dir::{Dir, include_dir};

use crate::domain::{AppError, PromptTemplate, TemplateRegistry};

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Parse every embedded `*.yml` template and build the registry.
///
/// The file stem must equal the template id.
pub fn builtin_registry() -> Result<TemplateRegistry, AppError> {
    TemplateRegistry::from_templates(load_builtin_templates()?)
}

pub fn load_builtin_templates() -> Result<Vec<PromptTemplate>, AppError> {
    let mut files: Vec<_> = TEMPLATES_DIR
        .files()
        .filter(|file| file.path().extension().is_some_and(|ext| ext == "yml"))
        .collect();
    files.sort_by_key(|file| file.path());

    let mut templates = Vec::with_capacity(files.len());
    for file in files {
        let path = file.path().display().to_string();
        let content = file
            .contents_utf8()
            .ok_or_else(|| AppError::AssetError(format!("Template asset is not UTF-8: {}", path)))?;
        let template: PromptTemplate = serde_yaml::from_str(content)
            .map_err(|e| AppError::AssetError(format!("Invalid template asset {}: {}", path, e)))?;

        let stem = file.path().file_stem().and_then(|stem| stem.to_str()).unwrap_or_default();
        if stem != template.id {
            return Err(AppError::AssetError(format!(
                "Template asset {} declares mismatched id '{}'",
                path, template.id
            )));
        }

        templates.push(template);
    }

    Ok(templates)
}
