use std::collections::BTreeMap;

use super::PromptTemplate;
use crate::domain::AppError;

/// Immutable, id-keyed set of prompt templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    templates: BTreeMap<String, PromptTemplate>,
}

impl TemplateRegistry {
    /// Build a registry, rejecting empty and duplicate ids.
    pub fn from_templates(
        templates: impl IntoIterator<Item = PromptTemplate>,
    ) -> Result<Self, AppError> {
        let mut by_id = BTreeMap::new();

        for template in templates {
            if template.id.trim().is_empty() {
                return Err(AppError::AssetError(format!(
                    "Template '{}' has an empty id",
                    template.name
                )));
            }
            if by_id.contains_key(&template.id) {
                return Err(AppError::DuplicateTemplate(template.id));
            }
            by_id.insert(template.id.clone(), template);
        }

        Ok(Self { templates: by_id })
    }

    pub fn get(&self, id: &str) -> Option<&PromptTemplate> {
        self.templates.get(id)
    }

    /// Templates ordered by id.
    pub fn list(&self) -> Vec<&PromptTemplate> {
        self.templates.values().collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
