use crate::domain::{PromptTemplate, TemplateRegistry};

/// Read-only template lookup.
pub trait TemplateCatalog {
    fn get(&self, id: &str) -> Option<&PromptTemplate>;

    /// All templates, ordered by id.
    fn list(&self) -> Vec<&PromptTemplate>;
}

impl TemplateCatalog for TemplateRegistry {
    fn get(&self, id: &str) -> Option<&PromptTemplate> {
        TemplateRegistry::get(self, id)
    }

    fn list(&self) -> Vec<&PromptTemplate> {
        TemplateRegistry::list(self)
    }
}
