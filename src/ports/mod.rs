mod model_client;
mod template_catalog;

pub use model_client::{CompletionRequest, CompletionResponse, ModelClient, ResponseFormat};
pub use template_catalog::TemplateCatalog;
