pub mod api;
pub mod cli;
pub mod orchestrator;

pub use orchestrator::{InvocationBackend, PromptOrchestrator};
