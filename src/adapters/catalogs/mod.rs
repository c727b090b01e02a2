pub mod embedded_templates;

pub use self::embedded_templates::builtin_registry;
