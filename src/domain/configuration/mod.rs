pub mod invocation_mode;
pub mod loader;
pub mod thrive_config;

pub use invocation_mode::InvocationMode;
pub use loader::{DEFAULT_CONFIG_FILE, load_config, parse_config_content};
pub use thrive_config::{ModelApiConfig, ThriveConfig};
