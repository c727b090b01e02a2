//! Configuration loading.

use std::fs;
use std::path::Path;

use super::ThriveConfig;
use crate::domain::AppError;

/// File looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "thrive.toml";

/// Load configuration from `path`, else `./thrive.toml`, else defaults.
///
/// An explicit path that does not exist is an error; a missing default file
/// is not.
pub fn load_config(path: Option<&Path>) -> Result<ThriveConfig, AppError> {
    let (config_path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (Path::new(DEFAULT_CONFIG_FILE).to_path_buf(), false),
    };

    if !config_path.exists() {
        if explicit {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                config_path.display()
            )));
        }
        tracing::debug!("no {} found, using default configuration", DEFAULT_CONFIG_FILE);
        return Ok(ThriveConfig::default());
    }

    let content = fs::read_to_string(&config_path)?;
    tracing::debug!(path = %config_path.display(), "loaded configuration");
    parse_config_content(&content)
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<ThriveConfig, AppError> {
    let config: ThriveConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
