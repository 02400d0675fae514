//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::BzlqConfig;
use std::path::{Path, PathBuf};

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "bzlq.toml";

/// Loads and validates `<dir>/bzlq.toml`.
pub fn load_config(dir: &Path) -> Result<BzlqConfig, ConfigError> {
    load_config_file(&dir.join(CONFIG_FILE_NAME))
}

/// Loads and validates the configuration file at `path`.
pub fn load_config_file(path: &Path) -> Result<BzlqConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_from_str(&content)
}

/// Parses and validates a `bzlq.toml` configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<BzlqConfig, ConfigError> {
    let config: BzlqConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Returns the nearest `bzlq.toml` in `start` or one of its ancestors.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}

fn validate_config(config: &BzlqConfig) -> Result<(), ConfigError> {
    if config.bazel.binary.trim().is_empty() {
        return Err(ConfigError::MissingField("bazel.binary".to_string()));
    }
    Ok(())
}
