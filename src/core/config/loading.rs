//! Locates and parses the optional TOML configuration file.

use crate::core::config::file::ConfigFile;
use crate::core::error::{AppError, Result};
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "spamshield.toml";

/// Reads and parses a configuration file at the given path.
pub(crate) fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        AppError::Config(format!(
            "Failed to parse config file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Returns the first config file found among the default search locations,
/// or `None` when the tool should run on built-in defaults.
pub(crate) fn discover_config_file() -> Option<PathBuf> {
    let mut candidates: Vec<PathBuf> = vec![PathBuf::from(CONFIG_FILE_NAME)];

    if let Ok(home) = std::env::var("HOME") {
        candidates.push(
            PathBuf::from(home)
                .join(".config")
                .join("spamshield")
                .join(CONFIG_FILE_NAME),
        );
    }

    for candidate in candidates {
        if candidate.is_file() {
            tracing::debug!("Found config file at {}", candidate.display());
            return Some(candidate);
        }
    }
    None
}
