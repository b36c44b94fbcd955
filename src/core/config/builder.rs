//! Builds the runtime [`Config`] by layering defaults, the optional config
//! file, environment variables, and direct overrides (in that order).

use crate::core::config::file::ConfigFile;
use crate::core::config::{loading, validation, Config};
use crate::core::error::{AppError, Result};
use std::path::PathBuf;
use std::time::Duration;

const ENV_API_URL: &str = "SPAMSHIELD_API_URL";
const ENV_ORIGIN: &str = "SPAMSHIELD_ORIGIN";

/// Layered builder for [`Config`]. Later layers win over earlier ones.
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_path: Option<PathBuf>,
    api_base_url: Option<String>,
    origin: Option<String>,
    request_timeout: Option<u64>,
    user_agent: Option<String>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit config file instead of searching default locations.
    /// The file must exist when given explicitly.
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Overrides the backend base URL (highest priority layer).
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = Some(url.into());
        self
    }

    /// Overrides the client origin used by the endpoint heuristics.
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout = Some(secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        let file_path = match &self.config_path {
            Some(path) => {
                if !path.is_file() {
                    return Err(AppError::Config(format!(
                        "Specified config file '{}' not found",
                        path.display()
                    )));
                }
                Some(path.clone())
            }
            None => loading::discover_config_file(),
        };

        if let Some(path) = file_path {
            let file = loading::load_config_file(&path)?;
            apply_file(&mut config, file);
            config.loaded_config_path = Some(path.display().to_string());
        }

        // Environment layer.
        if let Ok(url) = std::env::var(ENV_API_URL) {
            if !url.is_empty() {
                config.api_base_url = Some(url);
            }
        }
        if let Ok(origin) = std::env::var(ENV_ORIGIN) {
            if !origin.is_empty() {
                config.origin = Some(origin);
            }
        }

        // Direct override layer (CLI flags).
        if let Some(url) = self.api_base_url {
            config.api_base_url = Some(url);
        }
        if let Some(origin) = self.origin {
            config.origin = Some(origin);
        }
        if let Some(secs) = self.request_timeout {
            config.request_timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = self.user_agent {
            config.user_agent = user_agent;
        }

        validation::validate(&config)?;
        Ok(config)
    }
}

fn apply_file(config: &mut Config, file: ConfigFile) {
    if let Some(url) = file.api.base_url {
        config.api_base_url = Some(url);
    }
    if let Some(origin) = file.api.origin {
        config.origin = Some(origin);
    }
    if let Some(secs) = file.network.request_timeout {
        config.request_timeout = Duration::from_secs(secs);
    }
    if let Some(user_agent) = file.network.user_agent {
        config.user_agent = user_agent;
    }
}
