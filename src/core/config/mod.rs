//! Defines the core runtime `Config` struct, its defaults, and related utilities.
//! Submodules handle loading, building, and validation.

pub(crate) mod builder;
pub(crate) mod file;
pub(crate) mod loading;
pub(crate) mod validation;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use std::time::Duration;

/// Runtime configuration settings used by the spamshield core logic.
#[derive(Debug, Clone)]
pub struct Config {
    /// Explicitly configured backend base URL (or full analyze endpoint).
    /// When absent, the endpoint is derived from `origin` heuristics.
    pub api_base_url: Option<String>,
    /// The client's own origin (scheme + host), standing in for the browser
    /// location the endpoint heuristics were written against.
    pub origin: Option<String>,

    pub request_timeout: Duration,
    pub user_agent: String,

    pub loaded_config_path: Option<String>,
}

impl Config {
    fn build_default() -> Self {
        Config {
            api_base_url: None,
            origin: None,
            request_timeout: Duration::from_secs(10),
            user_agent: format!("spamshield-core/{}", env!("CARGO_PKG_VERSION")),
            loaded_config_path: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::build_default()
    }
}
