//! Sanity checks on the assembled runtime configuration.

use crate::core::config::Config;
use crate::core::error::{AppError, Result};
use url::Url;

pub(crate) fn validate(config: &Config) -> Result<()> {
    // An empty base URL is treated as "not configured" by the resolver, so
    // only a non-empty value has to parse.
    if let Some(url) = config.api_base_url.as_deref() {
        if !url.is_empty() {
            Url::parse(url).map_err(|e| {
                AppError::Config(format!("Invalid api base URL '{}': {}", url, e))
            })?;
        }
    }

    if let Some(origin) = config.origin.as_deref() {
        if !origin.is_empty() {
            Url::parse(origin).map_err(|e| {
                AppError::Config(format!("Invalid client origin '{}': {}", origin, e))
            })?;
        }
    }

    if config.request_timeout.is_zero() {
        return Err(AppError::Config(
            "request_timeout must be greater than zero".to_string(),
        ));
    }

    if config.user_agent.trim().is_empty() {
        return Err(AppError::Config("user_agent must not be empty".to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn rejects_malformed_base_url() {
        let config = Config {
            api_base_url: Some("not a url".to_string()),
            ..Config::default()
        };
        assert!(validate(&config).is_err());
    }

    #[test]
    fn empty_base_url_means_unconfigured() {
        let config = Config {
            api_base_url: Some(String::new()),
            ..Config::default()
        };
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = Config {
            request_timeout: std::time::Duration::ZERO,
            ..Config::default()
        };
        assert!(validate(&config).is_err());
    }
}
