//! HTTP client for the backend classification service.

use crate::analysis::endpoint::{resolve_endpoint, ClientLocation, ANALYZE_PATH};
use crate::core::config::Config;
use crate::core::error::{AppError, Result};
use crate::core::models::{AnalysisRequest, HealthStatus, RemoteResponse};

const HEALTH_PATH: &str = "/api/health";

/// A configured client bound to one resolved analysis endpoint.
pub struct AnalysisClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalysisClient {
    /// Builds the client from runtime configuration, resolving the endpoint
    /// once up front. A configured origin that fails to parse is recovered
    /// to the loopback location rather than surfaced, matching the
    /// resolver's own fallback policy.
    pub fn new(config: &Config) -> Result<Self> {
        let location = match config.origin.as_deref().filter(|s| !s.is_empty()) {
            Some(origin) => ClientLocation::from_origin(origin).unwrap_or_else(|e| {
                tracing::warn!(
                    target: "analysis_client",
                    "Could not parse origin '{}' ({}), falling back to loopback",
                    origin,
                    e
                );
                ClientLocation::default()
            }),
            None => ClientLocation::default(),
        };
        let endpoint = resolve_endpoint(config.api_base_url.as_deref(), &location);

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| {
                AppError::Initialization(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self { http, endpoint })
    }

    /// The resolved analysis endpoint this client will POST to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits one analysis request and decodes the verdict. Any non-2xx
    /// status is treated uniformly as an API failure; transport and decode
    /// errors surface as their own variants. Callers normalize all of these
    /// into an [`crate::core::models::AnalysisResult`], never propagate them
    /// to the presentation layer.
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<RemoteResponse> {
        tracing::debug!(target: "analysis_client", "Calling backend API: {}", self.endpoint);

        let response = self.http.post(&self.endpoint).json(request).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(target: "analysis_client", "Backend returned status {}", status);
            return Err(AppError::ApiStatus(status));
        }

        let payload = response.json::<RemoteResponse>().await?;
        tracing::debug!(target: "analysis_client", "Backend verdict: {:?}", payload);
        Ok(payload)
    }

    /// URL of the backend's health route, sharing the endpoint's base.
    pub fn health_url(&self) -> String {
        let base = self
            .endpoint
            .strip_suffix(ANALYZE_PATH)
            .unwrap_or(&self.endpoint);
        format!("{}{}", base, HEALTH_PATH)
    }

    /// Pings the backend's health route.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        let url = self.health_url();
        tracing::debug!(target: "analysis_client", "Checking backend health: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::ApiStatus(status));
        }
        Ok(response.json::<HealthStatus>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_url_shares_the_endpoint_base() {
        let config = Config {
            api_base_url: Some("https://api.example.com".to_string()),
            ..Config::default()
        };
        let client = AnalysisClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "https://api.example.com/api/analyze");
        assert_eq!(client.health_url(), "https://api.example.com/api/health");
    }

    #[test]
    fn unparseable_origin_recovers_to_loopback() {
        let config = Config {
            origin: Some("::not-an-origin::".to_string()),
            ..Config::default()
        };
        let client = AnalysisClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:5000/api/analyze");
    }
}
