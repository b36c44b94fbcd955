//! Resolves the analysis endpoint URL across deployment environments.
//!
//! The same binary has to reach the backend from three very different places
//! without per-environment builds: plain local development, cloud-hosted
//! forwarded-port development (where the front-end and back-end are exposed
//! as `...-5175.<domain>` and `...-5000.<domain>`), and generic production
//! hosting. Resolution is a pure function over the configured base URL and
//! the client's own location, expressed as an ordered rule table so each
//! rule is unit-testable on its own.

use url::Url;

/// Path segment of the analysis route, appended in all fallback cases.
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Well-known port the backend listens on.
pub const BACKEND_PORT: u16 = 5000;

/// Substring marking a cloud-forwarded-port dev host (e.g. Codespaces).
const FORWARDED_PORT_MARKER: &str = "-517";
const FRONTEND_PORT_SUFFIX: &str = "-5175";
const BACKEND_PORT_SUFFIX: &str = "-5000";

/// The client's own location, mirroring what a browser would report.
/// Injectable so the resolver stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientLocation {
    /// Scheme with trailing colon, e.g. `"https:"`.
    pub protocol: String,
    /// Host name only, e.g. `"localhost"`.
    pub hostname: String,
    /// Host name plus port when present, e.g. `"localhost:5175"`.
    pub host: String,
}

impl ClientLocation {
    /// Parses an origin string such as `"https://myhost:5175"`.
    pub fn from_origin(origin: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(origin)?;
        let hostname = url.host_str().unwrap_or_default().to_string();
        let host = match url.port() {
            Some(port) => format!("{}:{}", hostname, port),
            None => hostname.clone(),
        };
        Ok(Self {
            protocol: format!("{}:", url.scheme()),
            hostname,
            host,
        })
    }

    fn loopback() -> Self {
        Self {
            protocol: "http:".to_string(),
            hostname: "localhost".to_string(),
            host: "localhost".to_string(),
        }
    }
}

impl Default for ClientLocation {
    fn default() -> Self {
        Self::loopback()
    }
}

/// Resolves the absolute analysis endpoint URL.
///
/// An explicitly configured base URL always wins: it is used verbatim when it
/// already names the analyze route, otherwise one trailing slash is stripped
/// and the route appended. Without one, the location rules below apply in
/// order, and a location too malformed for any rule falls back to loopback.
pub fn resolve_endpoint(configured: Option<&str>, location: &ClientLocation) -> String {
    if let Some(base) = configured.filter(|s| !s.is_empty()) {
        if base.ends_with(ANALYZE_PATH) {
            return base.to_string();
        }
        let trimmed = base.strip_suffix('/').unwrap_or(base);
        return format!("{}{}", trimmed, ANALYZE_PATH);
    }

    const RULES: &[fn(&ClientLocation) -> Option<String>] =
        &[forwarded_dev_rule, loopback_rule, same_host_rule];

    RULES
        .iter()
        .find_map(|rule| rule(location))
        .unwrap_or_else(loopback_endpoint)
}

/// The safety-net URL used when nothing better can be derived.
pub fn loopback_endpoint() -> String {
    format!("http://localhost:{}{}", BACKEND_PORT, ANALYZE_PATH)
}

/// Cloud-forwarded-port dev host: swap the front-end port suffix in the host
/// for the back-end one, keeping the protocol.
fn forwarded_dev_rule(location: &ClientLocation) -> Option<String> {
    if location.protocol.is_empty() || !location.host.contains(FORWARDED_PORT_MARKER) {
        return None;
    }
    let host = location
        .host
        .replacen(FRONTEND_PORT_SUFFIX, BACKEND_PORT_SUFFIX, 1);
    Some(format!("{}//{}{}", location.protocol, host, ANALYZE_PATH))
}

/// Plain local development: the backend sits on loopback at its usual port.
fn loopback_rule(location: &ClientLocation) -> Option<String> {
    match location.hostname.as_str() {
        "localhost" | "127.0.0.1" => Some(loopback_endpoint()),
        _ => None,
    }
}

/// Generic hosting: same host as the client, backend port.
fn same_host_rule(location: &ClientLocation) -> Option<String> {
    if location.protocol.is_empty() || location.hostname.is_empty() {
        return None;
    }
    Some(format!(
        "{}//{}:{}{}",
        location.protocol, location.hostname, BACKEND_PORT, ANALYZE_PATH
    ))
}
