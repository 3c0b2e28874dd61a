//! Client configuration
//!
//! Endpoint and credential are resolved once, before any request is made:
//! explicit values win, otherwise the named environment variables are read.

use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use url::Url;

/// Environment variable holding the GraphQL endpoint URL
pub const ENDPOINT_ENV: &str = "MAT_GRAPHQL_ENDPOINT";

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "MAT_API_TOKEN";

/// Prefix of the placeholder values shipped in sample configurations
const PLACEHOLDER_PREFIX: &str = "YOUR_";

/// Connection settings for one GraphQL endpoint
#[derive(Clone)]
pub struct ClientConfig {
    /// GraphQL endpoint
    pub endpoint: Url,
    /// Bearer token
    pub token: String,
    /// HTTP client settings (timeouts, retries)
    pub http: HttpClientConfig,
}

impl ClientConfig {
    /// Create a config from already-resolved values
    pub fn new(endpoint: &str, token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        validate_value(ENDPOINT_ENV, endpoint)?;
        validate_value(TOKEN_ENV, &token)?;

        let endpoint = Url::parse(endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(Error::invalid_value(
                ENDPOINT_ENV,
                format!("unsupported scheme '{}'", endpoint.scheme()),
            ));
        }

        Ok(Self {
            endpoint,
            token,
            http: HttpClientConfig::default(),
        })
    }

    /// Resolve from explicit values, falling back to the process environment
    pub fn resolve(endpoint: Option<String>, token: Option<String>) -> Result<Self> {
        Self::resolve_with(endpoint, token, |key| std::env::var(key).ok())
    }

    /// Resolve from explicit values, falling back to `lookup`
    pub fn resolve_with<F>(endpoint: Option<String>, token: Option<String>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = endpoint
            .or_else(|| lookup(ENDPOINT_ENV))
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::missing_field(ENDPOINT_ENV))?;
        let token = token
            .or_else(|| lookup(TOKEN_ENV))
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| Error::missing_field(TOKEN_ENV))?;

        Self::new(endpoint.trim(), token.trim())
    }

    /// Replace the HTTP client settings
    #[must_use]
    pub fn with_http(mut self, http: HttpClientConfig) -> Self {
        self.http = http;
        self
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &"<redacted>")
            .field("http", &self.http)
            .finish()
    }
}

fn validate_value(field: &str, value: &str) -> Result<()> {
    if value.starts_with(PLACEHOLDER_PREFIX) {
        return Err(Error::invalid_value(
            field,
            "placeholder value, set the real one",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_explicit_values_win() {
        let config = ClientConfig::resolve_with(
            Some("https://explicit.example.com/graphql".into()),
            Some("explicit-token".into()),
            env(&[
                (ENDPOINT_ENV, "https://env.example.com/graphql"),
                (TOKEN_ENV, "env-token"),
            ]),
        )
        .unwrap();

        assert_eq!(config.endpoint.as_str(), "https://explicit.example.com/graphql");
        assert_eq!(config.token, "explicit-token");
    }

    #[test]
    fn test_environment_fallback() {
        let config = ClientConfig::resolve_with(
            None,
            None,
            env(&[
                (ENDPOINT_ENV, "https://env.example.com/graphql"),
                (TOKEN_ENV, "env-token"),
            ]),
        )
        .unwrap();

        assert_eq!(config.endpoint.host_str(), Some("env.example.com"));
        assert_eq!(config.token, "env-token");
    }

    #[test]
    fn test_missing_endpoint() {
        let err = ClientConfig::resolve_with(None, Some("t".into()), env(&[])).unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == ENDPOINT_ENV));
        assert_eq!(err.category(), ErrorCategory::Configuration);
    }

    #[test]
    fn test_missing_token() {
        let err = ClientConfig::resolve_with(
            Some("https://api.example.com/graphql".into()),
            None,
            env(&[(TOKEN_ENV, "   ")]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == TOKEN_ENV));
    }

    #[test]
    fn test_invalid_url() {
        let err = ClientConfig::new("not a url", "t").unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));

        let err = ClientConfig::new("ftp://example.com/graphql", "t").unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
    }

    #[test]
    fn test_placeholder_rejected() {
        let err = ClientConfig::new("https://api.example.com/graphql", "YOUR_TOKEN_HERE")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == TOKEN_ENV));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("https://api.example.com/graphql", "s3cr3t").unwrap();
        let text = format!("{config:?}");
        assert!(text.contains("<redacted>"));
        assert!(!text.contains("s3cr3t"));
    }
}
