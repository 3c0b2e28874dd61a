//! HTTP client with optional retry
//!
//! Provides the HTTP client used by the GraphQL transport:
//! - Bounded retries with configurable backoff (off by default)
//! - Default headers, including bearer credentials
//! - Error classification for retry decisions

use crate::error::{Error, Result};
use crate::types::BackoffType;
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Request timeout
    pub timeout: Duration,
    /// Maximum number of retries (0 = fail on the first error)
    pub max_retries: u32,
    /// Initial delay for backoff
    pub initial_backoff: Duration,
    /// Maximum delay for backoff
    pub max_backoff: Duration,
    /// Type of backoff strategy
    pub backoff_type: BackoffType,
    /// Default headers for all requests
    pub default_headers: HashMap<String, String>,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(60),
            max_retries: 0,
            initial_backoff: Duration::from_millis(250),
            max_backoff: Duration::from_secs(30),
            backoff_type: BackoffType::Exponential,
            default_headers: HashMap::new(),
            user_agent: format!("graphql-pager/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpClientConfig {
    /// Create a new config builder
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client config
#[derive(Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set max retries
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    /// Set backoff configuration
    pub fn backoff(mut self, backoff_type: BackoffType, initial: Duration, max: Duration) -> Self {
        self.config.backoff_type = backoff_type;
        self.config.initial_backoff = initial;
        self.config.max_backoff = max;
        self
    }

    /// Add a default header
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.insert(key.into(), value.into());
        self
    }

    /// Send `Authorization: Bearer <token>` with every request
    pub fn bearer_token(self, token: impl AsRef<str>) -> Self {
        let value = format!("Bearer {}", token.as_ref());
        self.header("Authorization", value)
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

/// HTTP client with optional retry
pub struct HttpClient {
    client: Client,
    config: HttpClientConfig,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(HttpClientConfig::default())
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// POST a JSON body, retrying transient failures up to `max_retries` times
    ///
    /// Any non-success status that is not retried (or is still failing after
    /// the last retry) becomes `Error::HttpStatus` with the raw body text.
    pub async fn post_json(&self, url: &str, body: &Value) -> Result<Response> {
        let max_retries = self.config.max_retries;
        let timeout = self.config.timeout;
        let mut attempt = 0;

        loop {
            let mut req = self.client.post(url).json(body).timeout(timeout);
            for (key, value) in &self.config.default_headers {
                req = req.header(key.as_str(), value.as_str());
            }

            let (error, delay) = match req.send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        debug!("Request succeeded: POST {url}");
                        return Ok(response);
                    }

                    let retryable = is_retryable_status(status);
                    let delay = if status == StatusCode::TOO_MANY_REQUESTS {
                        extract_retry_after(&response)
                            .map_or_else(|| self.calculate_backoff(attempt), Duration::from_secs)
                    } else {
                        self.calculate_backoff(attempt)
                    };
                    let body = response.text().await.unwrap_or_default();
                    let error = Error::http_status(status.as_u16(), body);
                    if !retryable {
                        return Err(error);
                    }
                    (error, delay)
                }
                Err(e) if e.is_timeout() => (
                    Error::Timeout {
                        timeout_ms: timeout.as_millis() as u64,
                    },
                    self.calculate_backoff(attempt),
                ),
                Err(e) if e.is_connect() => (Error::Http(e), self.calculate_backoff(attempt)),
                Err(e) => return Err(Error::Http(e)),
            };

            if attempt >= max_retries {
                if max_retries > 0 {
                    warn!("Giving up after {} attempts: {error}", attempt + 1);
                }
                return Err(error);
            }

            warn!(
                "Request failed ({error}), attempt {}/{}, retrying in {:?}",
                attempt + 1,
                max_retries + 1,
                delay
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    /// Calculate backoff delay for a given attempt
    pub fn calculate_backoff(&self, attempt: u32) -> Duration {
        let delay = match self.config.backoff_type {
            BackoffType::Constant => self.config.initial_backoff,
            BackoffType::Linear => self.config.initial_backoff * (attempt + 1),
            BackoffType::Exponential => {
                let factor = 2u32.saturating_pow(attempt);
                self.config.initial_backoff * factor
            }
        };

        std::cmp::min(delay, self.config.max_backoff)
    }
}

impl std::fmt::Debug for HttpClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("timeout", &self.config.timeout)
            .field("max_retries", &self.config.max_retries)
            .field("backoff_type", &self.config.backoff_type)
            .finish_non_exhaustive()
    }
}

/// Check if an HTTP status is retryable
fn is_retryable_status(status: StatusCode) -> bool {
    matches!(
        status.as_u16(),
        429 | 500 | 502 | 503 | 504 | 520 | 521 | 522 | 523 | 524
    )
}

/// Extract retry-after header value
fn extract_retry_after(response: &Response) -> Option<u64> {
    response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.parse().ok())
}
