//! Error types for graphql-pager
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use serde_json::Value;
use thiserror::Error;

/// The main error type for graphql-pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error("GraphQL errors: {}", pretty_errors(.errors))]
    GraphQl { errors: Vec<Value> },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Pagination Errors
    // ============================================================================
    #[error("No {root} matched the query")]
    EmptyResult { root: String },

    #[error("Failed to decode {kind} page: {message}")]
    Decode { kind: String, message: String },

    #[error("Pagination error: {message}")]
    Pagination { message: String },

    #[error("Request limit ({max_requests}) reached before the last page")]
    PageLimit { max_requests: usize },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad failure classes callers can branch on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Missing or invalid configuration, raised before any request
    Configuration,
    /// Non-success response or connection failure
    Transport,
    /// GraphQL `errors` array on a success response
    Protocol,
    /// The first page matched nothing
    EmptyResult,
    /// A page did not have the shape the strategy expects
    Decode,
    /// Local file system failure
    Io,
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a GraphQL protocol error
    pub fn graphql(errors: Vec<Value>) -> Self {
        Self::GraphQl { errors }
    }

    /// Create an empty result error
    pub fn empty_result(root: impl Into<String>) -> Self {
        Self::EmptyResult { root: root.into() }
    }

    /// Create a decode error
    pub fn decode(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Create a pagination error
    pub fn pagination(message: impl Into<String>) -> Self {
        Self::Pagination {
            message: message.into(),
        }
    }

    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::Config { .. }
            | Error::MissingConfigField { .. }
            | Error::InvalidConfigValue { .. }
            | Error::InvalidUrl(_)
            | Error::YamlParse(_) => ErrorCategory::Configuration,
            Error::Http(_)
            | Error::HttpStatus { .. }
            | Error::Timeout { .. } => ErrorCategory::Transport,
            Error::GraphQl { .. } | Error::JsonParse(_) => ErrorCategory::Protocol,
            Error::EmptyResult { .. } => ErrorCategory::EmptyResult,
            Error::Decode { .. } | Error::Pagination { .. } | Error::PageLimit { .. } => {
                ErrorCategory::Decode
            }
            Error::Io(_) => ErrorCategory::Io,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Http(e) => e.is_timeout() || e.is_connect(),
            Error::Timeout { .. } => true,
            Error::HttpStatus { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Check if an HTTP status code is retryable
fn is_retryable_status(status: u16) -> bool {
    matches!(status, 429 | 500 | 502 | 503 | 504)
}

fn pretty_errors(errors: &[Value]) -> String {
    serde_json::to_string_pretty(errors).unwrap_or_else(|_| format!("{errors:?}"))
}

/// Result type alias for graphql-pager
pub type Result<T> = std::result::Result<T, Error>;
