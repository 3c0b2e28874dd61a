//! Common types used throughout graphql-pager
//!
//! This module contains shared type definitions, type aliases,
//! and utility types used across multiple modules.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// GraphQL variable bindings, parameter name to scalar value
pub type VariableMap = serde_json::Map<String, JsonValue>;

// ============================================================================
// Strategy
// ============================================================================

/// Pagination strategy understood by the remote API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Numeric `skip`/`take` offset paging
    Offset,
    /// Relay-style `first`/`after` connection paging
    Cursor,
}

impl Strategy {
    /// Lowercase name used in logs and error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Offset => "offset",
            Strategy::Cursor => "cursor",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Variable helpers
// ============================================================================

/// Check that a variable value is a GraphQL scalar (or null)
pub fn is_scalar(value: &JsonValue) -> bool {
    !matches!(value, JsonValue::Array(_) | JsonValue::Object(_))
}

/// Parse a `key=value` (string) or `key:=json` (raw JSON scalar) binding
///
/// Plain values are always strings, so identifiers such as `0008005369`
/// keep their leading zeros.
pub fn parse_variable(binding: &str) -> Option<(String, JsonValue)> {
    if let Some((key, raw)) = binding.split_once(":=") {
        if key.is_empty() || key.contains('=') {
            return None;
        }
        let value: JsonValue = serde_json::from_str(raw).ok()?;
        return is_scalar(&value).then(|| (key.to_string(), value));
    }

    let (key, value) = binding.split_once('=')?;
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), JsonValue::String(value.to_string())))
}
