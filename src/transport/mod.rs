//! Transport module
//!
//! One network round trip: a query plus variable bindings in, a parsed
//! GraphQL response (or a transport/protocol failure) out.
//!
//! # Overview
//!
//! - `Transport` - The single operation the paginators depend on
//! - `GraphQlTransport` - JSON-over-HTTP POST with bearer credentials
//! - `ScriptedTransport` - In-memory replay of canned responses

mod graphql;
mod scripted;

pub use graphql::GraphQlTransport;
pub use scripted::{RecordedRequest, ScriptedTransport};

use crate::error::Result;
use crate::types::{JsonValue, VariableMap};
use async_trait::async_trait;

/// Executes one paged request
#[async_trait]
pub trait Transport: Send + Sync {
    /// Run `query` with `variables` and return the full response body
    ///
    /// Implementations fail with a transport error for non-success responses
    /// and with `Error::GraphQl` when the body carries a non-empty `errors` list.
    async fn execute(&self, query: &str, variables: &VariableMap) -> Result<JsonValue>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for &T {
    async fn execute(&self, query: &str, variables: &VariableMap) -> Result<JsonValue> {
        (**self).execute(query, variables).await
    }
}
