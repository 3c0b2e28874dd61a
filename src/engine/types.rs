//! Engine types
//!
//! Query, configuration, state and statistics for one traversal.

use crate::pagination::PaginationState;
use crate::response::{ReassembledResponse, ResponseLayout, ResultAccumulator};
use crate::types::{JsonValue, VariableMap};
use serde::Serialize;

/// A parameterized query plus the layout of its response
#[derive(Debug, Clone, PartialEq)]
pub struct PagedQuery {
    /// GraphQL query text, treated as opaque
    pub query: String,
    /// Base variables merged into every request
    pub variables: VariableMap,
    /// Where the paged collection sits in the response
    pub layout: ResponseLayout,
}

impl PagedQuery {
    /// Create a query with no base variables and the default layout
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: VariableMap::new(),
            layout: ResponseLayout::default(),
        }
    }

    /// Set a base variable
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Set the response layout
    #[must_use]
    pub fn with_layout(mut self, layout: ResponseLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Base variables with the strategy's paging variables laid over them
    pub fn request_variables(&self, paging: &VariableMap) -> VariableMap {
        let mut variables = self.variables.clone();
        for (key, value) in paging {
            variables.insert(key.clone(), value.clone());
        }
        variables
    }
}

/// Configuration for fetch operations
#[derive(Debug, Clone, Default)]
pub struct FetchConfig {
    /// Maximum requests per traversal (0 = unlimited)
    pub max_requests: usize,
}

impl FetchConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request limit
    #[must_use]
    pub fn with_max_requests(mut self, max_requests: usize) -> Self {
        self.max_requests = max_requests;
        self
    }
}

/// Mutable state of one traversal, owned by a single `fetch` call
#[derive(Debug, Clone, Default)]
pub struct TraversalState {
    /// Paging position and counters
    pub pagination: PaginationState,
    /// Items and envelope gathered so far
    pub results: ResultAccumulator,
}

impl TraversalState {
    /// Create a fresh state
    pub fn new() -> Self {
        Self::default()
    }
}

/// Statistics for a completed traversal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchStats {
    /// Transport calls issued, including the final short or empty page
    pub requests: u32,
    /// Items gathered
    pub items: u64,
    /// Total the server reported, if any
    pub total_count: Option<u64>,
    /// Wall-clock duration in milliseconds
    pub duration_ms: u64,
}

/// Result of a completed traversal
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// The reassembled response
    pub response: ReassembledResponse,
    /// Traversal statistics
    pub stats: FetchStats,
}
