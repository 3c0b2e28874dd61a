//! Loader types
//!
//! Declarative query definition types for YAML parsing.

use crate::engine::PagedQuery;
use crate::error::Result;
use crate::pagination::{
    CursorPaginator, OffsetPaginator, Paginator, StopCondition, DEFAULT_PAGE_SIZE,
};
use crate::response::ResponseLayout;
use crate::types::{Strategy, VariableMap};
use serde::{Deserialize, Serialize};

// ============================================================================
// Query Definition
// ============================================================================

/// A paged GraphQL query and how to walk it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct QueryDefinition {
    /// Definition name
    pub name: String,
    /// Human-readable description
    #[serde(default)]
    pub description: Option<String>,
    /// GraphQL query text
    pub query: String,
    /// Items per request
    #[serde(default = "default_page_size")]
    pub page_size: u32,
    /// Base variables (scalars only)
    #[serde(default)]
    pub variables: VariableMap,
    /// Where the paged collection sits in the response
    #[serde(default)]
    pub layout: ResponseLayout,
    /// Pagination strategy
    pub pagination: PaginationDefinition,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl QueryDefinition {
    /// Strategy this definition pages with
    pub fn strategy(&self) -> Strategy {
        self.pagination.strategy()
    }

    /// Build the paginator, optionally overriding the page size
    pub fn build_paginator(&self, page_size: Option<u32>) -> Result<Box<dyn Paginator>> {
        let page_size = page_size.unwrap_or(self.page_size);
        let paginator: Box<dyn Paginator> = match &self.pagination {
            PaginationDefinition::Offset {
                skip_param,
                take_param,
                stop,
            } => Box::new(
                OffsetPaginator::with_params(skip_param, take_param, page_size)?
                    .with_stop_condition(stop.clone()),
            ),
            PaginationDefinition::Cursor {
                first_param,
                after_param,
            } => Box::new(CursorPaginator::with_params(
                first_param,
                after_param,
                page_size,
            )?),
        };
        Ok(paginator)
    }

    /// The query with its base variables, `overrides` laid on top
    pub fn paged_query(&self, overrides: &VariableMap) -> PagedQuery {
        let mut variables = self.variables.clone();
        for (key, value) in overrides {
            variables.insert(key.clone(), value.clone());
        }
        PagedQuery {
            query: self.query.clone(),
            variables,
            layout: self.layout.clone(),
        }
    }
}

// ============================================================================
// Pagination Definition
// ============================================================================

/// Pagination configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaginationDefinition {
    /// Offset-based pagination
    Offset {
        /// Offset variable name
        #[serde(default = "default_skip_param")]
        skip_param: String,
        /// Page size variable name
        #[serde(default = "default_take_param")]
        take_param: String,
        /// Stop condition
        #[serde(default)]
        stop: StopCondition,
    },
    /// Cursor-based pagination over a Relay connection
    Cursor {
        /// Page size variable name
        #[serde(default = "default_first_param")]
        first_param: String,
        /// Continuation token variable name
        #[serde(default = "default_after_param")]
        after_param: String,
    },
}

impl PaginationDefinition {
    /// Strategy for this block
    pub fn strategy(&self) -> Strategy {
        match self {
            Self::Offset { .. } => Strategy::Offset,
            Self::Cursor { .. } => Strategy::Cursor,
        }
    }

    /// Variable names the strategy writes on every request
    pub fn params(&self) -> [&str; 2] {
        match self {
            Self::Offset {
                skip_param,
                take_param,
                ..
            } => [skip_param.as_str(), take_param.as_str()],
            Self::Cursor {
                first_param,
                after_param,
            } => [first_param.as_str(), after_param.as_str()],
        }
    }
}

fn default_skip_param() -> String {
    "skip".to_string()
}

fn default_take_param() -> String {
    "take".to_string()
}

fn default_first_param() -> String {
    "first".to_string()
}

fn default_after_param() -> String {
    "after".to_string()
}
