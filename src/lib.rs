// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # graphql-pager
//!
//! Reassembles complete result sets from GraphQL APIs that return large
//! collections a page at a time.
//!
//! ## Features
//!
//! - **Offset Pagination**: `skip`/`take`, ending on a short page
//! - **Cursor Pagination**: Relay `first`/`after` connections, ending on `hasNextPage = false`
//! - **Reassembly**: One response shaped like a single page, holding every item
//! - **Probe Mode**: Find out which strategy a server supports
//! - **YAML Queries**: Built-in and custom query definitions
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use graphql_pager::{load_definition, ClientConfig, GraphQlTransport, PageFetcher};
//!
//! #[tokio::main]
//! async fn main() -> graphql_pager::Result<()> {
//!     let definition = load_definition("engagements-cursor")?;
//!     let paginator = definition.build_paginator(None)?;
//!     let query = definition.paged_query(&Default::default());
//!
//!     let transport = GraphQlTransport::new(&ClientConfig::resolve(None, None)?)?;
//!     let outcome = PageFetcher::new(transport).fetch(&query, paginator.as_ref()).await?;
//!
//!     println!("{} items", outcome.response.item_count());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │            PageFetcher::fetch(query, paginator)              │
//! └──────────────────────────────────────────────────────────────┘
//!                               │
//! ┌─────────────┬───────────────┼───────────────┬────────────────┐
//! │  Transport  │   Paginate    │    Response   │     Output     │
//! ├─────────────┼───────────────┼───────────────┼────────────────┤
//! │ GraphQL/HTTP│ Offset        │ Layout        │ JSON file      │
//! │ Scripted    │ Cursor        │ Accumulator   │ stdout         │
//! │ Retry       │ Stop condition│ Reassembler   │                │
//! └─────────────┴───────────────┴───────────────┴────────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Endpoint and credential configuration
pub mod config;

/// HTTP client with optional retry
pub mod http;

/// GraphQL transport boundary
pub mod transport;

/// Pagination strategies
pub mod pagination;

/// Response layout, accumulation and reassembly
pub mod response;

/// Main execution engine
pub mod engine;

/// YAML loader for query definitions
pub mod loader;

/// Built-in query definitions
pub mod catalog;

/// Strategy support probing
pub mod probe;

/// JSON output
pub mod output;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::ClientConfig;
pub use engine::{FetchOutcome, PageFetcher, PagedQuery};
pub use loader::{load_definition, load_definition_from_str, QueryDefinition};
pub use pagination::{CursorPaginator, OffsetPaginator, Paginator};
pub use probe::{ProbeReport, Prober};
pub use response::{reassemble, ReassembledResponse, ResponseLayout, ResultAccumulator};
pub use transport::{GraphQlTransport, ScriptedTransport, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
