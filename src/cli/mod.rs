//! CLI module
//!
//! Command-line interface for fetching paged GraphQL results.
//!
//! # Commands
//!
//! - `fetch` - Walk every page of a query and print the reassembled response
//! - `probe` - Check which pagination strategy the server supports
//! - `list` - List built-in query definitions
//! - `validate` - Validate a query definition

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
