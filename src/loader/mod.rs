//! YAML Loader module
//!
//! Parse query definitions from YAML files.
//!
//! # Overview
//!
//! The loader module provides:
//! - `QueryDefinition` - Declarative paged query definition
//! - `PaginationDefinition` - Offset or cursor strategy block
//! - YAML parsing with validation

mod parser;
mod types;

pub use parser::{load_definition, load_definition_from_str};
pub use types::{PaginationDefinition, QueryDefinition};

#[cfg(test)]
mod tests;
