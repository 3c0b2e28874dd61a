//! Output module
//!
//! Persists results as JSON.
//!
//! # Overview
//!
//! This module provides utilities for:
//! - Writing a reassembled response or probe report to a file
//! - Printing the same to stdout
//! - Pretty (two-space indented) or compact rendering

mod writer;

pub use writer::{print_json, to_json_string, write_json};
