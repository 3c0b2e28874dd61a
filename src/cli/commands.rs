//! CLI commands and argument parsing

use crate::probe::DEFAULT_PROBE_PAGE_SIZE;
use crate::types::{parse_variable, JsonValue};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Fetch complete result sets from page-bounded GraphQL APIs
#[derive(Parser, Debug)]
#[command(name = "graphql-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// GraphQL endpoint URL (default: $MAT_GRAPHQL_ENDPOINT)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Bearer token (default: $MAT_API_TOKEN)
    #[arg(long, global = true)]
    pub token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value = "60")]
    pub timeout: u64,

    /// Retries for transient failures (429, 5xx, timeouts)
    #[arg(long, global = true, default_value = "0")]
    pub max_retries: u32,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch every page of a query and print the reassembled response
    Fetch {
        /// Built-in query name or path to a YAML definition
        #[arg(short, long)]
        query: String,

        /// Items per request (default: the definition's page size)
        #[arg(long)]
        page_size: Option<u32>,

        /// Variable binding: key=value (string) or key:=json (raw JSON scalar)
        #[arg(long = "var", value_name = "BINDING", value_parser = parse_binding)]
        vars: Vec<(String, JsonValue)>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,

        /// Maximum requests before giving up (0 = unlimited)
        #[arg(long, default_value = "0")]
        max_requests: usize,
    },

    /// Issue one request per strategy and report which one works
    Probe {
        /// Query used for the offset probe
        #[arg(long, default_value = "engagements-offset-probe")]
        offset_query: String,

        /// Query used for the cursor probe
        #[arg(long, default_value = "engagements-cursor-probe")]
        cursor_query: String,

        /// Items per probe request
        #[arg(long, default_value_t = DEFAULT_PROBE_PAGE_SIZE)]
        page_size: u32,

        /// Variable binding: key=value (string) or key:=json (raw JSON scalar)
        #[arg(long = "var", value_name = "BINDING", value_parser = parse_binding)]
        vars: Vec<(String, JsonValue)>,

        /// Pause between the two probes, in milliseconds
        #[arg(long, default_value = "1000")]
        pause_ms: u64,

        /// Write the JSON report here and print a summary instead
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List built-in query definitions
    List,

    /// Validate a query definition
    Validate {
        /// Built-in query name or path to a YAML definition
        #[arg(short, long)]
        query: String,
    },
}

fn parse_binding(binding: &str) -> Result<(String, JsonValue), String> {
    parse_variable(binding).ok_or_else(|| {
        format!("invalid variable '{binding}': expected key=value or key:=<json scalar>")
    })
}
