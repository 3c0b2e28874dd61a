//! CLI runner - executes commands

use crate::catalog;
use crate::cli::commands::{Cli, Commands};
use crate::config::ClientConfig;
use crate::engine::{FetchConfig, PageFetcher};
use crate::error::{Error, Result};
use crate::http::HttpClientConfig;
use crate::loader::{load_definition, load_definition_from_str, QueryDefinition};
use crate::output::{print_json, write_json};
use crate::probe::Prober;
use crate::transport::GraphQlTransport;
use crate::types::{JsonValue, Strategy, VariableMap};
use serde_json::json;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch {
                query,
                page_size,
                vars,
                output,
                compact,
                max_requests,
            } => {
                self.fetch(
                    query,
                    *page_size,
                    vars,
                    output.as_deref(),
                    !*compact,
                    *max_requests,
                )
                .await
            }
            Commands::Probe {
                offset_query,
                cursor_query,
                page_size,
                vars,
                pause_ms,
                output,
            } => {
                self.probe(
                    offset_query,
                    cursor_query,
                    *page_size,
                    vars,
                    Duration::from_millis(*pause_ms),
                    output.as_deref(),
                )
                .await
            }
            Commands::List => self.list_queries(),
            Commands::Validate { query } => self.validate(query),
        }
    }

    /// Build the GraphQL transport from flags and environment
    fn transport(&self) -> Result<GraphQlTransport> {
        let http = HttpClientConfig::builder()
            .timeout(Duration::from_secs(self.cli.timeout))
            .max_retries(self.cli.max_retries)
            .build();
        let config = ClientConfig::resolve(self.cli.endpoint.clone(), self.cli.token.clone())?
            .with_http(http);

        info!("Using endpoint {}", config.endpoint);
        GraphQlTransport::new(&config)
    }

    // ========================================================================
    // Commands
    // ========================================================================

    async fn fetch(
        &self,
        query: &str,
        page_size: Option<u32>,
        vars: &[(String, JsonValue)],
        output: Option<&Path>,
        pretty: bool,
        max_requests: usize,
    ) -> Result<()> {
        let definition = load_definition(query)?;
        let paginator = definition.build_paginator(page_size)?;
        let paged = definition.paged_query(&variable_map(vars));

        let fetcher = PageFetcher::new(self.transport()?)
            .with_config(FetchConfig::new().with_max_requests(max_requests));
        let outcome = fetcher.fetch(&paged, paginator.as_ref()).await?;

        match output {
            Some(path) => write_json(path, &outcome.response, pretty)?,
            None => print_json(&outcome.response, pretty)?,
        }

        info!(
            "Fetched {} items in {} requests ({} ms)",
            outcome.stats.items, outcome.stats.requests, outcome.stats.duration_ms
        );
        Ok(())
    }

    async fn probe(
        &self,
        offset_query: &str,
        cursor_query: &str,
        page_size: u32,
        vars: &[(String, JsonValue)],
        pause: Duration,
        output: Option<&Path>,
    ) -> Result<()> {
        let overrides = variable_map(vars);
        let offset_def = load_strategy_definition(offset_query, Strategy::Offset)?;
        let cursor_def = load_strategy_definition(cursor_query, Strategy::Cursor)?;

        let offset_paginator = offset_def.build_paginator(Some(page_size))?;
        let cursor_paginator = cursor_def.build_paginator(Some(page_size))?;
        let offset_paged = offset_def.paged_query(&overrides);
        let cursor_paged = cursor_def.paged_query(&overrides);

        let prober = Prober::new(self.transport()?).with_pause(pause);
        let report = prober
            .probe_with(
                (&offset_paged, offset_paginator.as_ref()),
                (&cursor_paged, cursor_paginator.as_ref()),
            )
            .await;

        match output {
            Some(path) => {
                write_json(path, &report, true)?;
                println!("{report}");
            }
            None => print_json(&report, true)?,
        }
        Ok(())
    }

    fn list_queries(&self) -> Result<()> {
        let queries = catalog::list_builtin()
            .into_iter()
            .filter_map(catalog::get_builtin)
            .map(load_definition_from_str)
            .map(|def| {
                def.map(|def| {
                    json!({
                        "name": def.name,
                        "description": def.description,
                        "strategy": def.strategy(),
                        "page_size": def.page_size,
                        "variables": def.variables,
                    })
                })
            })
            .collect::<Result<Vec<_>>>()?;

        print_json(&queries, true)
    }

    fn validate(&self, query: &str) -> Result<()> {
        let definition = load_definition(query)?;
        println!(
            "Query '{}' is valid: {} pagination, page size {}, collection '{}'",
            definition.name,
            definition.strategy(),
            definition.page_size,
            definition.layout.collection
        );
        Ok(())
    }
}

/// Load a definition and check it pages with `expected`
fn load_strategy_definition(name_or_path: &str, expected: Strategy) -> Result<QueryDefinition> {
    let definition = load_definition(name_or_path)?;
    if definition.strategy() != expected {
        return Err(Error::config(format!(
            "Query '{}' uses {} pagination, expected {expected}",
            definition.name,
            definition.strategy()
        )));
    }
    Ok(definition)
}

fn variable_map(vars: &[(String, JsonValue)]) -> VariableMap {
    vars.iter().cloned().collect()
}
