//! Execution engine module
//!
//! The single read loop shared by every pagination strategy.
//!
//! # Overview
//!
//! The engine module provides:
//! - `PageFetcher` - Drives a `Paginator` against a `Transport` until the last page
//! - `PagedQuery` - Query text, base variables and response layout
//! - `FetchOutcome` - The reassembled response plus statistics
//!
//! Pages are requested strictly one after another, since each request's
//! paging variables depend on the previous response. Any failure aborts the
//! whole traversal and discards the items gathered so far.

mod types;

pub use types::{FetchConfig, FetchOutcome, FetchStats, PagedQuery, TraversalState};

use crate::error::{Error, Result};
use crate::pagination::{NextPage, Page, Paginator};
use crate::response::reassemble;
use crate::transport::Transport;
use crate::types::{JsonValue, VariableMap};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Fetches every page of a query and reassembles the result
pub struct PageFetcher<T> {
    transport: T,
    config: FetchConfig,
}

impl<T: Transport> PageFetcher<T> {
    /// Create a fetcher over a transport
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            config: FetchConfig::default(),
        }
    }

    /// Set fetch configuration
    #[must_use]
    pub fn with_config(mut self, config: FetchConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch all pages of `query` using `paginator`
    ///
    /// Fails with `EmptyResult` if the first page matches no top-level
    /// entity. A later page with no match ends the traversal.
    pub async fn fetch(&self, query: &PagedQuery, paginator: &dyn Paginator) -> Result<FetchOutcome> {
        let start = Instant::now();
        let strategy = paginator.strategy();
        let mut state = TraversalState::new();
        let mut paging = paginator.initial_variables(&state.pagination);

        info!(
            "Starting {strategy} fetch, page size {}",
            paginator.page_size()
        );

        loop {
            if self.config.max_requests > 0
                && state.pagination.requests as usize >= self.config.max_requests
            {
                warn!("Stopping {strategy} fetch at the request limit");
                return Err(Error::PageLimit {
                    max_requests: self.config.max_requests,
                });
            }

            let body = self
                .request(query, paginator, &paging, &mut state)
                .await?;

            let Some(located) = query.layout.locate(&body)? else {
                if state.pagination.requests == 1 {
                    info!("No {} matched, request 1", query.layout.root);
                    return Err(Error::empty_result(&query.layout.root));
                }
                debug!("No {} on request {}", query.layout.root, state.pagination.requests);
                break;
            };

            let mut page: Page = paginator.decode_page(located.collection)?;
            page.envelope = Some(located.envelope);

            let next = paginator.process_page(&body, &page, &mut state.pagination)?;
            let page_items = page.len();
            state.results.absorb(page);

            match state.pagination.total_count {
                Some(total) => info!(
                    "Request {}: {page_items} {}, {} / {total} so far",
                    state.pagination.requests,
                    query.layout.collection,
                    state.results.len()
                ),
                None => info!(
                    "Request {}: {page_items} {}, {} so far",
                    state.pagination.requests,
                    query.layout.collection,
                    state.results.len()
                ),
            }

            match next {
                NextPage::Continue { variables } => paging = variables,
                NextPage::Done => break,
            }
        }

        let stats = FetchStats {
            requests: state.pagination.requests,
            items: state.results.len() as u64,
            total_count: state.pagination.total_count,
            duration_ms: start.elapsed().as_millis() as u64,
        };
        let response = reassemble(state.results, &query.layout)?;

        info!(
            "Completed {strategy} fetch: {} {} in {} requests",
            stats.items, query.layout.collection, stats.requests
        );

        Ok(FetchOutcome { response, stats })
    }

    /// Issue the first request only and decode it
    ///
    /// Used to check whether the server understands a strategy. Returns the
    /// decoded page with its envelope; `EmptyResult` if nothing matched.
    pub async fn fetch_page(&self, query: &PagedQuery, paginator: &dyn Paginator) -> Result<Page> {
        let mut state = TraversalState::new();
        let paging = paginator.initial_variables(&state.pagination);
        let body = self
            .request(query, paginator, &paging, &mut state)
            .await?;

        let located = query
            .layout
            .locate(&body)?
            .ok_or_else(|| Error::empty_result(&query.layout.root))?;

        let mut page = paginator.decode_page(located.collection)?;
        page.envelope = Some(located.envelope);
        Ok(page)
    }

    async fn request(
        &self,
        query: &PagedQuery,
        paginator: &dyn Paginator,
        paging: &VariableMap,
        state: &mut TraversalState,
    ) -> Result<JsonValue> {
        let variables = query.request_variables(paging);
        state.pagination.record_request();
        debug!(
            "Request {} ({}): {}",
            state.pagination.requests,
            paginator.strategy(),
            JsonValue::Object(variables.clone())
        );

        self.transport
            .execute(&query.query, &variables)
            .await
            .inspect_err(|e| {
                warn!(
                    "{} request {} failed: {e}",
                    paginator.strategy(),
                    state.pagination.requests
                );
            })
    }
}

impl<T> std::fmt::Debug for PageFetcher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageFetcher")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
