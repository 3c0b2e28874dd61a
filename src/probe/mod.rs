//! Probe module
//!
//! Issues one small request per strategy to find out which pagination
//! style a server understands.
//!
//! # Overview
//!
//! - `Prober` - Runs the offset probe, pauses, then the cursor probe
//! - `ProbeReport` - Both outcomes plus a recommendation
//!
//! A failing probe is reported, not raised: the error text becomes the
//! outcome's `reason`.

mod types;

pub use types::{ProbeOutcome, ProbeReport, Recommendation, SAMPLE_SIZE};

use crate::engine::{PageFetcher, PagedQuery};
use crate::error::Result;
use crate::pagination::{CursorPaginator, OffsetPaginator, Paginator};
use crate::transport::Transport;
use crate::types::Strategy;
use std::time::Duration;
use tracing::{info, warn};

/// Page size used when probing
pub const DEFAULT_PROBE_PAGE_SIZE: u32 = 10;

/// Pause between the two probe requests
pub const DEFAULT_PROBE_PAUSE: Duration = Duration::from_secs(1);

/// Probes a server for offset and cursor support
pub struct Prober<T> {
    fetcher: PageFetcher<T>,
    pause: Duration,
}

impl<T: Transport> Prober<T> {
    /// Create a prober over a transport
    pub fn new(transport: T) -> Self {
        Self {
            fetcher: PageFetcher::new(transport),
            pause: DEFAULT_PROBE_PAUSE,
        }
    }

    /// Set the pause between the offset and cursor requests
    #[must_use]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }

    /// Get the transport
    pub fn transport(&self) -> &T {
        self.fetcher.transport()
    }

    /// Probe both strategies with default variable names
    pub async fn probe(
        &self,
        offset_query: &PagedQuery,
        cursor_query: &PagedQuery,
        page_size: u32,
    ) -> Result<ProbeReport> {
        let offset = OffsetPaginator::new(page_size)?;
        let cursor = CursorPaginator::new(page_size)?;
        Ok(self
            .probe_with(
                (offset_query, &offset as &dyn Paginator),
                (cursor_query, &cursor as &dyn Paginator),
            )
            .await)
    }

    /// Probe both strategies with prepared paginators, offset first
    pub async fn probe_with(
        &self,
        offset: (&PagedQuery, &dyn Paginator),
        cursor: (&PagedQuery, &dyn Paginator),
    ) -> ProbeReport {
        let offset = self.probe_strategy(offset.0, offset.1).await;
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }
        let cursor = self.probe_strategy(cursor.0, cursor.1).await;

        let report = ProbeReport::new(offset, cursor);
        info!("Probe recommendation: {:?}", report.recommendation());
        report
    }

    /// Issue one request for a single strategy
    pub async fn probe_strategy(&self, query: &PagedQuery, paginator: &dyn Paginator) -> ProbeOutcome {
        let strategy = paginator.strategy();
        info!("Probing {strategy} pagination, page size {}", paginator.page_size());

        let page = match self.fetcher.fetch_page(query, paginator).await {
            Ok(page) => page,
            Err(e) => {
                warn!("{strategy} pagination not supported: {e}");
                return ProbeOutcome::unsupported(strategy, e.to_string());
            }
        };

        let page_info = page.page_info.as_ref();
        let outcome = ProbeOutcome {
            strategy,
            supported: true,
            reason: None,
            items: page.len(),
            samples: page.items.iter().take(SAMPLE_SIZE).cloned().collect(),
            envelope: page.envelope.clone(),
            total_count: page.total_count,
            has_next_page: match strategy {
                Strategy::Cursor => page_info.map(|i| i.has_next_page),
                Strategy::Offset => None,
            },
            end_cursor: page_info.and_then(|i| i.end_cursor.clone()),
        };

        info!("{outcome}");
        outcome
    }
}

impl<T> std::fmt::Debug for Prober<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Prober")
            .field("pause", &self.pause)
            .finish_non_exhaustive()
    }
}
