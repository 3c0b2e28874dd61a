//! Probe report types

use crate::response::Envelope;
use crate::types::{JsonValue, Strategy};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Sample items kept per outcome
pub const SAMPLE_SIZE: usize = 3;

/// Result of one probe request for one strategy
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeOutcome {
    /// Strategy probed
    pub strategy: Strategy,
    /// Whether the server answered in the strategy's shape
    pub supported: bool,
    /// Failure text when unsupported
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Items on the first page
    pub items: usize,
    /// First few items
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<JsonValue>,
    /// Envelope of the first page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub envelope: Option<Envelope>,
    /// Server-reported total (cursor only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
    /// Whether more pages follow (cursor only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_next_page: Option<bool>,
    /// Continuation token for the next page (cursor only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_cursor: Option<String>,
}

impl ProbeOutcome {
    /// An unsupported outcome carrying the failure text
    pub fn unsupported(strategy: Strategy, reason: impl Into<String>) -> Self {
        Self {
            strategy,
            supported: false,
            reason: Some(reason.into()),
            items: 0,
            samples: Vec::new(),
            envelope: None,
            total_count: None,
            has_next_page: None,
            end_cursor: None,
        }
    }
}

/// Which strategy to use against this server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Cursor works; preferred since the server declares the last page
    Cursor,
    /// Only offset works
    Offset,
    /// Neither strategy worked
    Neither,
}

/// Side-by-side outcome of probing both strategies
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProbeReport {
    /// When the probe ran
    pub timestamp: DateTime<Utc>,
    /// Offset probe result
    pub offset: ProbeOutcome,
    /// Cursor probe result
    pub cursor: ProbeOutcome,
    /// Derived recommendation
    recommendation: Recommendation,
}

impl ProbeReport {
    /// Build a report timestamped now
    pub fn new(offset: ProbeOutcome, cursor: ProbeOutcome) -> Self {
        let recommendation = if cursor.supported {
            Recommendation::Cursor
        } else if offset.supported {
            Recommendation::Offset
        } else {
            Recommendation::Neither
        };
        Self {
            timestamp: Utc::now(),
            offset,
            cursor,
            recommendation,
        }
    }

    /// Recommended strategy
    pub fn recommendation(&self) -> Recommendation {
        self.recommendation
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.supported {
            return write!(
                f,
                "{}: NOT SUPPORTED - {}",
                self.strategy,
                self.reason.as_deref().unwrap_or("unknown")
            );
        }
        write!(f, "{}: SUPPORTED - returned {} items", self.strategy, self.items)?;
        if let Some(total) = self.total_count {
            write!(f, ", {total} available")?;
        }
        if self.has_next_page == Some(true) {
            write!(f, ", more pages")?;
        }
        Ok(())
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.offset)?;
        writeln!(f, "{}", self.cursor)?;
        match self.recommendation {
            Recommendation::Cursor if self.offset.supported => {
                write!(f, "Both strategies work; use cursor pagination")
            }
            Recommendation::Cursor => write!(f, "Use cursor pagination"),
            Recommendation::Offset => write!(f, "Use offset pagination"),
            Recommendation::Neither => write!(
                f,
                "Neither strategy worked; check the endpoint, token and the server's pagination syntax"
            ),
        }
    }
}
