//! Pagination types and traits
//!
//! Defines the core pagination abstractions shared by both strategies.

use crate::error::Result;
use crate::response::Envelope;
use crate::types::{JsonValue, Strategy, VariableMap};
use serde::{Deserialize, Serialize};

/// Result of the next page computation
#[derive(Debug, Clone, PartialEq)]
pub enum NextPage {
    /// More pages available; request the next one with these variables
    Continue {
        /// Pagination variables to merge over the base variables
        variables: VariableMap,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Create a continuation with pagination variables
    pub fn with_variables(variables: VariableMap) -> Self {
        Self::Continue { variables }
    }

    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Connection-level continuation reported by a cursor page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Server says more items follow
    pub has_next_page: bool,
    /// Opaque token to pass as `after` for the next page
    pub end_cursor: Option<String>,
}

/// One decoded page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    /// Items in server order
    pub items: Vec<JsonValue>,
    /// Ancestor-entity fields wrapping the collection
    pub envelope: Option<Envelope>,
    /// Cursor continuation, cursor strategy only
    pub page_info: Option<PageInfo>,
    /// Total items available, when the server reports it
    pub total_count: Option<u64>,
}

impl Page {
    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether this page carried no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Stop conditions for offset pagination
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StopCondition {
    /// Stop when a page holds fewer items than the page size
    ///
    /// A final page that is exactly full costs one extra request, which must
    /// come back empty.
    #[default]
    ShortPage,

    /// Stop only when a page comes back empty
    EmptyPage,

    /// Stop when a response field has a specific value (or a page is empty)
    Field {
        /// Dot path into the response body, e.g. `data.clients.0.hasMore`
        path: String,
        /// Value that ends pagination
        value: JsonValue,
    },
}

impl StopCondition {
    /// Create a field-based stop condition
    pub fn field(path: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self::Field {
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Result of checking a stop condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopResult {
    /// Continue pagination
    Continue,
    /// Stop pagination
    Stop,
}

impl StopResult {
    /// Check if we should continue
    pub fn should_continue(&self) -> bool {
        matches!(self, Self::Continue)
    }

    /// Check if we should stop
    pub fn should_stop(&self) -> bool {
        matches!(self, Self::Stop)
    }
}

/// Position of one traversal
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaginationState {
    /// Current offset (offset strategy)
    pub offset: u64,
    /// Current cursor (cursor strategy)
    pub cursor: Option<String>,
    /// Requests issued so far, including a failed one
    pub requests: u32,
    /// Items received so far
    pub total_fetched: u64,
    /// Total reported by the server on the first page that carried one
    pub total_count: Option<u64>,
    /// Is pagination complete?
    pub done: bool,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one issued request
    pub fn record_request(&mut self) {
        self.requests += 1;
    }

    /// Mark pagination as complete
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Add offset
    pub fn add_offset(&mut self, amount: u64) {
        self.offset += amount;
    }

    /// Set cursor
    pub fn set_cursor(&mut self, cursor: String) {
        self.cursor = Some(cursor);
    }

    /// Add to total fetched
    pub fn add_fetched(&mut self, count: u64) {
        self.total_fetched += count;
    }

    /// Keep the first total count the server reports
    pub fn capture_total(&mut self, total: Option<u64>) {
        if self.total_count.is_none() {
            self.total_count = total;
        }
    }
}

/// Core trait for pagination strategies
///
/// The engine drives one loop for every strategy; a strategy only decides
/// which variables to send and whether another page follows.
pub trait Paginator: Send + Sync {
    /// Which strategy this is
    fn strategy(&self) -> Strategy;

    /// Items requested per page
    fn page_size(&self) -> u32;

    /// Pagination variables for the first request
    fn initial_variables(&self, state: &PaginationState) -> VariableMap;

    /// Decode the item collection node of one response
    ///
    /// `None` means the collection (or one of its ancestors below the root
    /// entity) was absent, which reads as an empty final page.
    fn decode_page(&self, collection: Option<&JsonValue>) -> Result<Page>;

    /// Update state from a decoded page and decide whether to continue
    fn process_page(
        &self,
        body: &JsonValue,
        page: &Page,
        state: &mut PaginationState,
    ) -> Result<NextPage>;
}

/// Check a stop condition against a response
pub fn check_stop_condition(
    condition: &StopCondition,
    body: &JsonValue,
    records_count: usize,
    page_size: u32,
) -> StopResult {
    let stop = match condition {
        StopCondition::ShortPage => records_count < page_size as usize,
        StopCondition::EmptyPage => records_count == 0,
        StopCondition::Field { path, value } => {
            records_count == 0 || extract_path_value(body, path).is_some_and(|v| v == value)
        }
    };

    if stop {
        StopResult::Stop
    } else {
        StopResult::Continue
    }
}

/// Follow a dot path (`a.b.0.c`) through objects and arrays
pub fn extract_path_value<'a>(value: &'a JsonValue, path: &str) -> Option<&'a JsonValue> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    if path.is_empty() {
        return Some(value);
    }

    let mut current = value;
    for part in path.split('.') {
        current = match current {
            JsonValue::Object(map) => map.get(part)?,
            JsonValue::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}
