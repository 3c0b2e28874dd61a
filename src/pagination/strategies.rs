//! Pagination strategy implementations
//!
//! Each strategy handles a specific pagination pattern.

use super::types::{
    check_stop_condition, NextPage, Page, PageInfo, PaginationState, Paginator, StopCondition,
    StopResult,
};
use crate::error::{Error, Result};
use crate::types::{JsonValue, Strategy, VariableMap};

/// Default number of items per page
pub const DEFAULT_PAGE_SIZE: u32 = 500;

// ============================================================================
// Offset Pagination
// ============================================================================

/// Offset-based pagination (`skip`/`take`)
///
/// The API gives no end-of-data signal, so termination is inferred from the
/// page itself through the configured `StopCondition`.
#[derive(Debug, Clone)]
pub struct OffsetPaginator {
    /// Variable name for the offset
    pub skip_param: String,
    /// Variable name for the page size
    pub take_param: String,
    /// Number of items per page
    pub page_size: u32,
    /// Stop condition
    pub stop_condition: StopCondition,
}

impl OffsetPaginator {
    /// Create an offset paginator with `skip`/`take` variables
    pub fn new(page_size: u32) -> Result<Self> {
        Self::with_params("skip", "take", page_size)
    }

    /// Create an offset paginator with custom variable names
    pub fn with_params(
        skip_param: impl Into<String>,
        take_param: impl Into<String>,
        page_size: u32,
    ) -> Result<Self> {
        Ok(Self {
            skip_param: skip_param.into(),
            take_param: take_param.into(),
            page_size: validate_page_size(page_size)?,
            stop_condition: StopCondition::default(),
        })
    }

    /// Set stop condition
    #[must_use]
    pub fn with_stop_condition(mut self, condition: StopCondition) -> Self {
        self.stop_condition = condition;
        self
    }

    fn variables_at(&self, offset: u64) -> VariableMap {
        let mut variables = VariableMap::new();
        variables.insert(self.skip_param.clone(), offset.into());
        variables.insert(self.take_param.clone(), self.page_size.into());
        variables
    }
}

impl Paginator for OffsetPaginator {
    fn strategy(&self) -> Strategy {
        Strategy::Offset
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn initial_variables(&self, state: &PaginationState) -> VariableMap {
        self.variables_at(state.offset)
    }

    fn decode_page(&self, collection: Option<&JsonValue>) -> Result<Page> {
        let items = match collection {
            None | Some(JsonValue::Null) => Vec::new(),
            Some(JsonValue::Array(items)) => items.clone(),
            Some(JsonValue::Object(_)) => {
                return Err(Error::decode(
                    Strategy::Offset.as_str(),
                    "expected a list of items, found an object (connection-shaped response?)",
                ))
            }
            Some(other) => {
                return Err(Error::decode(
                    Strategy::Offset.as_str(),
                    format!("expected a list of items, found {other}"),
                ))
            }
        };

        Ok(Page {
            items,
            ..Page::default()
        })
    }

    fn process_page(
        &self,
        body: &JsonValue,
        page: &Page,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.add_fetched(page.len() as u64);

        if check_stop_condition(&self.stop_condition, body, page.len(), self.page_size)
            == StopResult::Stop
        {
            state.mark_done();
            return Ok(NextPage::Done);
        }

        state.add_offset(u64::from(self.page_size));
        Ok(NextPage::with_variables(self.variables_at(state.offset)))
    }
}

// ============================================================================
// Cursor Pagination
// ============================================================================

/// Cursor-based pagination over a Relay connection (`first`/`after`)
///
/// Termination is declared by the server through `pageInfo.hasNextPage`.
/// `totalCount` is recorded for reporting only.
#[derive(Debug, Clone)]
pub struct CursorPaginator {
    /// Variable name for the page size
    pub first_param: String,
    /// Variable name for the continuation token
    pub after_param: String,
    /// Number of items per page
    pub page_size: u32,
}

impl CursorPaginator {
    /// Create a cursor paginator with `first`/`after` variables
    pub fn new(page_size: u32) -> Result<Self> {
        Self::with_params("first", "after", page_size)
    }

    /// Create a cursor paginator with custom variable names
    pub fn with_params(
        first_param: impl Into<String>,
        after_param: impl Into<String>,
        page_size: u32,
    ) -> Result<Self> {
        Ok(Self {
            first_param: first_param.into(),
            after_param: after_param.into(),
            page_size: validate_page_size(page_size)?,
        })
    }

    fn variables_after(&self, cursor: Option<&str>) -> VariableMap {
        let mut variables = VariableMap::new();
        variables.insert(self.first_param.clone(), self.page_size.into());
        variables.insert(
            self.after_param.clone(),
            cursor.map_or(JsonValue::Null, |c| JsonValue::String(c.to_string())),
        );
        variables
    }
}

impl Paginator for CursorPaginator {
    fn strategy(&self) -> Strategy {
        Strategy::Cursor
    }

    fn page_size(&self) -> u32 {
        self.page_size
    }

    fn initial_variables(&self, state: &PaginationState) -> VariableMap {
        self.variables_after(state.cursor.as_deref())
    }

    fn decode_page(&self, collection: Option<&JsonValue>) -> Result<Page> {
        let connection = match collection {
            None | Some(JsonValue::Null) => return Ok(Page::default()),
            Some(JsonValue::Object(map)) => map,
            Some(JsonValue::Array(_)) => {
                return Err(cursor_error(
                    "expected a connection object with edges, found a list",
                ))
            }
            Some(other) => {
                return Err(cursor_error(format!(
                    "expected a connection object, found {other}"
                )))
            }
        };

        let edges = connection
            .get("edges")
            .and_then(JsonValue::as_array)
            .ok_or_else(|| cursor_error("connection has no edges list"))?;

        let items = edges
            .iter()
            .enumerate()
            .map(|(i, edge)| {
                edge.get("node")
                    .cloned()
                    .ok_or_else(|| cursor_error(format!("edge {i} has no node")))
            })
            .collect::<Result<Vec<_>>>()?;

        let page_info = match connection.get("pageInfo") {
            None | Some(JsonValue::Null) => PageInfo::default(),
            Some(info) => decode_page_info(info)?,
        };

        let total_count = match connection.get("totalCount") {
            None | Some(JsonValue::Null) => None,
            Some(total) => Some(
                total
                    .as_u64()
                    .ok_or_else(|| cursor_error(format!("totalCount is not a count: {total}")))?,
            ),
        };

        Ok(Page {
            items,
            envelope: None,
            page_info: Some(page_info),
            total_count,
        })
    }

    fn process_page(
        &self,
        _body: &JsonValue,
        page: &Page,
        state: &mut PaginationState,
    ) -> Result<NextPage> {
        state.add_fetched(page.len() as u64);
        state.capture_total(page.total_count);

        let info = page.page_info.clone().unwrap_or_default();
        if !info.has_next_page {
            state.mark_done();
            return Ok(NextPage::Done);
        }

        let cursor = info.end_cursor.ok_or_else(|| {
            Error::pagination("server reported hasNextPage without an endCursor")
        })?;
        let variables = self.variables_after(Some(&cursor));
        state.set_cursor(cursor);
        Ok(NextPage::with_variables(variables))
    }
}

fn decode_page_info(info: &JsonValue) -> Result<PageInfo> {
    let has_next_page = match info.get("hasNextPage") {
        None | Some(JsonValue::Null) => false,
        Some(JsonValue::Bool(b)) => *b,
        Some(other) => {
            return Err(cursor_error(format!(
                "pageInfo.hasNextPage is not a boolean: {other}"
            )))
        }
    };

    let end_cursor = match info.get("endCursor") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::String(s)) => Some(s.clone()),
        Some(other) => {
            return Err(cursor_error(format!(
                "pageInfo.endCursor is not a string: {other}"
            )))
        }
    };

    Ok(PageInfo {
        has_next_page,
        end_cursor,
    })
}

fn cursor_error(message: impl Into<String>) -> Error {
    Error::decode(Strategy::Cursor.as_str(), message)
}

fn validate_page_size(page_size: u32) -> Result<u32> {
    if page_size == 0 {
        return Err(Error::invalid_value("page_size", "must be at least 1"));
    }
    Ok(page_size)
}
