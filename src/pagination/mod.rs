//! Pagination module
//!
//! Supports: Offset (`skip`/`take`) and Cursor (`first`/`after` connections)
//!
//! # Overview
//!
//! Both strategies share one abstract shape. A strategy builds the paging
//! variables for each request, decodes the item collection of a response,
//! and decides from that page whether another request follows. The loop
//! that drives them lives in the engine module.

mod strategies;
mod types;

pub use strategies::{CursorPaginator, OffsetPaginator, DEFAULT_PAGE_SIZE};
pub use types::{
    check_stop_condition, extract_path_value, NextPage, Page, PageInfo, PaginationState,
    Paginator, StopCondition, StopResult,
};
