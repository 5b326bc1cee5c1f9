//! Pagination seam
//!
//! The sync engine drives every stream through a `Paginator` so that
//! page-following stays an engine concern; streams never re-request on
//! their own. The Socket.dev endpoints consumed here answer everything in
//! one response, so the only strategy is `SinglePage`, but the loop shape
//! is generic.

use crate::types::{JsonValue, StringMap};

/// Result of the next page computation
#[derive(Debug, Clone)]
pub enum NextPage {
    /// More pages available with these parameters
    Continue {
        /// Query parameters to add/replace
        query_params: StringMap,
    },
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

/// Tracks pagination progress during a stream cycle
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    /// Pages fetched so far
    pub pages: u32,
    /// Total records fetched so far
    pub total_fetched: u64,
}

impl PaginationState {
    /// Create a new pagination state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a fetched page
    pub fn add_page(&mut self, records: usize) {
        self.pages += 1;
        self.total_fetched += records as u64;
    }
}

/// Core trait for pagination strategies
pub trait Paginator: Send + Sync {
    /// Query parameters for the first request
    fn initial_params(&self) -> StringMap;

    /// Inspect a response and decide whether another page follows
    fn process_response(
        &self,
        body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage;
}

/// Single-request strategy: the whole stream arrives in one response
#[derive(Debug, Clone, Copy, Default)]
pub struct SinglePage;

impl Paginator for SinglePage {
    fn initial_params(&self) -> StringMap {
        StringMap::new()
    }

    fn process_response(
        &self,
        _body: &JsonValue,
        records_count: usize,
        state: &mut PaginationState,
    ) -> NextPage {
        state.add_page(records_count);
        NextPage::Done
    }
}
