//! Feed pagination state machine.
//!
//! `FeedState` owns the accumulated record list and the page cursor.
//! It is pure: the client calls `begin_fetch` before dispatching an
//! HTTP request and `apply_page` when the response arrives. Advancing
//! the cursor is an explicit call from the scroll handler, followed by
//! an explicit fetch dispatch. There is no hidden reactive trigger.

use crate::models::UserRecord;

/// Number of records requested per page, fixed by the screen design.
pub const PAGE_SIZE: u32 = 10;

/// Per-fetch-cycle phase: `Idle -> Fetching -> Idle`.
///
/// There is no error phase. A failed fetch applies no transition, so
/// the state stays `Fetching` and the list stops growing for that
/// page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchPhase {
    #[default]
    Idle,
    Fetching,
}

/// Accumulated list plus pagination cursor for the user feed.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    records: Vec<UserRecord>,
    page: u32,
    phase: FetchPhase,
}

impl FeedState {
    /// Fresh state for a newly mounted screen: page 1, nothing loaded.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            page: 1,
            phase: FetchPhase::Idle,
        }
    }

    /// All records fetched so far, in arrival order across pages.
    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    /// Current page cursor. Starts at 1 and never decreases.
    pub fn page(&self) -> u32 {
        self.page
    }

    /// True from fetch dispatch until a response is applied.
    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Fetching
    }

    /// Mark a fetch for the current page as outstanding and return the
    /// page number to request.
    pub fn begin_fetch(&mut self) -> u32 {
        self.phase = FetchPhase::Fetching;
        self.page
    }

    /// Advance the cursor by one and return the new page. The caller
    /// is expected to dispatch a fetch for the returned page. No guard
    /// against an outstanding fetch: overlapping requests for distinct
    /// pages are allowed.
    pub fn advance_page(&mut self) -> u32 {
        self.page += 1;
        self.page
    }

    /// Append one page of results in order and clear the loading flag.
    ///
    /// Responses are applied in completion order. If the network
    /// delivers replies out of request order, a later page's records
    /// land first. There is no reorder buffer.
    pub fn apply_page(&mut self, records: impl IntoIterator<Item = UserRecord>) {
        self.records.extend(records);
        self.phase = FetchPhase::Idle;
    }
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}
