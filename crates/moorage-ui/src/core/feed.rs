//! Dashboard feed state machine.
//!
//! # Design
//! - The page-level entity list is only ever appended to; a re-fetch of the
//!   first page replaces it wholesale.
//! - Exactly one fetch may be outstanding: `Loading` guards the initial
//!   request and `LoadingMore` guards incremental ones, so the load-more
//!   control stays disabled while a request is in flight.

use moorage_api_models::ContentSummary;

/// Number of entities requested per page.
pub const PAGE_INCREMENT: usize = 100;

/// Fetch lifecycle of the deals feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FeedPhase {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Initial page request in flight.
    Loading,
    /// At rest with whatever has been fetched so far.
    Loaded,
    /// Incremental page request in flight.
    LoadingMore,
}

/// Page-level state for the deals dashboard.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DealsFeed {
    /// Current fetch phase.
    pub phase: FeedPhase,
    /// Entities fetched so far, in fetch order.
    pub entities: Vec<ContentSummary>,
    /// Offset of the most recent completed fetch.
    pub offset: usize,
    /// Page size used for every fetch.
    pub limit: usize,
}

impl DealsFeed {
    /// Feed ready for its initial fetch.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: FeedPhase::Idle,
            entities: Vec::new(),
            offset: 0,
            limit: PAGE_INCREMENT,
        }
    }

    /// Move into `Loading` for the initial fetch. Returns false when a
    /// fetch already happened or is in flight.
    pub fn begin_initial(&mut self) -> bool {
        if self.phase != FeedPhase::Idle {
            return false;
        }
        self.phase = FeedPhase::Loading;
        true
    }

    /// Store the initial page and come to rest.
    pub fn apply_initial(&mut self, page: Vec<ContentSummary>) {
        self.entities = page;
        self.phase = FeedPhase::Loaded;
    }

    /// Initial fetch failed: stay with an empty list, at rest.
    pub fn fail_initial(&mut self) {
        self.phase = FeedPhase::Loaded;
    }

    /// Whether another page may exist: the feed is at rest and the last
    /// fetch came back full.
    #[must_use]
    pub fn can_load_more(&self) -> bool {
        self.phase == FeedPhase::Loaded && self.entities.len() == self.offset + self.limit
    }

    /// Move into `LoadingMore`, returning the (offset, limit) to request.
    /// `None` when no further page may exist or a fetch is in flight.
    pub fn begin_load_more(&mut self) -> Option<(usize, usize)> {
        if !self.can_load_more() {
            return None;
        }
        self.phase = FeedPhase::LoadingMore;
        Some((self.offset + self.limit, self.limit))
    }

    /// Append an incremental page. An empty page is a no-op beyond coming
    /// back to rest: fewer rows than requested signals end-of-data.
    pub fn apply_more(&mut self, page: Vec<ContentSummary>) {
        if self.phase != FeedPhase::LoadingMore {
            return;
        }
        if !page.is_empty() {
            self.offset += self.limit;
            self.entities.extend(page);
        }
        self.phase = FeedPhase::Loaded;
    }

    /// Incremental fetch failed: no state change beyond coming to rest.
    pub fn fail_more(&mut self) {
        if self.phase == FeedPhase::LoadingMore {
            self.phase = FeedPhase::Loaded;
        }
    }

    /// Whether any fetch is currently in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.phase, FeedPhase::Loading | FeedPhase::LoadingMore)
    }
}

/// Query path for one page of the deals listing.
#[must_use]
pub fn build_deals_path(offset: usize, limit: usize) -> String {
    format!("/content/deals?offset={offset}&limit={limit}")
}

/// Path for one content item's status payload.
#[must_use]
pub fn build_status_path(id: u64) -> String {
    format!("/content/status/{id}")
}
