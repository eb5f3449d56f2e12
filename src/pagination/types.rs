//! Pagination decisions and run progress

use crate::model::SearchResponse;

/// Where a run goes after a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this URL verbatim
    Continue { url: String },
    Done,
}

impl NextPage {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Continue { url: url.into() }
    }

    pub fn into_url(self) -> Option<String> {
        match self {
            Self::Continue { url } => Some(url),
            Self::Done => None,
        }
    }
}

/// Progress of one pagination run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Pages seen so far
    pub pages: u32,
    /// Records across those pages, before any filtering
    pub records: u64,
    /// Set once the paginator finds no further page
    pub done: bool,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a page holding `records` records
    pub fn record_page(&mut self, records: usize) {
        self.pages += 1;
        self.records += records as u64;
    }

    pub fn finish(&mut self) {
        self.done = true;
    }
}

/// Decides, from a parsed page, whether the run continues
pub trait Paginator: Send + Sync {
    /// Called once per page, in order. Implementations update `state`.
    fn next_page(&self, page: &SearchResponse, state: &mut PaginationState) -> NextPage;
}
