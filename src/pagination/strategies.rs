//! Pagination strategies

use super::types::{NextPage, PaginationState, Paginator};
use crate::model::SearchResponse;

/// Follows `next_page` while `has_more` is true
///
/// ```text
/// { "has_more": true, "next_page": "https://api.scryfall.com/cards/search?page=2&q=..." }
/// ```
///
/// Stops on `has_more: false`, or when `next_page` is absent or empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct HasMorePaginator;

impl Paginator for HasMorePaginator {
    fn next_page(&self, page: &SearchResponse, state: &mut PaginationState) -> NextPage {
        state.record_page(page.data.len());

        match page.continuation() {
            Some(url) => NextPage::url(url),
            None => {
                state.finish();
                NextPage::Done
            }
        }
    }
}

/// First page only, whatever the server says
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPaginator;

impl Paginator for NoPaginator {
    fn next_page(&self, page: &SearchResponse, state: &mut PaginationState) -> NextPage {
        state.record_page(page.data.len());
        state.finish();
        NextPage::Done
    }
}
