//! Lazy page stream
//!
//! [`page_stream`] yields one [`SearchPage`] per request. The next request
//! is only issued when the consumer polls for the next page, so a consumer
//! that finishes with page N before polling again gets strictly in-order
//! processing with at most one request in flight.
//!
//! The stream is finite and not restartable. After an error it yields
//! nothing further.

use super::source::PageSource;
use crate::error::{Error, Result};
use crate::model::SearchResponse;
use crate::pagination::{PaginationState, Paginator};
use futures::stream::{self, BoxStream, StreamExt};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Boxed stream of search pages
pub type PageStream = BoxStream<'static, Result<SearchPage>>;

/// One fetched page and where pagination goes next
#[derive(Debug, Clone)]
pub struct SearchPage {
    /// Run progress including this page; `progress.pages` is its 1-based number
    pub progress: PaginationState,
    /// URL this page was fetched from
    pub url: String,
    /// Parsed page
    pub response: SearchResponse,
    /// URL of the following page, if the paginator found one
    pub next_url: Option<String>,
}

struct PageCursor {
    source: Arc<dyn PageSource>,
    paginator: Arc<dyn Paginator>,
    next_url: Option<String>,
    state: PaginationState,
    max_pages: Option<u32>,
}

/// Create a lazy stream of pages starting at `start_url`
///
/// `max_pages` caps the number of requests; `None` follows the server
/// until it reports no more pages.
pub fn page_stream(
    source: Arc<dyn PageSource>,
    paginator: Arc<dyn Paginator>,
    start_url: impl Into<String>,
    max_pages: Option<u32>,
) -> PageStream {
    let cursor = PageCursor {
        source,
        paginator,
        next_url: Some(start_url.into()),
        state: PaginationState::new(),
        max_pages,
    };

    stream::try_unfold(cursor, next_page).boxed()
}

async fn next_page(mut cursor: PageCursor) -> Result<Option<(SearchPage, PageCursor)>> {
    let Some(url) = cursor.next_url.take() else {
        return Ok(None);
    };

    if let Some(max) = cursor.max_pages {
        if cursor.state.pages >= max {
            debug!("Page limit {} reached, not fetching {}", max, url);
            return Ok(None);
        }
    }

    debug!("Fetching page {}: {}", cursor.state.pages + 1, url);
    let body = match cursor.source.fetch_page(&url).await {
        Ok(body) => body,
        Err(Error::Api { status: 404, code, .. })
            if code == "not_found" && cursor.state.pages == 0 =>
        {
            info!("No cards matched {}", url);
            return Ok(None);
        }
        Err(e) => return Err(e),
    };

    let response =
        SearchResponse::deserialize(&body).map_err(|e| Error::malformed(&url, e.to_string()))?;

    let next_url = cursor
        .paginator
        .next_page(&response, &mut cursor.state)
        .into_url();
    cursor.next_url.clone_from(&next_url);

    let page = SearchPage {
        progress: cursor.state,
        url,
        response,
        next_url,
    };
    Ok(Some((page, cursor)))
}
