//! Paginated card fetching
//!
//! # Overview
//!
//! - [`PageSource`] fetches one JSON page by URL (implemented by [`crate::http::HttpClient`])
//! - [`page_stream`] turns a start URL into a lazy, finite stream of pages
//! - [`CardAccumulator`] merges each page's records into one ordered list
//! - [`FetchSession`] drives the stream into the accumulator for one run
//!
//! ```rust,ignore
//! use scry_pager::{FetchConfig, FetchSession, HttpClient};
//! use std::sync::Arc;
//!
//! let config = FetchConfig::new("set:snc");
//! let client = Arc::new(HttpClient::with_config(config.http_client_config())?);
//! let report = FetchSession::from_config(client, &config)?.run().await;
//! println!("{} cards", report.cards.len());
//! ```

mod accumulator;
mod session;
mod source;
mod stream;

pub use accumulator::CardAccumulator;
pub use session::{
    FetchOutcome, FetchSession, SessionReport, SessionStats, SLOT_CARDS, SLOT_LAST_URL,
    SLOT_PAGES,
};
pub use source::{search_url, PageSource};
pub use stream::{page_stream, PageStream, SearchPage};
