//! Page sources
//!
//! A [`PageSource`] turns a URL into a parsed JSON page. The HTTP client is
//! the production source; tests substitute in-memory ones.

use crate::error::{Error, Result};
use crate::http::HttpClient;
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Something that can fetch one JSON page by URL
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch and parse the page at `url`
    async fn fetch_page(&self, url: &str) -> Result<Value>;
}

#[async_trait]
impl PageSource for HttpClient {
    async fn fetch_page(&self, url: &str) -> Result<Value> {
        let body = self.get_text(url).await?;
        debug!("Fetched {} bytes from {}", body.len(), url);

        serde_json::from_str(&body)
            .map_err(|e| Error::malformed(url, format!("body is not JSON: {e}")))
    }
}

/// Build the card search URL for `query` under `base_url`
///
/// The query is percent-encoded, so `set:snc OR set:khm` may be passed as is.
pub fn search_url(base_url: &str, query: &str) -> Result<String> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let mut url = base.join("cards/search")?;
    url.query_pairs_mut().append_pair("q", query);
    Ok(url.into())
}
