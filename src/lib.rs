//! # scry-pager
//!
//! Paginated card search against the Scryfall API.
//!
//! ## Features
//!
//! - **Paginated search**: follows `has_more`/`next_page` until the result set is exhausted
//! - **Lazy page stream**: one request in flight, pages merged strictly in order
//! - **Normalization**: flattens raw cards and parses collector numbers
//! - **Rarity filter**: optional pass keeping the four regular rarities
//! - **Retries and rate limiting**: backoff on network failures, token bucket between requests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use scry_pager::{FetchConfig, FetchSession, HttpClient, Result};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = FetchConfig::new("set:snc");
//!     let client = Arc::new(HttpClient::with_config(config.http_client_config())?);
//!
//!     let cards = FetchSession::from_config(client, &config)?
//!         .run()
//!         .await
//!         .into_result()?;
//!
//!     println!("{} cards", cards.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  FetchSession::run()  →  SessionReport { cards, outcome }    │
//! └──────────────────────────────────────────────────────────────┘
//!        │                    │                      │
//! ┌──────┴──────┐   ┌─────────┴────────┐   ┌─────────┴─────────┐
//! │ page_stream │   │ CardAccumulator  │   │ SessionObserver   │
//! │ Paginator   │   │ normalize        │   │ DebugCorner       │
//! │ HttpClient  │   │ RarityFilter     │   │ HaltHandle        │
//! └─────────────┘   └──────────────────┘   └───────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Shared enums
pub mod types;

/// HTTP client with retry and rate limiting
pub mod http;

/// Pagination strategies
pub mod pagination;

/// Card payloads, normalization and the rarity filter
pub mod model;

/// Page stream, accumulator and fetch session
pub mod fetch;

/// Progress observers and the debug corner
pub mod observer;

/// Fetch configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::FetchConfig;
pub use error::{Error, Result};
pub use fetch::{CardAccumulator, FetchOutcome, FetchSession, PageSource, SessionReport};
pub use http::HttpClient;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
