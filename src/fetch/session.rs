//! Fetch session
//!
//! A [`FetchSession`] owns everything one pagination run needs: the page
//! source, the accumulator, run statistics and the observer. [`FetchSession::run`]
//! consumes the session, so a run cannot be restarted.

use super::accumulator::CardAccumulator;
use super::source::PageSource;
use super::stream::{page_stream, SearchPage};
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::model::CollectedCard;
use crate::observer::{NullObserver, SessionObserver};
use crate::pagination::{HasMorePaginator, PaginationState, Paginator};
use chrono::{DateTime, Utc};
use futures::StreamExt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Debug slot showing the page count
pub const SLOT_PAGES: usize = 0;
/// Debug slot showing the running card total
pub const SLOT_CARDS: usize = 1;
/// Debug slot showing the last fetched URL
pub const SLOT_LAST_URL: usize = 2;

/// How a run ended
#[derive(Debug)]
pub enum FetchOutcome {
    /// The server reported no further pages
    Exhausted,
    /// The page cap was reached while more pages existed
    PageLimit,
    /// The observer asked the run to stop
    Halted,
    /// A page could not be fetched or parsed
    Failed(Error),
}

impl FetchOutcome {
    /// Whether the run ended without an error
    pub fn is_success(&self) -> bool {
        !matches!(self, Self::Failed(_))
    }
}

/// Statistics from one run
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    /// Pages fetched and merged
    pub pages_fetched: u32,
    /// Records seen across all pages, before filtering
    pub records_seen: u64,
    /// Total matches the server reported on the first page
    pub total_cards: Option<u64>,
    /// When the run started
    pub started_at: Option<DateTime<Utc>>,
    /// When the last page arrived
    pub last_page_at: Option<DateTime<Utc>>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Result of a finished run
#[derive(Debug)]
pub struct SessionReport {
    /// Collected cards in page order
    pub cards: Vec<CollectedCard>,
    /// Run statistics
    pub stats: SessionStats,
    /// How the run ended
    pub outcome: FetchOutcome,
}

impl SessionReport {
    /// Cards collected, or the error that stopped the run
    pub fn into_result(self) -> Result<Vec<CollectedCard>> {
        match self.outcome {
            FetchOutcome::Failed(e) => Err(e),
            _ => Ok(self.cards),
        }
    }
}

/// One pagination run
pub struct FetchSession {
    source: Arc<dyn PageSource>,
    paginator: Arc<dyn Paginator>,
    start_url: String,
    max_pages: Option<u32>,
    accumulator: CardAccumulator,
    observer: Box<dyn SessionObserver>,
    progress: PaginationState,
    stats: SessionStats,
}

impl FetchSession {
    /// Create a session that follows `has_more`/`next_page` from `start_url`
    pub fn new(source: Arc<dyn PageSource>, start_url: impl Into<String>) -> Self {
        Self {
            source,
            paginator: Arc::new(HasMorePaginator::default()),
            start_url: start_url.into(),
            max_pages: None,
            accumulator: CardAccumulator::default(),
            observer: Box::new(NullObserver),
            progress: PaginationState::new(),
            stats: SessionStats::default(),
        }
    }

    /// Create a session from a validated config
    pub fn from_config(source: Arc<dyn PageSource>, config: &FetchConfig) -> Result<Self> {
        config.validate()?;
        let accumulator =
            CardAccumulator::new(config.shape).with_rarity_filter(config.filter_rarity);

        Ok(Self::new(source, config.search_url()?)
            .with_max_pages(config.max_pages)
            .with_accumulator(accumulator))
    }

    /// Set the pagination strategy
    #[must_use]
    pub fn with_paginator(mut self, paginator: Arc<dyn Paginator>) -> Self {
        self.paginator = paginator;
        self
    }

    /// Cap the number of pages requested
    #[must_use]
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Set the accumulator cards are merged into
    #[must_use]
    pub fn with_accumulator(mut self, accumulator: CardAccumulator) -> Self {
        self.accumulator = accumulator;
        self
    }

    /// Set the observer progress is reported to
    #[must_use]
    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// URL of the first page
    pub fn start_url(&self) -> &str {
        &self.start_url
    }

    /// Run pagination to completion
    ///
    /// Each page is merged before the next one is requested. A failure stops
    /// the run but keeps everything merged so far.
    pub async fn run(mut self) -> SessionReport {
        let start = Instant::now();
        self.stats.started_at = Some(Utc::now());
        info!("Starting card search: {}", self.start_url);

        let mut pages = page_stream(
            Arc::clone(&self.source),
            Arc::clone(&self.paginator),
            self.start_url.clone(),
            self.max_pages,
        );

        let outcome = loop {
            // A halt that lands with the last page already merged changes nothing
            if !self.progress.done && self.observer.halt_requested() {
                warn!(
                    "Halt requested after {} pages, {} cards collected",
                    self.stats.pages_fetched,
                    self.accumulator.len()
                );
                self.observer.on_halt(self.accumulator.cards());
                break FetchOutcome::Halted;
            }

            match pages.next().await {
                Some(Ok(page)) => self.merge_page(page),
                Some(Err(e)) => {
                    error!("Page {} failed: {}", self.stats.pages_fetched + 1, e);
                    break FetchOutcome::Failed(e);
                }
                // Zero pages means the first page matched nothing
                None if self.progress.done || self.progress.pages == 0 => {
                    break FetchOutcome::Exhausted
                }
                None => break FetchOutcome::PageLimit,
            }
        };

        self.stats.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Finished card search: {} cards in {} pages ({:?})",
            self.accumulator.len(),
            self.stats.pages_fetched,
            outcome
        );

        SessionReport {
            cards: self.accumulator.into_cards(),
            stats: self.stats,
            outcome,
        }
    }

    fn merge_page(&mut self, page: SearchPage) {
        let records = &page.response.data;
        let appended = self.accumulator.append_page(records);

        self.progress = page.progress;
        self.stats.pages_fetched = page.progress.pages;
        self.stats.records_seen = page.progress.records;
        self.stats.last_page_at = Some(Utc::now());
        if self.stats.total_cards.is_none() {
            self.stats.total_cards = page.response.total_cards;
        }

        if let Some(warnings) = &page.response.warnings {
            for warning in warnings {
                warn!("Search warning: {}", warning);
            }
        }

        debug!(
            "Page {}: {} records, {} kept, {} total",
            page.progress.pages,
            records.len(),
            appended,
            self.accumulator.len()
        );

        self.observer
            .report_line(SLOT_PAGES, &format!("pages: {}", self.stats.pages_fetched));
        self.observer
            .report_line(SLOT_CARDS, &format!("cards: {}", self.accumulator.len()));
        self.observer
            .report_line(SLOT_LAST_URL, &format!("last: {}", page.url));
    }
}

impl std::fmt::Debug for FetchSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchSession")
            .field("start_url", &self.start_url)
            .field("max_pages", &self.max_pages)
            .field("accumulator", &self.accumulator)
            .field("progress", &self.progress)
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}
