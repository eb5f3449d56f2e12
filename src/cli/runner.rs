//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::FetchConfig;
use crate::error::{Error, Result};
use crate::fetch::{FetchOutcome, FetchSession, SessionReport};
use crate::http::HttpClient;
use crate::model::CollectedCard;
use crate::observer::{DebugCorner, HaltHandle, SessionObserver};
use crate::pagination::NoPaginator;
use crate::types::CardShape;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Number of debug slots the console observer keeps
const CONSOLE_SLOTS: usize = 5;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let config = self.build_config()?;
        let first_page_only = matches!(self.cli.command, Commands::FirstPage { .. });

        let client = Arc::new(HttpClient::with_config(config.http_client_config())?);
        let halt = HaltHandle::new();
        spawn_ctrl_c_listener(halt.clone());

        let mut session = FetchSession::from_config(client, &config)?
            .with_observer(Box::new(ConsoleObserver::new(halt)));
        if first_page_only {
            session = session.with_paginator(Arc::new(NoPaginator));
        }

        let report = session.run().await;
        self.write_report(&report)?;

        match report.outcome {
            FetchOutcome::Failed(e) => Err(e),
            _ => Ok(()),
        }
    }

    /// Merge the config file (if any) with command-line overrides
    fn build_config(&self) -> Result<FetchConfig> {
        let mut config = match &self.cli.config {
            Some(path) => FetchConfig::from_file(path)?,
            None => FetchConfig::default(),
        };

        match &self.cli.command {
            Commands::Search {
                query,
                max_pages,
                names_only,
                filter_rarity,
            } => {
                if let Some(query) = query {
                    config.query.clone_from(query);
                }
                if max_pages.is_some() {
                    config.max_pages = *max_pages;
                }
                if *names_only {
                    config.shape = CardShape::Names;
                }
                if *filter_rarity {
                    config.filter_rarity = true;
                }
            }
            Commands::FirstPage { query, names_only } => {
                if let Some(query) = query {
                    config.query.clone_from(query);
                }
                if *names_only {
                    config.shape = CardShape::Names;
                }
            }
        }

        if config.query.trim().is_empty() {
            return Err(Error::config(
                "no search query: pass one on the command line or set `query` in the config file",
            ));
        }
        config.validate()?;
        debug!("Resolved config: {:?}", config);
        Ok(config)
    }

    fn write_report(&self, report: &SessionReport) -> Result<()> {
        let rendered = render(self.cli.format, report)?;
        match &self.cli.output {
            Some(path) => write_file(path, &rendered),
            None => {
                println!("{rendered}");
                Ok(())
            }
        }
    }
}

/// Render a report in the requested format
pub(crate) fn render(format: OutputFormat, report: &SessionReport) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report.cards)?),
        OutputFormat::Names => Ok(card_names(&report.cards).join("\n")),
        OutputFormat::Pretty => {
            let mut out = format!(
                "{} cards from {} pages ({})\n",
                report.cards.len(),
                report.stats.pages_fetched,
                outcome_label(&report.outcome)
            );
            if let Some(total) = report.stats.total_cards {
                out.push_str(&format!("server total: {total}\n"));
            }
            for (i, name) in card_names(&report.cards).iter().enumerate() {
                out.push_str(&format!("{:>5}  {name}\n", i + 1));
            }
            Ok(out.trim_end().to_string())
        }
    }
}

fn card_names(cards: &[CollectedCard]) -> Vec<&str> {
    cards.iter().map(|c| c.name().unwrap_or_default()).collect()
}

fn outcome_label(outcome: &FetchOutcome) -> &'static str {
    match outcome {
        FetchOutcome::Exhausted => "complete",
        FetchOutcome::PageLimit => "page limit reached",
        FetchOutcome::Halted => "halted",
        FetchOutcome::Failed(_) => "failed",
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents).map_err(Error::Io)?;
    info!("Wrote {}", path.display());
    Ok(())
}

/// Halt the session on Ctrl-C
fn spawn_ctrl_c_listener(halt: HaltHandle) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Ctrl-C received, stopping after the current page");
            halt.halt();
        }
    });
}

// ============================================================================
// Console Observer
// ============================================================================

/// Observer that keeps a debug corner, logs its lines, and halts on request
struct ConsoleObserver {
    corner: DebugCorner,
    halt: HaltHandle,
}

impl ConsoleObserver {
    fn new(halt: HaltHandle) -> Self {
        Self {
            corner: DebugCorner::new(CONSOLE_SLOTS),
            halt,
        }
    }
}

impl SessionObserver for ConsoleObserver {
    fn report_line(&mut self, slot: usize, text: &str) {
        self.corner.set_text(slot, text);
        debug!("[{}] {}", slot, text);
    }

    fn halt_requested(&self) -> bool {
        self.halt.is_halted()
    }

    fn on_halt(&mut self, cards: &[CollectedCard]) {
        info!("Search halted with {} cards:\n{}", cards.len(), self.corner.render());
        for card in cards {
            info!("{}", card.name().unwrap_or_default());
        }
    }
}
