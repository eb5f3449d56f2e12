//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginated Scryfall card search
#[derive(Parser, Debug)]
#[command(name = "scry-pager")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fetch configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Write output to this file instead of stdout
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and follow every result page
    Search {
        /// Search query, e.g. "set:snc" (overrides the config file)
        query: Option<String>,

        /// Stop after this many pages
        #[arg(long)]
        max_pages: Option<u32>,

        /// Collect card names only
        #[arg(long)]
        names_only: bool,

        /// Keep only common, uncommon, rare and mythic cards
        #[arg(long)]
        filter_rarity: bool,
    },

    /// Fetch the first result page only
    FirstPage {
        /// Search query (overrides the config file)
        query: Option<String>,

        /// Collect card names only
        #[arg(long)]
        names_only: bool,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON array of collected cards
    Json,
    /// Summary plus one line per card
    Pretty,
    /// One card name per line
    Names,
}
