//! CLI module
//!
//! Command-line interface for running card searches.
//!
//! # Commands
//!
//! - `search` - Follow every result page of a query
//! - `first-page` - Fetch only the first result page
//!
//! Ctrl-C stops a run after the page in flight and prints what was
//! collected so far.

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
