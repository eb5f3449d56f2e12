//! scry-pager CLI

use clap::Parser;
use scry_pager::cli::{Cli, Runner};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins for the modules it names; everything else logs at `level`
fn init_tracing(level: Level) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // stderr only: stdout carries the card list
    init_tracing(if cli.verbose { Level::DEBUG } else { Level::INFO });

    if let Err(e) = Runner::new(cli).run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
