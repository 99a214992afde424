//! Media Translations CLI
//!
//! Resolves the titles of a spreadsheet against TMDB and exports their
//! translations plus English reference metadata.

use clap::Parser;
use colored::Colorize;
use media_translations::cli::{args::Cli, commands::run};

#[tokio::main]
async fn main() {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    if let Err(e) = run::run(&cli).await {
        let err = anyhow::Error::new(e).context("Export run aborted");
        eprintln!("{} {:#}", "❌ Fatal error:".red().bold(), err);
        eprintln!("{:?}", err);
        std::process::exit(1);
    }
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("media_translations=debug")
    } else {
        EnvFilter::new("media_translations=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
