//! Run command implementation.
//!
//! Loads the spreadsheet, resolves every row against TMDB and exports the
//! translations of each resolved unit.

use crate::cli::args::Cli;
use crate::core::exporter::Exporter;
use crate::core::pipeline::Pipeline;
use crate::models::config::{self, Config};
use crate::models::export::RunStats;
use crate::preflight;
use crate::services::spreadsheet;
use crate::services::tmdb::TmdbClient;
use crate::utils::fs;
use crate::Result;
use colored::Colorize;

/// Execute the whole export run.
pub async fn run(cli: &Cli) -> Result<RunStats> {
    let config = config::load_config(cli.config.as_deref())?;

    println!("{}", "🌐 Exporting translations...".bold().cyan());
    println!();
    print_config(&config);

    let catalog = TmdbClient::new(config.catalog.clone())?;

    if !cli.skip_preflight {
        println!("{}", "Running preflight checks...".bold());
        let results = preflight::run_preflight_checks(&config, &catalog).await?;
        preflight::print_results(&results);
        println!();

        if !preflight::all_passed(&results) {
            return Err(crate::Error::other(
                "Preflight checks failed. Fix the issues above and try again.",
            ));
        }
    }

    fs::ensure_directory(&config.output_dir)?;

    println!("{}", "📥 Downloading spreadsheet...".bold());
    let rows = spreadsheet::fetch_identifiers(&config.spreadsheet_url).await?;
    println!("  {} {}", "Rows:".bold(), rows.len());
    println!();

    let pipeline = Pipeline::new(
        &catalog,
        &config.resolver,
        &config.pacing,
        Exporter::new(&config.output_dir),
    );
    let stats = pipeline.run(&rows).await?;

    print_summary(&stats);
    Ok(stats)
}

fn print_config(config: &Config) {
    println!("  {} {}", "Output:".bold(), config.output_dir.display());
    println!(
        "  {} popularity >= {}, similarity >= {}",
        "Filters:".bold(),
        config.resolver.min_popularity,
        config.resolver.min_similarity
    );
    println!(
        "  {} {:?}",
        "Strategies:".bold(),
        config.resolver.strategies
    );
    println!();
}

/// Print the end-of-run summary.
pub fn print_summary(stats: &RunStats) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{}", "📋 Export Summary".bold().green());
    println!("  {} {}", "Rows:".bold(), stats.rows);
    println!(
        "  {} {} ({} movies, {} series, {} seasons, {} episodes)",
        "Processed:".bold(),
        stats.processed,
        stats.movies,
        stats.series,
        stats.seasons,
        stats.episodes
    );
    println!("  {} {}", "Translations:".bold(), stats.translations);
    println!("  {} {}", "Already exported:".bold(), stats.already_exported);
    println!("  {} {}", "Not found:".bold().yellow(), stats.not_found);
    println!("{}", "=".repeat(60));
}
