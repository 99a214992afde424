//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// Media Translations - Export TMDB translations for the titles in a spreadsheet
#[derive(Parser, Debug)]
#[command(name = "media-translations")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Skip preflight checks
    #[arg(long)]
    pub skip_preflight: bool,

    /// Config file (defaults to <config dir>/media_translations/config.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
