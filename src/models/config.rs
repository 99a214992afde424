//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Spreadsheet the rows are read from.
pub const DEFAULT_SPREADSHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1Mj8CovNSu03bpWnIGp_JntDUhxw5KjLRhbfqr8VfsHk/export?format=csv";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CSV export URL of the spreadsheet.
    pub spreadsheet_url: String,
    /// Root directory exports are written under.
    pub output_dir: PathBuf,
    /// TMDB configuration.
    pub catalog: CatalogConfig,
    /// Resolution policy.
    pub resolver: ResolverConfig,
    /// Pauses between requests.
    pub pacing: PacingConfig,
}

/// TMDB configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// API key (v3) or Bearer token (v4).
    pub api_key: Option<String>,
    /// API root.
    pub base_url: String,
    /// Language for searches, details and credits.
    pub language: String,
    /// Connect and request timeout in seconds.
    pub timeout_secs: u64,
}

/// A resolution strategy, tried in the configured order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Treat the title as a collection name and return every part.
    Collection,
    /// Combined movie + TV search ranked by popularity and similarity.
    MultiSearch,
    /// Movie search first, then TV search, first hit wins.
    TypedSearch,
}

/// Resolution policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Search hits below this popularity are discarded.
    pub min_popularity: f64,
    /// Qualified rows discard hits whose title similarity is below this.
    pub min_similarity: f64,
    /// Strategies in the order they are tried.
    pub strategies: Vec<Strategy>,
}

/// Pauses between requests, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    /// After each spreadsheet row.
    pub row_delay_ms: u64,
    /// After each season of an expanded series.
    pub season_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_url: DEFAULT_SPREADSHEET_URL.to_string(),
            output_dir: PathBuf::from("translations"),
            catalog: CatalogConfig::default(),
            resolver: ResolverConfig::default(),
            pacing: PacingConfig::default(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.themoviedb.org/3".to_string(),
            language: "en-US".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_popularity: 5.0,
            min_similarity: 0.6,
            strategies: vec![Strategy::Collection, Strategy::MultiSearch],
        }
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            row_delay_ms: 300,
            season_delay_ms: 300,
        }
    }
}

impl PacingConfig {
    /// No pauses at all.
    pub fn none() -> Self {
        Self {
            row_delay_ms: 0,
            season_delay_ms: 0,
        }
    }
}

/// Get the configuration directory path.
fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("media_translations")
}

/// Default location of the config file.
pub fn default_config_path() -> PathBuf {
    dirs_config_path().join("config.toml")
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> crate::Result<Config> {
    toml::from_str(content).map_err(|e| crate::Error::InvalidConfig(e.to_string()))
}

/// Load configuration.
///
/// An explicit path must exist and parse. Without one, the default location
/// is tried and silently ignored when missing or unreadable. `TMDB_API_KEY`
/// overrides whatever key the file holds.
pub fn load_config(explicit: Option<&Path>) -> crate::Result<Config> {
    let mut config = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(crate::Error::PathNotFound(path.display().to_string()));
            }
            parse_config(&std::fs::read_to_string(path)?)?
        }
        None => {
            let path = default_config_path();
            std::fs::read_to_string(&path)
                .ok()
                .and_then(|content| match parse_config(&content) {
                    Ok(config) => Some(config),
                    Err(e) => {
                        tracing::warn!("Ignoring {}: {}", path.display(), e);
                        None
                    }
                })
                .unwrap_or_default()
        }
    };

    if let Ok(key) = std::env::var("TMDB_API_KEY") {
        if !key.trim().is_empty() {
            config.catalog.api_key = Some(key);
        }
    }

    Ok(config)
}
