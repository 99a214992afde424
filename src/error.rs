//! Error types for the translation exporter.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the translation exporter.
#[derive(Error, Debug)]
pub enum Error {
    // Preflight errors
    #[error("TMDB API key not configured. Set TMDB_API_KEY environment variable")]
    CatalogApiKeyMissing,

    #[error("TMDB API key invalid")]
    CatalogApiKeyInvalid,

    // Catalog errors
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Catalog returned HTTP {status} for {path}")]
    CatalogStatus { status: u16, path: String },

    // Input errors
    #[error("Failed to load spreadsheet: {0}")]
    SpreadsheetLoad(String),

    #[error("Invalid config file: {0}")]
    InvalidConfig(String),

    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // CSV errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }

    /// Whether this error came from talking to the catalog.
    ///
    /// These are swallowed by the resolver and walker and only logged.
    pub fn is_catalog_failure(&self) -> bool {
        matches!(
            self,
            Error::CatalogUnavailable(_) | Error::CatalogStatus { .. } | Error::Http(_)
        )
    }

    /// Short label used in log lines when a catalog call is swallowed.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::CatalogUnavailable(_) => "catalog_unavailable",
            Error::CatalogStatus { .. } => "catalog_status",
            Error::Http(_) | Error::Json(_) => "catalog_decode",
            _ => "other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_failure_classification() {
        assert!(Error::CatalogUnavailable("timeout".into()).is_catalog_failure());
        assert!(Error::CatalogStatus { status: 404, path: "movie/1".into() }.is_catalog_failure());
        assert!(!Error::other("boom").is_catalog_failure());
        assert_eq!(Error::CatalogUnavailable("x".into()).kind(), "catalog_unavailable");
    }
}
