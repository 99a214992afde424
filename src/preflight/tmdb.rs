//! TMDB API preflight check.

use super::CheckResult;
use crate::services::catalog::Catalog;

/// Check if TMDB API is accessible.
pub async fn check<C: Catalog + ?Sized>(catalog: &C) -> CheckResult {
    match catalog.verify_credentials().await {
        Ok(true) => CheckResult::ok("TMDB API", "connected"),
        Ok(false) => CheckResult::fail(
            "TMDB API",
            "invalid API key",
            "Check your TMDB_API_KEY environment variable",
        ),
        Err(_) => CheckResult::fail(
            "TMDB API",
            "connection failed",
            "Check your network connection",
        ),
    }
}
