//! Preflight checks against an in-memory catalog.

mod common;

use common::FakeCatalog;
use media_translations::models::config::Config;
use media_translations::preflight::{all_passed, run_preflight_checks};
use tempfile::TempDir;

fn config(temp: &TempDir) -> Config {
    Config {
        output_dir: temp.path().join("translations"),
        ..Config::default()
    }
}

#[tokio::test]
async fn test_preflight_passes() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let catalog = FakeCatalog::new();

    let results = run_preflight_checks(&config, &catalog).await.unwrap();

    assert_eq!(results.len(), 2);
    assert!(all_passed(&results));
    assert!(config.output_dir.is_dir());
    assert_eq!(catalog.calls(), vec!["verify_credentials"]);
}

#[tokio::test]
async fn test_preflight_fails_when_catalog_unreachable() {
    let temp = TempDir::new().unwrap();
    let config = config(&temp);
    let mut catalog = FakeCatalog::new();
    catalog.offline = true;

    let results = run_preflight_checks(&config, &catalog).await.unwrap();

    assert!(!all_passed(&results));
    let failed: Vec<&str> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(failed, vec!["TMDB API"]);
    assert!(results[1].hint.is_some());
}
