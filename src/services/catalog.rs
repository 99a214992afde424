//! Metadata catalog contract.
//!
//! The resolver and walker only talk to the catalog through this trait, so
//! tests can swap in an in-memory catalog. Every call fails independently;
//! callers decide whether a failure means "no data".

use crate::models::catalog::{
    Collection, CollectionSummary, SearchResult, SeasonInfo, Translation, TvInfo, UnitCredits,
    UnitDetails,
};
use crate::models::media::CatalogTarget;
use crate::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Catalog: Send + Sync {
    /// Search movies, optionally pinned to a primary release year.
    async fn search_movie(&self, title: &str, year: Option<&str>) -> Result<Vec<SearchResult>>;

    /// Search TV series, optionally pinned to a first-air year.
    async fn search_tv(&self, title: &str, year: Option<&str>) -> Result<Vec<SearchResult>>;

    /// Combined movie + TV (+ people) search.
    async fn search_multi(&self, title: &str) -> Result<Vec<SearchResult>>;

    /// Search collections by name.
    async fn search_collection(&self, title: &str) -> Result<Vec<CollectionSummary>>;

    /// Fetch a collection with its member movies.
    async fn get_collection(&self, id: u64) -> Result<Collection>;

    /// English details of a movie, series, season or episode.
    async fn get_details(&self, target: &CatalogTarget) -> Result<UnitDetails>;

    /// Main cast and directors.
    async fn get_credits(&self, target: &CatalogTarget) -> Result<UnitCredits>;

    /// Season listing of a series.
    async fn get_tv_info(&self, id: u64) -> Result<TvInfo>;

    /// Episode listing of one season.
    async fn get_season_info(&self, id: u64, season: u32) -> Result<SeasonInfo>;

    /// Every localized translation.
    async fn get_translations(&self, target: &CatalogTarget) -> Result<Vec<Translation>>;

    /// Whether the configured credentials are accepted.
    async fn verify_credentials(&self) -> Result<bool>;
}
