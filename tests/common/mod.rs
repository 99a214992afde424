//! In-memory catalog shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use media_translations::models::catalog::{
    CastEntry, Collection, CollectionSummary, EpisodeSummary, SearchResult, SeasonInfo,
    SeasonSummary, Translation, TvInfo, UnitCredits, UnitDetails,
};
use media_translations::models::media::{CatalogTarget, MediaKind};
use media_translations::services::catalog::Catalog;
use media_translations::{Error, Result};
use std::collections::HashMap;
use std::sync::Mutex;

/// Catalog backed by hash maps. Every call is recorded in `calls`.
#[derive(Default)]
pub struct FakeCatalog {
    pub multi: HashMap<String, Vec<SearchResult>>,
    pub movies: HashMap<String, Vec<SearchResult>>,
    pub shows: HashMap<String, Vec<SearchResult>>,
    pub collections: HashMap<String, Vec<CollectionSummary>>,
    pub collection_parts: HashMap<u64, Collection>,
    /// Series id → season numbers as listed by the catalog.
    pub seasons: HashMap<u64, Vec<u32>>,
    /// (series id, season) → episode numbers.
    pub episodes: HashMap<(u64, u32), Vec<u32>>,
    /// Target path → translations.
    pub translations: HashMap<String, Vec<Translation>>,
    /// Every call fails with `CatalogUnavailable`.
    pub offline: bool,
    /// Only translations calls fail.
    pub translations_offline: bool,
    pub calls: Mutex<Vec<String>>,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.offline {
            return Err(Error::CatalogUnavailable("operation timed out".to_string()));
        }
        Ok(())
    }

    /// Snapshot of recorded calls.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of recorded calls starting with `prefix`.
    pub fn count(&self, prefix: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(prefix)).count()
    }

    pub fn with_multi(mut self, query: &str, hits: Vec<SearchResult>) -> Self {
        self.multi.insert(query.to_string(), hits);
        self
    }

    pub fn with_season(mut self, series_id: u64, season: u32, episodes: u32) -> Self {
        self.seasons.entry(series_id).or_default().push(season);
        self.episodes
            .insert((series_id, season), (1..=episodes).collect());
        self
    }

    pub fn with_translations(mut self, path: &str, translations: Vec<Translation>) -> Self {
        self.translations.insert(path.to_string(), translations);
        self
    }
}

pub fn movie(id: u64, title: &str, release_date: &str, popularity: f64) -> SearchResult {
    SearchResult {
        id,
        kind: Some(MediaKind::Movie),
        title: title.to_string(),
        original_title: title.to_string(),
        release_date: release_date.to_string(),
        popularity,
    }
}

pub fn show(id: u64, name: &str, first_air_date: &str, popularity: f64) -> SearchResult {
    SearchResult {
        kind: Some(MediaKind::Tv),
        ..movie(id, name, first_air_date, popularity)
    }
}

pub fn person(id: u64, name: &str, popularity: f64) -> SearchResult {
    SearchResult {
        kind: None,
        ..movie(id, name, "", popularity)
    }
}

pub fn translation(language: &str, country: &str, title: &str) -> Translation {
    Translation {
        language: language.to_string(),
        country: country.to_string(),
        language_name: language.to_uppercase(),
        title: Some(title.to_string()),
        name: Some(title.to_string()),
        overview: Some(format!("Overview in {}", language)),
    }
}

#[async_trait]
impl Catalog for FakeCatalog {
    async fn search_movie(&self, title: &str, year: Option<&str>) -> Result<Vec<SearchResult>> {
        self.record(format!("search_movie:{}:{}", title, year.unwrap_or("")))?;
        Ok(self.movies.get(title).cloned().unwrap_or_default())
    }

    async fn search_tv(&self, title: &str, year: Option<&str>) -> Result<Vec<SearchResult>> {
        self.record(format!("search_tv:{}:{}", title, year.unwrap_or("")))?;
        Ok(self.shows.get(title).cloned().unwrap_or_default())
    }

    async fn search_multi(&self, title: &str) -> Result<Vec<SearchResult>> {
        self.record(format!("search_multi:{}", title))?;
        Ok(self.multi.get(title).cloned().unwrap_or_default())
    }

    async fn search_collection(&self, title: &str) -> Result<Vec<CollectionSummary>> {
        self.record(format!("search_collection:{}", title))?;
        Ok(self.collections.get(title).cloned().unwrap_or_default())
    }

    async fn get_collection(&self, id: u64) -> Result<Collection> {
        self.record(format!("get_collection:{}", id))?;
        self.collection_parts
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::CatalogStatus {
                status: 404,
                path: format!("collection/{}", id),
            })
    }

    async fn get_details(&self, target: &CatalogTarget) -> Result<UnitDetails> {
        self.record(format!("details:{}", target.path()))?;
        Ok(UnitDetails {
            id: Some(target.id),
            kind: Some(target.kind.to_string()),
            title: Some(format!("Title of {}", target.path())),
            season_number: target.season,
            episode_number: target.episode,
            ..Default::default()
        })
    }

    async fn get_credits(&self, target: &CatalogTarget) -> Result<UnitCredits> {
        self.record(format!("credits:{}", target.path()))?;
        Ok(UnitCredits {
            cast: vec![CastEntry {
                id: 31,
                name: "Tom Hanks".to_string(),
                character: Some("Woody".to_string()),
                order: 0,
            }],
            directors: Vec::new(),
        })
    }

    async fn get_tv_info(&self, id: u64) -> Result<TvInfo> {
        self.record(format!("tv_info:{}", id))?;
        let seasons = self.seasons.get(&id).ok_or_else(|| Error::CatalogStatus {
            status: 404,
            path: format!("tv/{}", id),
        })?;
        Ok(TvInfo {
            id,
            seasons: seasons
                .iter()
                .map(|&n| SeasonSummary {
                    season_number: n,
                    episode_count: self
                        .episodes
                        .get(&(id, n))
                        .map(|e| e.len() as u32)
                        .unwrap_or(0),
                })
                .collect(),
        })
    }

    async fn get_season_info(&self, id: u64, season: u32) -> Result<SeasonInfo> {
        self.record(format!("season_info:{}:{}", id, season))?;
        let episodes = self
            .episodes
            .get(&(id, season))
            .ok_or_else(|| Error::CatalogStatus {
                status: 404,
                path: format!("tv/{}/season/{}", id, season),
            })?;
        Ok(SeasonInfo {
            season_number: season,
            episodes: episodes
                .iter()
                .map(|&n| EpisodeSummary {
                    episode_number: n,
                    name: format!("Episode {}", n),
                })
                .collect(),
        })
    }

    async fn get_translations(&self, target: &CatalogTarget) -> Result<Vec<Translation>> {
        self.record(format!("translations:{}", target.path()))?;
        if self.translations_offline {
            return Err(Error::CatalogUnavailable("connection reset".to_string()));
        }
        Ok(self.translations.get(&target.path()).cloned().unwrap_or_default())
    }

    async fn verify_credentials(&self) -> Result<bool> {
        self.record("verify_credentials".to_string())?;
        Ok(true)
    }
}
