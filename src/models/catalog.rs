//! Catalog records as consumed by the resolver and walker.
//!
//! These are normalized from the raw TMDB payloads in `services::tmdb` so that
//! the core never has to know whether a field was called `title` or `name`.

use super::media::MediaKind;
use serde::{Deserialize, Serialize};

/// One hit from a movie, TV or multi search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    pub id: u64,
    /// `None` for hits that are neither movie nor TV (people, etc.).
    pub kind: Option<MediaKind>,
    /// Localized (English) title or name.
    pub title: String,
    pub original_title: String,
    /// Release date or first air date.
    pub release_date: String,
    pub popularity: f64,
}

/// One hit from a collection search.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionSummary {
    pub id: u64,
    pub name: String,
    pub popularity: f64,
}

/// A collection with its member movies, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub id: u64,
    pub name: String,
    pub parts: Vec<SearchResult>,
}

/// Season listing of a series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TvInfo {
    pub id: u64,
    pub seasons: Vec<SeasonSummary>,
}

/// A season as listed on its series.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonSummary {
    pub season_number: u32,
    pub episode_count: u32,
}

/// Episode listing of a season.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeasonInfo {
    pub season_number: u32,
    pub episodes: Vec<EpisodeSummary>,
}

/// An episode as listed on its season.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeSummary {
    pub episode_number: u32,
    pub name: String,
}

/// One localized translation of a unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translation {
    /// ISO 639-1 language code.
    pub language: String,
    /// ISO 3166-1 country code.
    pub country: String,
    /// English name of the language.
    pub language_name: String,
    /// Translated `title` (movies).
    pub title: Option<String>,
    /// Translated `name` (series, seasons, episodes).
    pub name: Option<String>,
    pub overview: Option<String>,
}

/// English-language details of a unit.
///
/// Fields that do not apply to the unit kind stay `None` and are left out of
/// the info file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_average: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adult: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runtime: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_seasons: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_episodes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub episode_number: Option<u32>,
}

/// Main cast and directors of a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UnitCredits {
    pub cast: Vec<CastEntry>,
    pub directors: Vec<DirectorEntry>,
}

/// Cast member.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CastEntry {
    pub id: u64,
    pub name: String,
    pub character: Option<String>,
    pub order: u32,
}

/// Director credit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectorEntry {
    pub id: u64,
    pub name: String,
    pub job: String,
}
