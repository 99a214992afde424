//! Media-related data models.

use serde::{Deserialize, Serialize};

/// Kind of top-level catalog entity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Movie,
    Tv,
}

impl MediaKind {
    /// Path segment used by the catalog for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Movie => "movie",
            MediaKind::Tv => "tv",
        }
    }

    /// Parse the catalog's `media_type` field. Anything other than movie or
    /// tv (people, collections) yields `None`.
    pub fn from_catalog(media_type: &str) -> Option<Self> {
        match media_type {
            "movie" => Some(MediaKind::Movie),
            "tv" => Some(MediaKind::Tv),
            _ => None,
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which seasons of a series a row asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeasonSelector {
    /// A single season.
    Number(u32),
    /// Every regular season (season 0 "specials" excluded).
    All,
}

impl std::fmt::Display for SeasonSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeasonSelector::Number(n) => write!(f, "S{}", n),
            SeasonSelector::All => write!(f, "all seasons"),
        }
    }
}

/// A resolved catalog entity that drives fetch calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateEntity {
    /// TMDB ID.
    pub id: u64,
    /// Movie or TV.
    pub kind: MediaKind,
    /// Title as returned by the English-language search.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Release date (movies) or first air date (TV), `YYYY-MM-DD` or empty.
    pub release_date: String,
    /// First four characters of `release_date`, or empty.
    pub year: String,
    /// Catalog popularity.
    pub popularity: f64,
    /// Similarity score against the query, set by multi-search.
    pub score: f64,
    /// Display name of the collection this movie was resolved through.
    pub collection_name: Option<String>,
}

impl CandidateEntity {
    /// Build a candidate, deriving `year` from the release date.
    pub fn new(
        id: u64,
        kind: MediaKind,
        title: impl Into<String>,
        original_title: impl Into<String>,
        release_date: impl Into<String>,
        popularity: f64,
    ) -> Self {
        let release_date = release_date.into();
        Self {
            id,
            kind,
            title: title.into(),
            original_title: original_title.into(),
            year: year_of(&release_date),
            release_date,
            popularity,
            score: 0.0,
            collection_name: None,
        }
    }

    /// Whether this candidate is a TV series.
    pub fn is_tv(&self) -> bool {
        self.kind == MediaKind::Tv
    }

    /// Title for display, with year when known.
    pub fn display_title(&self) -> String {
        if self.year.is_empty() {
            self.title.clone()
        } else {
            format!("{} ({})", self.title, self.year)
        }
    }
}

/// Extract the year from a `YYYY-MM-DD` date.
pub fn year_of(date: &str) -> String {
    date.chars().take(4).collect()
}

/// Address of one fetchable item in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTarget {
    pub kind: MediaKind,
    pub id: u64,
    pub season: Option<u32>,
    pub episode: Option<u32>,
}

impl CatalogTarget {
    /// URL path of this target relative to the API root.
    pub fn path(&self) -> String {
        match (self.season, self.episode) {
            (Some(s), Some(e)) => format!("tv/{}/season/{}/episode/{}", self.id, s, e),
            (Some(s), None) => format!("tv/{}/season/{}", self.id, s),
            _ => format!("{}/{}", self.kind.as_str(), self.id),
        }
    }
}

/// The smallest exported granularity.
///
/// Units borrow the entity they were expanded from; a season or episode only
/// navigates to its series, it does not own anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HierarchyUnit<'a> {
    Movie(&'a CandidateEntity),
    Series(&'a CandidateEntity),
    Season {
        series: &'a CandidateEntity,
        season: u32,
    },
    Episode {
        series: &'a CandidateEntity,
        season: u32,
        episode: u32,
    },
}

impl<'a> HierarchyUnit<'a> {
    /// The entity this unit was expanded from.
    pub fn entity(&self) -> &'a CandidateEntity {
        match *self {
            HierarchyUnit::Movie(e) | HierarchyUnit::Series(e) => e,
            HierarchyUnit::Season { series, .. } | HierarchyUnit::Episode { series, .. } => series,
        }
    }

    /// Label written to the `kind` column of translation rows.
    pub fn label(&self) -> &'static str {
        match self {
            HierarchyUnit::Movie(_) => "movie",
            HierarchyUnit::Series(_) => "tv",
            HierarchyUnit::Season { .. } => "season",
            HierarchyUnit::Episode { .. } => "episode",
        }
    }

    /// Catalog address for details, credits and translations.
    pub fn target(&self) -> CatalogTarget {
        let entity = self.entity();
        match *self {
            HierarchyUnit::Movie(_) | HierarchyUnit::Series(_) => CatalogTarget {
                kind: entity.kind,
                id: entity.id,
                season: None,
                episode: None,
            },
            HierarchyUnit::Season { season, .. } => CatalogTarget {
                kind: MediaKind::Tv,
                id: entity.id,
                season: Some(season),
                episode: None,
            },
            HierarchyUnit::Episode { season, episode, .. } => CatalogTarget {
                kind: MediaKind::Tv,
                id: entity.id,
                season: Some(season),
                episode: Some(episode),
            },
        }
    }
}

impl std::fmt::Display for HierarchyUnit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HierarchyUnit::Movie(e) | HierarchyUnit::Series(e) => write!(f, "{}", e.display_title()),
            HierarchyUnit::Season { series, season } => {
                write!(f, "{} S{:02}", series.title, season)
            }
            HierarchyUnit::Episode { series, season, episode } => {
                write!(f, "{} S{:02}E{:02}", series.title, season, episode)
            }
        }
    }
}
