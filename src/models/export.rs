//! Export records and run counters.

use super::catalog::{Translation, UnitCredits, UnitDetails};
use super::media::HierarchyUnit;
use serde::{Deserialize, Serialize};

/// Provenance note stamped on every info file.
pub const ENGLISH_NOTE: &str = "All data in English. Use translations.json for localized content.";

/// One row of a `*_translations` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslationRow {
    pub original_title: String,
    pub tmdb_id: u64,
    pub kind: String,
    pub language: String,
    pub country: String,
    pub language_name: String,
    pub translated_title: String,
    pub translated_overview: String,
}

impl TranslationRow {
    /// Build a row for `unit` from a catalog translation.
    ///
    /// Movies carry their translated title in `title`, every TV unit in `name`.
    pub fn from_translation(unit: &HierarchyUnit<'_>, translation: &Translation) -> Self {
        let entity = unit.entity();
        let translated_title = match unit {
            HierarchyUnit::Movie(_) => translation.title.clone(),
            _ => translation.name.clone(),
        };

        Self {
            original_title: entity.original_title.clone(),
            tmdb_id: entity.id,
            kind: unit.label().to_string(),
            language: translation.language.clone(),
            country: translation.country.clone(),
            language_name: translation.language_name.clone(),
            translated_title: translated_title.unwrap_or_default(),
            translated_overview: translation.overview.clone().unwrap_or_default(),
        }
    }
}

/// Content of a `*_info.json` file: details and credits merged at top level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InfoRecord {
    #[serde(flatten)]
    pub details: UnitDetails,
    #[serde(flatten)]
    pub credits: UnitCredits,
    #[serde(rename = "_note")]
    pub note: String,
}

impl InfoRecord {
    pub fn new(details: UnitDetails, credits: UnitCredits) -> Self {
        Self {
            details,
            credits,
            note: ENGLISH_NOTE.to_string(),
        }
    }
}

/// Counters for one run, incremented only by the control flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Non-blank spreadsheet rows seen.
    pub rows: usize,
    /// Units fetched and exported.
    pub processed: usize,
    /// Units skipped because their info file already existed.
    pub already_exported: usize,
    /// Rows that resolved to nothing.
    pub not_found: usize,
    /// Translation rows written.
    pub translations: usize,
    pub movies: usize,
    pub series: usize,
    pub seasons: usize,
    pub episodes: usize,
}

impl RunStats {
    /// Record a freshly exported unit.
    pub fn record_export(&mut self, unit: &HierarchyUnit<'_>, translations: usize) {
        self.processed += 1;
        self.translations += translations;
        match unit {
            HierarchyUnit::Movie(_) => self.movies += 1,
            HierarchyUnit::Series(_) => self.series += 1,
            HierarchyUnit::Season { .. } => self.seasons += 1,
            HierarchyUnit::Episode { .. } => self.episodes += 1,
        }
    }
}
