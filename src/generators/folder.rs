//! Folder name generator.

use super::filename::sanitize_component;
use crate::models::media::HierarchyUnit;
use std::path::PathBuf;

/// Prefix of series folders.
pub const SERIES_PREFIX: &str = "[SERIE]_";

/// Generate the folder of a unit, relative to the output root.
///
/// Formats:
/// - Movie: the root itself, or `${collection}` for collection members
/// - Series: `[SERIE]_${title}`
/// - Season / Episode: `[SERIE]_${title}/Season_${seasonNr2}`
pub fn generate_unit_folder(unit: &HierarchyUnit<'_>) -> PathBuf {
    match unit {
        HierarchyUnit::Movie(movie) => match movie.collection_name {
            Some(ref collection) => PathBuf::from(sanitize_component(collection, movie.id)),
            None => PathBuf::new(),
        },
        HierarchyUnit::Series(series) => PathBuf::from(generate_series_folder(series.title.as_str(), series.id)),
        HierarchyUnit::Season { series, season } | HierarchyUnit::Episode { series, season, .. } => {
            PathBuf::from(generate_series_folder(series.title.as_str(), series.id))
                .join(generate_season_folder(*season))
        }
    }
}

/// Generate series folder name.
pub fn generate_series_folder(title: &str, id: u64) -> String {
    format!("{}{}", SERIES_PREFIX, sanitize_component(title, id))
}

/// Generate season folder name.
///
/// Format: `Season_${seasonNr2}`
pub fn generate_season_folder(season_number: u32) -> String {
    format!("Season_{:02}", season_number)
}
