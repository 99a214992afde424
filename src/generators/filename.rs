//! Filename generator.

use crate::models::media::HierarchyUnit;

/// Suffix of the JSON translations file.
pub const TRANSLATIONS_JSON_SUFFIX: &str = "_translations.json";
/// Suffix of the CSV translations file.
pub const TRANSLATIONS_CSV_SUFFIX: &str = "_translations.csv";
/// Suffix of the info file. Its presence marks a unit as exported.
pub const INFO_SUFFIX: &str = "_info.json";

/// Generate the base filename of a unit, without suffix.
///
/// Formats:
/// - Movie: `${title}_${year}`, or `${title}` when the year is unknown or the
///   movie lives in a collection folder
/// - Series: `${title}`
/// - Season: `${title}_S${seasonNr2}`
/// - Episode: `${title}_S${seasonNr2}E${episodeNr2}`
pub fn generate_base_name(unit: &HierarchyUnit<'_>) -> String {
    let entity = unit.entity();
    let title = sanitize_component(&entity.title, entity.id);

    match unit {
        HierarchyUnit::Movie(movie) => {
            if movie.collection_name.is_some() || movie.year.is_empty() {
                title
            } else {
                format!("{}_{}", title, movie.year)
            }
        }
        HierarchyUnit::Series(_) => title,
        HierarchyUnit::Season { season, .. } => format!("{}_S{:02}", title, season),
        HierarchyUnit::Episode { season, episode, .. } => {
            format!("{}_S{:02}E{:02}", title, season, episode)
        }
    }
}

/// Sanitize a string for use as a path component.
///
/// Keeps alphanumerics, spaces, hyphens and underscores, then turns spaces
/// into underscores. Falls back to `tmdb${id}` when nothing survives.
pub fn sanitize_component(s: &str, id: u64) -> String {
    let kept: String = s
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    let cleaned = kept.split_whitespace().collect::<Vec<_>>().join("_");
    if cleaned.is_empty() {
        format!("tmdb{}", id)
    } else {
        cleaned
    }
}
