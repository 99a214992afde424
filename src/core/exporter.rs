//! Export sink.
//!
//! Writes one unit's translations and English info under the output root. The
//! info file is written last; its presence is the only record that a unit is
//! done, so an interrupted unit is redone on the next run.

use crate::generators::filename::{
    generate_base_name, INFO_SUFFIX, TRANSLATIONS_CSV_SUFFIX, TRANSLATIONS_JSON_SUFFIX,
};
use crate::generators::folder::generate_unit_folder;
use crate::models::export::{InfoRecord, TranslationRow};
use crate::models::media::HierarchyUnit;
use crate::utils::fs;
use crate::Result;
use std::path::{Path, PathBuf};

/// Output files of one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitPaths {
    pub translations_json: PathBuf,
    pub translations_csv: PathBuf,
    pub info_json: PathBuf,
}

/// Filesystem export sink rooted at the output directory.
#[derive(Debug, Clone)]
pub struct Exporter {
    root: PathBuf,
}

impl Exporter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Output root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Canonical output files of `unit`.
    pub fn paths(&self, unit: &HierarchyUnit<'_>) -> UnitPaths {
        let dir = self.root.join(generate_unit_folder(unit));
        let base = generate_base_name(unit);
        UnitPaths {
            translations_json: dir.join(format!("{}{}", base, TRANSLATIONS_JSON_SUFFIX)),
            translations_csv: dir.join(format!("{}{}", base, TRANSLATIONS_CSV_SUFFIX)),
            info_json: dir.join(format!("{}{}", base, INFO_SUFFIX)),
        }
    }

    /// Whether `unit` was already exported.
    pub fn exists(&self, unit: &HierarchyUnit<'_>) -> bool {
        self.paths(unit).info_json.is_file()
    }

    /// Write the translations JSON (always) and CSV (only with rows).
    pub fn write_translations(&self, unit: &HierarchyUnit<'_>, rows: &[TranslationRow]) -> Result<()> {
        let paths = self.paths(unit);

        let json = serde_json::to_string_pretty(rows)?;
        fs::write_file(&paths.translations_json, json.as_bytes())?;

        if !rows.is_empty() {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in rows {
                writer.serialize(row)?;
            }
            let data = writer
                .into_inner()
                .map_err(|e| crate::Error::other(format!("CSV flush failed: {}", e)))?;
            fs::write_file(&paths.translations_csv, &data)?;
        }

        tracing::debug!("Translations: {}", paths.translations_json.display());
        Ok(())
    }

    /// Write the info JSON.
    pub fn write_info(&self, unit: &HierarchyUnit<'_>, info: &InfoRecord) -> Result<()> {
        let paths = self.paths(unit);
        let json = serde_json::to_string_pretty(info)?;
        fs::write_file(&paths.info_json, json.as_bytes())?;

        tracing::debug!("Info (EN): {}", paths.info_json.display());
        Ok(())
    }
}
