//! Hierarchy walker.
//!
//! Expands a resolved entity into exportable units (movie, series, season,
//! episode) and exports each one that is not already on disk. Catalog
//! failures while expanding or fetching are logged and treated as missing
//! data; only export write failures propagate.

use crate::core::exporter::Exporter;
use crate::models::catalog::{Translation, UnitCredits, UnitDetails};
use crate::models::config::PacingConfig;
use crate::models::export::{InfoRecord, RunStats, TranslationRow};
use crate::models::media::{CandidateEntity, HierarchyUnit, SeasonSelector};
use crate::services::catalog::Catalog;
use crate::Result;
use std::time::Duration;

/// What happened to a single unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitOutcome {
    /// Fetched and written, with this many translation rows.
    Exported(usize),
    /// Info file already present; nothing fetched.
    AlreadyExported,
}

/// Walks entities down their hierarchy and exports every unit.
pub struct HierarchyWalker<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    exporter: &'a Exporter,
    pacing: &'a PacingConfig,
}

impl<'a, C: Catalog + ?Sized> HierarchyWalker<'a, C> {
    pub fn new(catalog: &'a C, exporter: &'a Exporter, pacing: &'a PacingConfig) -> Self {
        Self {
            catalog,
            exporter,
            pacing,
        }
    }

    /// Export every unit `entity` expands to under `selector`.
    pub async fn walk(
        &self,
        entity: &CandidateEntity,
        selector: Option<SeasonSelector>,
        stats: &mut RunStats,
    ) -> Result<()> {
        if !entity.is_tv() {
            if let Some(selector) = selector {
                tracing::info!(
                    "{} is a movie, ignoring season selector ({})",
                    entity.display_title(),
                    selector
                );
            }
            self.export_unit(&HierarchyUnit::Movie(entity), stats).await?;
            return Ok(());
        }

        match selector {
            None => {
                self.export_unit(&HierarchyUnit::Series(entity), stats).await?;
            }
            Some(SeasonSelector::Number(season)) => {
                self.walk_season(entity, season, stats).await?;
            }
            Some(SeasonSelector::All) => {
                let seasons = self.season_numbers(entity).await;
                tracing::info!("{}: {} season(s)", entity.title, seasons.len());
                for season in seasons {
                    self.walk_season(entity, season, stats).await?;
                    pause(self.pacing.season_delay_ms).await;
                }
            }
        }

        Ok(())
    }

    /// Regular season numbers of a series, ascending. Empty when the series
    /// listing cannot be fetched.
    pub async fn season_numbers(&self, series: &CandidateEntity) -> Vec<u32> {
        let info = match self.catalog.get_tv_info(series.id).await {
            Ok(info) => info,
            Err(e) => {
                tracing::warn!(kind = e.kind(), "Season list failed for {}: {}", series.title, e);
                return Vec::new();
            }
        };

        let mut seasons: Vec<u32> = info
            .seasons
            .iter()
            .map(|s| s.season_number)
            .filter(|&n| n > 0)
            .collect();
        seasons.sort_unstable();
        seasons.dedup();
        seasons
    }

    /// Export one season and then each of its episodes.
    async fn walk_season(&self, series: &CandidateEntity, season: u32, stats: &mut RunStats) -> Result<()> {
        self.export_unit(&HierarchyUnit::Season { series, season }, stats)
            .await?;

        let episodes = match self.catalog.get_season_info(series.id, season).await {
            Ok(info) => info.episodes,
            Err(e) => {
                tracing::warn!(
                    kind = e.kind(),
                    "Episode list failed for {} S{:02}: {}",
                    series.title,
                    season,
                    e
                );
                return Ok(());
            }
        };

        tracing::debug!("{} S{:02}: {} episode(s)", series.title, season, episodes.len());

        for episode in episodes {
            let unit = HierarchyUnit::Episode {
                series,
                season,
                episode: episode.episode_number,
            };
            self.export_unit(&unit, stats).await?;
        }

        Ok(())
    }

    /// Export a single unit unless it is already on disk.
    ///
    /// The existence check comes first; an existing unit costs no catalog
    /// calls at all.
    pub async fn export_unit(&self, unit: &HierarchyUnit<'_>, stats: &mut RunStats) -> Result<UnitOutcome> {
        if self.exporter.exists(unit) {
            tracing::info!("Already exported: {}", unit);
            stats.already_exported += 1;
            return Ok(UnitOutcome::AlreadyExported);
        }

        let target = unit.target();

        let translations: Vec<Translation> = self
            .catalog
            .get_translations(&target)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(kind = e.kind(), "Translations failed for {}: {}", unit, e);
                Vec::new()
            });

        let details = self.catalog.get_details(&target).await.unwrap_or_else(|e| {
            tracing::warn!(kind = e.kind(), "Details failed for {}: {}", unit, e);
            UnitDetails::default()
        });

        let credits = self.catalog.get_credits(&target).await.unwrap_or_else(|e| {
            tracing::warn!(kind = e.kind(), "Credits failed for {}: {}", unit, e);
            UnitCredits::default()
        });

        let rows: Vec<TranslationRow> = translations
            .iter()
            .map(|t| TranslationRow::from_translation(unit, t))
            .collect();

        tracing::info!(
            "{}: {} translation(s), {} cast, {} director(s)",
            unit,
            rows.len(),
            credits.cast.len(),
            credits.directors.len()
        );

        self.exporter.write_translations(unit, &rows)?;
        self.exporter.write_info(unit, &InfoRecord::new(details, credits))?;

        stats.record_export(unit, rows.len());
        Ok(UnitOutcome::Exported(rows.len()))
    }
}

/// Sleep for `millis`, skipping the timer entirely for zero.
pub async fn pause(millis: u64) {
    if millis > 0 {
        tokio::time::sleep(Duration::from_millis(millis)).await;
    }
}
