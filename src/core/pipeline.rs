//! Row pipeline.
//!
//! One spreadsheet row at a time: parse, resolve, walk every resolved entity,
//! then pause before the next row.

use crate::core::exporter::Exporter;
use crate::core::parser::parse_identifier;
use crate::core::resolver::Resolver;
use crate::core::walker::{pause, HierarchyWalker};
use crate::models::config::{PacingConfig, ResolverConfig};
use crate::models::export::RunStats;
use crate::services::catalog::Catalog;
use crate::Result;
use indicatif::{ProgressBar, ProgressStyle};

/// Sequential export pipeline over spreadsheet rows.
pub struct Pipeline<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    resolver_config: &'a ResolverConfig,
    pacing: &'a PacingConfig,
    exporter: Exporter,
}

impl<'a, C: Catalog + ?Sized> Pipeline<'a, C> {
    pub fn new(
        catalog: &'a C,
        resolver_config: &'a ResolverConfig,
        pacing: &'a PacingConfig,
        exporter: Exporter,
    ) -> Self {
        Self {
            catalog,
            resolver_config,
            pacing,
            exporter,
        }
    }

    /// Process every row. Blank rows are skipped silently.
    pub async fn run(&self, rows: &[String]) -> Result<RunStats> {
        let mut stats = RunStats::default();

        let pb = ProgressBar::new(rows.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .map_err(|e| crate::Error::other(e.to_string()))?
                .progress_chars("=>-"),
        );

        for (idx, raw) in rows.iter().enumerate() {
            pb.inc(1);
            let raw = raw.trim();
            if raw.is_empty() {
                continue;
            }

            pb.set_message(raw.to_string());
            tracing::info!("[{}/{}] {}", idx + 1, rows.len(), raw);

            self.process_row(raw, &mut stats).await?;
            pause(self.pacing.row_delay_ms).await;
        }

        pb.finish_with_message("Done!");
        Ok(stats)
    }

    /// Parse, resolve and export a single non-blank row.
    pub async fn process_row(&self, raw: &str, stats: &mut RunStats) -> Result<()> {
        stats.rows += 1;

        let identifier = parse_identifier(raw);
        let resolver = Resolver::new(self.catalog, self.resolver_config);
        let candidates = resolver.resolve(&identifier).await;

        if candidates.is_empty() {
            tracing::info!("Not found: {}", identifier);
            stats.not_found += 1;
            return Ok(());
        }

        if candidates.len() > 1 {
            tracing::info!("'{}' matched {} titles", identifier, candidates.len());
        }

        let walker = HierarchyWalker::new(self.catalog, &self.exporter, self.pacing);
        for candidate in &candidates {
            tracing::info!("Found {}: {}", candidate.kind, candidate.display_title());
            walker.walk(candidate, identifier.season, stats).await?;
        }

        Ok(())
    }
}
