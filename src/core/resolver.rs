//! Identifier resolution.
//!
//! A parsed identifier is resolved by trying the configured strategies in
//! order. Each strategy either finds candidates or reports no match; the first
//! one that finds something wins. Catalog failures never escape a strategy:
//! they are logged and count as no match.

use crate::core::parser::ParsedIdentifier;
use crate::core::similarity::similarity;
use crate::models::catalog::SearchResult;
use crate::models::config::{ResolverConfig, Strategy};
use crate::models::media::{CandidateEntity, MediaKind};
use crate::services::catalog::Catalog;
use crate::Result;

/// Outcome of one strategy.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(Vec<CandidateEntity>),
    NoMatch,
}

impl Resolution {
    fn from_candidates(candidates: Vec<CandidateEntity>) -> Self {
        if candidates.is_empty() {
            Resolution::NoMatch
        } else {
            Resolution::Found(candidates)
        }
    }
}

/// Resolves parsed identifiers against a catalog.
pub struct Resolver<'a, C: Catalog + ?Sized> {
    catalog: &'a C,
    config: &'a ResolverConfig,
}

impl<'a, C: Catalog + ?Sized> Resolver<'a, C> {
    pub fn new(catalog: &'a C, config: &'a ResolverConfig) -> Self {
        Self { catalog, config }
    }

    /// Resolve an identifier to zero, one or many candidates.
    pub async fn resolve(&self, identifier: &ParsedIdentifier) -> Vec<CandidateEntity> {
        for strategy in &self.config.strategies {
            tracing::debug!("Trying {:?} for '{}'", strategy, identifier);

            match self.attempt(*strategy, identifier).await {
                Ok(Resolution::Found(candidates)) => {
                    tracing::debug!(
                        "{:?} resolved '{}' to {} candidate(s)",
                        strategy,
                        identifier,
                        candidates.len()
                    );
                    return candidates;
                }
                Ok(Resolution::NoMatch) => {}
                Err(e) if e.is_catalog_failure() => {
                    tracing::warn!(
                        kind = e.kind(),
                        "{:?} lookup failed for '{}': {}",
                        strategy,
                        identifier,
                        e
                    );
                }
                Err(e) => {
                    tracing::warn!("{:?} failed for '{}': {}", strategy, identifier, e);
                }
            }
        }

        Vec::new()
    }

    /// Run one strategy.
    pub async fn attempt(&self, strategy: Strategy, identifier: &ParsedIdentifier) -> Result<Resolution> {
        match strategy {
            Strategy::Collection => self.by_collection(identifier).await,
            Strategy::MultiSearch => self.by_multi_search(identifier).await,
            Strategy::TypedSearch => self.by_typed_search(identifier).await,
        }
    }

    /// Treat the title as a collection name and return all of its parts.
    async fn by_collection(&self, identifier: &ParsedIdentifier) -> Result<Resolution> {
        if !identifier.is_ambiguous() {
            return Ok(Resolution::NoMatch);
        }

        let hits = self.catalog.search_collection(&identifier.title).await?;

        // Highest popularity, first one wins a tie
        let mut best = match hits.first() {
            Some(hit) => hit,
            None => return Ok(Resolution::NoMatch),
        };
        for hit in &hits[1..] {
            if hit.popularity > best.popularity {
                best = hit;
            }
        }

        let collection = self.catalog.get_collection(best.id).await?;
        let name = if collection.name.is_empty() {
            best.name.clone()
        } else {
            collection.name
        };

        let mut parts = collection.parts;
        // Stable: equal dates keep catalog order, missing dates sort first
        parts.sort_by(|a, b| a.release_date.cmp(&b.release_date));

        tracing::info!("Collection '{}' with {} part(s)", name, parts.len());

        let candidates = parts
            .into_iter()
            .map(|part| {
                let mut candidate = to_candidate(part, MediaKind::Movie);
                candidate.collection_name = Some(name.clone());
                candidate
            })
            .collect();

        Ok(Resolution::from_candidates(candidates))
    }

    /// Combined movie + TV search with popularity, similarity and year filters.
    async fn by_multi_search(&self, identifier: &ParsedIdentifier) -> Result<Resolution> {
        let hits = self.catalog.search_multi(&identifier.title).await?;
        Ok(Resolution::from_candidates(self.rank(identifier, hits)))
    }

    /// Filter and order multi-search hits.
    pub fn rank(&self, identifier: &ParsedIdentifier, hits: Vec<SearchResult>) -> Vec<CandidateEntity> {
        let ambiguous = identifier.is_ambiguous();

        let mut candidates: Vec<CandidateEntity> = hits
            .into_iter()
            .filter_map(|hit| {
                let kind = hit.kind?;
                Some(to_candidate(hit, kind))
            })
            .filter(|c| c.popularity >= self.config.min_popularity)
            .map(|mut c| {
                c.score = similarity(&identifier.title, &c.title)
                    .max(similarity(&identifier.title, &c.original_title));
                c
            })
            .collect();

        if !ambiguous {
            candidates.retain(|c| c.score >= self.config.min_similarity);
        }

        if let Some(ref year) = identifier.year {
            candidates.retain(|c| &c.year == year);
        }

        candidates.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));

        for c in &candidates {
            tracing::debug!(
                "Candidate: {} [{}] (popularity={:.1}, score={:.2})",
                c.display_title(),
                c.kind,
                c.popularity,
                c.score
            );
        }

        if !ambiguous {
            candidates.truncate(1);
        }
        candidates
    }

    /// Movie search first, then TV; the first hit of each is taken as-is.
    async fn by_typed_search(&self, identifier: &ParsedIdentifier) -> Result<Resolution> {
        let year = identifier.year.as_deref();

        if identifier.season.is_none() {
            let movies = self.catalog.search_movie(&identifier.title, year).await?;
            if let Some(candidate) = first_matching_year(movies, MediaKind::Movie, year) {
                return Ok(Resolution::Found(vec![candidate]));
            }
        }

        let shows = self.catalog.search_tv(&identifier.title, year).await?;
        Ok(match first_matching_year(shows, MediaKind::Tv, year) {
            Some(candidate) => Resolution::Found(vec![candidate]),
            None => Resolution::NoMatch,
        })
    }
}

/// Take the first hit, rejecting it when its year disagrees with `year`.
fn first_matching_year(hits: Vec<SearchResult>, kind: MediaKind, year: Option<&str>) -> Option<CandidateEntity> {
    let candidate = to_candidate(hits.into_iter().next()?, kind);
    match year {
        Some(y) if candidate.year != y => None,
        _ => Some(candidate),
    }
}

fn to_candidate(hit: SearchResult, kind: MediaKind) -> CandidateEntity {
    CandidateEntity::new(
        hit.id,
        kind,
        hit.title,
        hit.original_title,
        hit.release_date,
        hit.popularity,
    )
}
