//! Integration tests for identifier resolution.
//!
//! Tests cover:
//! - Popularity, similarity and year filtering of multi-search hits
//! - Ambiguous ("get all") versus qualified rows
//! - Collection-first resolution
//! - The typed (movie, then TV) strategy
//! - Catalog failures resolving to nothing

mod common;

use common::{movie, person, show, FakeCatalog};
use media_translations::core::parser::parse_identifier;
use media_translations::core::resolver::{Resolution, Resolver};
use media_translations::models::catalog::{Collection, CollectionSummary};
use media_translations::models::config::{ResolverConfig, Strategy};
use media_translations::models::media::MediaKind;

fn config() -> ResolverConfig {
    ResolverConfig::default()
}

// ========== MULTI-SEARCH FILTERING ==========

#[tokio::test]
async fn test_low_popularity_always_excluded() {
    let catalog = FakeCatalog::new()
        .with_multi("Dune", vec![movie(1, "Dune", "2021-09-15", 4.9)]);
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    assert!(resolver.resolve(&parse_identifier("Dune - 2021")).await.is_empty());
    assert!(resolver.resolve(&parse_identifier("Dune")).await.is_empty());
}

#[tokio::test]
async fn test_low_similarity_excluded_only_when_qualified() {
    // "Dune" vs "Dune World": 8 / 14 ≈ 0.57
    let catalog = FakeCatalog::new()
        .with_multi("Dune", vec![movie(2, "Dune World", "2021-01-01", 10.0)]);
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    let qualified = resolver.resolve(&parse_identifier("Dune - 2021")).await;
    assert!(qualified.is_empty());

    let ambiguous = resolver.resolve(&parse_identifier("Dune")).await;
    assert_eq!(ambiguous.len(), 1);
    assert_eq!(ambiguous[0].id, 2);
    assert!(ambiguous[0].score < 0.6);
}

#[tokio::test]
async fn test_year_filter_without_match_resolves_to_nothing() {
    let catalog = FakeCatalog::new().with_multi(
        "Dune",
        vec![
            movie(438631, "Dune", "2021-09-15", 150.0),
            movie(693134, "Dune: Part Two", "2024-02-27", 300.0),
        ],
    );
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    assert!(resolver.resolve(&parse_identifier("Dune - 1984")).await.is_empty());
}

#[tokio::test]
async fn test_qualified_row_returns_most_popular_match() {
    let catalog = FakeCatalog::new().with_multi(
        "The Matrix",
        vec![
            movie(684428, "The Matrix Making", "1999-05-01", 9.0),
            movie(603, "The Matrix", "1999-03-30", 85.0),
            movie(604, "The Matrix Reloaded", "2003-05-15", 40.0),
        ],
    );
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    let resolved = resolver.resolve(&parse_identifier("The Matrix - 1999")).await;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, 603);
    assert_eq!(resolved[0].year, "1999");
    assert_eq!(resolved[0].score, 1.0);
}

#[tokio::test]
async fn test_ambiguous_row_returns_all_sorted_by_popularity() {
    let catalog = FakeCatalog::new().with_multi(
        "Shogun",
        vec![
            show(1111, "Shōgun", "1980-09-15", 12.0),
            person(2222, "Shogun Fan", 50.0),
            show(126308, "Shōgun", "2024-02-27", 180.0),
            movie(3333, "Shogun Assassin", "1980-11-11", 6.0),
        ],
    );
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    let resolved = resolver.resolve(&parse_identifier("Shogun")).await;
    let ids: Vec<u64> = resolved.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![126308, 1111, 3333]);
    assert_eq!(resolved[0].kind, MediaKind::Tv);
}

#[tokio::test]
async fn test_season_row_uses_similarity_floor() {
    let catalog = FakeCatalog::new().with_multi(
        "Lost",
        vec![
            show(4607, "Lost", "2004-09-22", 90.0),
            movie(5555, "Lost in Translation", "2003-08-31", 120.0),
        ],
    );
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    let resolved = resolver.resolve(&parse_identifier("Lost - S2")).await;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, 4607);
    // Qualified rows never consult collections
    assert_eq!(catalog.count("search_collection"), 0);
}

#[tokio::test]
async fn test_custom_thresholds() {
    let catalog = FakeCatalog::new()
        .with_multi("Dune", vec![movie(1, "Dune", "2021-09-15", 4.9)]);
    let config = ResolverConfig {
        min_popularity: 1.0,
        ..ResolverConfig::default()
    };
    let resolver = Resolver::new(&catalog, &config);

    assert_eq!(resolver.resolve(&parse_identifier("Dune - 2021")).await.len(), 1);
}

// ========== COLLECTIONS ==========

fn toy_story_catalog() -> FakeCatalog {
    let mut catalog = FakeCatalog::new();
    catalog.collections.insert(
        "Toy Story".to_string(),
        vec![
            CollectionSummary {
                id: 10194,
                name: "Toy Story Collection".to_string(),
                popularity: 30.0,
            },
            CollectionSummary {
                id: 999,
                name: "Toy Story Toons".to_string(),
                popularity: 50.0,
            },
            CollectionSummary {
                id: 998,
                name: "Toy Story Shorts".to_string(),
                popularity: 50.0,
            },
        ],
    );
    catalog.collection_parts.insert(
        999,
        Collection {
            id: 999,
            name: "Toy Story Toons".to_string(),
            parts: vec![
                movie(3, "Partysaurus Rex", "2012-09-14", 8.0),
                movie(4, "Unannounced Short", "", 0.5),
                movie(1, "Hawaiian Vacation", "2011-06-24", 7.0),
                movie(2, "Small Fry", "2011-11-23", 6.0),
            ],
        },
    );
    catalog
}

#[tokio::test]
async fn test_collection_picks_most_popular_and_orders_parts() {
    let catalog = toy_story_catalog();
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    let resolved = resolver.resolve(&parse_identifier("Toy Story")).await;
    let ids: Vec<u64> = resolved.iter().map(|c| c.id).collect();

    // 999 and 998 tie on popularity; the first one returned wins
    assert_eq!(catalog.count("get_collection:999"), 1);
    // Missing release dates sort first, and low popularity is not filtered here
    assert_eq!(ids, vec![4, 1, 2, 3]);
    assert!(resolved
        .iter()
        .all(|c| c.collection_name.as_deref() == Some("Toy Story Toons") && c.kind == MediaKind::Movie));
    assert_eq!(catalog.count("search_multi"), 0);
}

#[tokio::test]
async fn test_collection_skipped_for_qualified_rows() {
    let catalog = toy_story_catalog()
        .with_multi("Toy Story", vec![movie(862, "Toy Story", "1995-10-30", 80.0)]);
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    let resolved = resolver.resolve(&parse_identifier("Toy Story - 1995")).await;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, 862);
    assert_eq!(resolved[0].collection_name, None);
    assert_eq!(catalog.count("search_collection"), 0);
}

#[tokio::test]
async fn test_collection_fetch_failure_falls_through() {
    let mut catalog = FakeCatalog::new()
        .with_multi("Alien", vec![movie(348, "Alien", "1979-05-25", 60.0)]);
    catalog.collections.insert(
        "Alien".to_string(),
        vec![CollectionSummary {
            id: 8091,
            name: "Alien Collection".to_string(),
            popularity: 20.0,
        }],
    );
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    let resolved = resolver.resolve(&parse_identifier("Alien")).await;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, 348);
    assert_eq!(
        catalog.calls(),
        vec!["search_collection:Alien", "get_collection:8091", "search_multi:Alien"]
    );
}

// ========== TYPED SEARCH ==========

#[tokio::test]
async fn test_typed_search_movie_then_tv() {
    let mut catalog = FakeCatalog::new();
    catalog
        .movies
        .insert("Fargo".to_string(), vec![movie(275, "Fargo", "1996-03-08", 30.0)]);
    catalog
        .shows
        .insert("Fargo".to_string(), vec![show(60622, "Fargo", "2014-04-15", 70.0)]);
    let config = ResolverConfig {
        strategies: vec![Strategy::TypedSearch],
        ..ResolverConfig::default()
    };
    let resolver = Resolver::new(&catalog, &config);

    let resolved = resolver.resolve(&parse_identifier("Fargo - 1996")).await;
    assert_eq!(resolved[0].id, 275);

    // The first movie hit has the wrong year, so the series is tried
    let resolved = resolver.resolve(&parse_identifier("Fargo - 2014")).await;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].id, 60622);
    assert_eq!(resolved[0].kind, MediaKind::Tv);

    assert!(resolver.resolve(&parse_identifier("Fargo - 2020")).await.is_empty());
}

#[tokio::test]
async fn test_typed_search_season_rows_skip_movies() {
    let mut catalog = FakeCatalog::new();
    catalog
        .shows
        .insert("Fargo".to_string(), vec![show(60622, "Fargo", "2014-04-15", 70.0)]);
    let config = ResolverConfig {
        strategies: vec![Strategy::TypedSearch],
        ..ResolverConfig::default()
    };
    let resolver = Resolver::new(&catalog, &config);

    let outcome = resolver
        .attempt(Strategy::TypedSearch, &parse_identifier("Fargo - S1"))
        .await
        .unwrap();
    assert!(matches!(outcome, Resolution::Found(ref c) if c[0].id == 60622));
    assert_eq!(catalog.count("search_movie"), 0);
}

// ========== FAILURES ==========

#[tokio::test]
async fn test_catalog_failure_resolves_to_nothing() {
    let mut catalog = FakeCatalog::new()
        .with_multi("Dune", vec![movie(438631, "Dune", "2021-09-15", 150.0)]);
    catalog.offline = true;
    let config = config();
    let resolver = Resolver::new(&catalog, &config);

    assert!(resolver.resolve(&parse_identifier("Dune")).await.is_empty());
    // Both strategies were tried despite the first failing
    assert_eq!(catalog.calls(), vec!["search_collection:Dune", "search_multi:Dune"]);
}
