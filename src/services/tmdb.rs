//! TMDB API client.

use crate::models::catalog::{
    CastEntry, Collection, CollectionSummary, DirectorEntry, EpisodeSummary, SearchResult,
    SeasonInfo, SeasonSummary, Translation, TvInfo, UnitCredits, UnitDetails,
};
use crate::models::config::CatalogConfig;
use crate::models::media::{CatalogTarget, MediaKind};
use crate::services::catalog::Catalog;
use crate::{Error, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

/// Number of cast members kept in the info file.
const CAST_LIMIT: usize = 10;

/// TMDB API client.
pub struct TmdbClient {
    config: CatalogConfig,
    api_key: String,
    /// Whether to use Bearer token authentication (API v4 style)
    use_bearer: bool,
    client: reqwest::Client,
}

/// Paged search response.
#[derive(Debug, Deserialize)]
struct SearchPage<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

/// Movie, TV or multi search item. Movies use `title`, TV uses `name`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SearchItem {
    id: u64,
    media_type: Option<String>,
    title: Option<String>,
    name: Option<String>,
    original_title: Option<String>,
    original_name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    popularity: Option<f64>,
}

impl SearchItem {
    fn into_result(self, kind: Option<MediaKind>) -> SearchResult {
        SearchResult {
            id: self.id,
            kind,
            title: self.title.or(self.name).unwrap_or_default(),
            original_title: self.original_title.or(self.original_name).unwrap_or_default(),
            release_date: self.release_date.or(self.first_air_date).unwrap_or_default(),
            popularity: self.popularity.unwrap_or(0.0),
        }
    }
}

/// Collection search item.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CollectionItem {
    id: u64,
    name: String,
    popularity: Option<f64>,
}

/// Collection details.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CollectionDetails {
    id: u64,
    name: String,
    parts: Vec<SearchItem>,
}

/// Genre.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Genre {
    name: String,
}

/// Details of any unit kind; only the fields of the requested kind are present.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DetailsPayload {
    id: Option<u64>,
    title: Option<String>,
    name: Option<String>,
    original_title: Option<String>,
    original_name: Option<String>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    air_date: Option<String>,
    overview: Option<String>,
    vote_average: Option<f64>,
    vote_count: Option<u64>,
    popularity: Option<f64>,
    original_language: Option<String>,
    adult: Option<bool>,
    genres: Vec<Genre>,
    runtime: Option<u32>,
    number_of_seasons: Option<u32>,
    number_of_episodes: Option<u32>,
    status: Option<String>,
    season_number: Option<u32>,
    episode_number: Option<u32>,
}

impl DetailsPayload {
    fn into_details(self, target: &CatalogTarget) -> UnitDetails {
        let kind = match (target.season, target.episode) {
            (Some(_), Some(_)) => "episode",
            (Some(_), None) => "season",
            _ => target.kind.as_str(),
        };

        UnitDetails {
            id: self.id,
            kind: Some(kind.to_string()),
            title: self.title.or(self.name),
            original_title: self.original_title.or(self.original_name),
            release_date: self.release_date.or(self.first_air_date).or(self.air_date),
            overview: self.overview,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            popularity: self.popularity,
            original_language: self.original_language,
            adult: self.adult,
            genres: self.genres.into_iter().map(|g| g.name).collect(),
            runtime: self.runtime,
            number_of_seasons: self.number_of_seasons,
            number_of_episodes: self.number_of_episodes,
            status: self.status,
            season_number: self.season_number,
            episode_number: self.episode_number,
        }
    }
}

/// Credits response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Credits {
    cast: Vec<CastMember>,
    crew: Vec<CrewMember>,
}

/// Cast member.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CastMember {
    id: u64,
    name: String,
    character: Option<String>,
    order: Option<u32>,
}

/// Crew member.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CrewMember {
    id: u64,
    name: String,
    job: String,
}

impl Credits {
    /// Top-billed cast plus every director.
    fn into_credits(self) -> UnitCredits {
        UnitCredits {
            cast: self
                .cast
                .into_iter()
                .take(CAST_LIMIT)
                .map(|p| CastEntry {
                    id: p.id,
                    name: p.name,
                    character: p.character,
                    order: p.order.unwrap_or(999),
                })
                .collect(),
            directors: self
                .crew
                .into_iter()
                .filter(|p| p.job == "Director")
                .map(|p| DirectorEntry {
                    id: p.id,
                    name: p.name,
                    job: p.job,
                })
                .collect(),
        }
    }
}

/// Series details, seasons only.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TvSeasons {
    id: u64,
    seasons: Vec<SeasonItem>,
}

/// Season within a series.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeasonItem {
    season_number: u32,
    episode_count: u32,
}

/// Season details, episodes only.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SeasonEpisodes {
    season_number: u32,
    episodes: Vec<EpisodeItem>,
}

/// Episode within a season.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EpisodeItem {
    episode_number: u32,
    name: String,
}

/// Translations response.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TranslationsPayload {
    translations: Vec<TranslationItem>,
}

/// One translation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TranslationItem {
    iso_3166_1: String,
    iso_639_1: String,
    english_name: String,
    data: TranslationData,
}

/// Translated fields.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TranslationData {
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(Error::CatalogApiKeyMissing)?;

        // Bearer tokens start with "eyJ" (base64 encoded JWT header)
        let use_bearer = api_key.starts_with("eyJ");

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            config,
            api_key,
            use_bearer,
            client,
        })
    }

    /// Build a request with proper authentication.
    fn build_request(&self, url: &str) -> reqwest::RequestBuilder {
        let request = self.client.get(url);
        if self.use_bearer {
            request.header("Authorization", format!("Bearer {}", self.api_key))
        } else {
            request
        }
    }

    /// Build URL with optional api_key parameter (only for v3 style).
    fn build_url(&self, path: &str, extra_params: &str) -> String {
        if self.use_bearer {
            format!(
                "{}/{}?language={}{}",
                self.config.base_url, path, self.config.language, extra_params
            )
        } else {
            format!(
                "{}/{}?api_key={}&language={}{}",
                self.config.base_url, path, self.api_key, self.config.language, extra_params
            )
        }
    }

    /// GET a path and decode the JSON body.
    ///
    /// Transport failures and timeouts become `CatalogUnavailable`, non-2xx
    /// responses `CatalogStatus`. URLs are stripped from errors since they
    /// carry the API key.
    async fn get_json<T: DeserializeOwned>(&self, path: &str, extra_params: &str) -> Result<T> {
        let url = self.build_url(path, extra_params);
        tracing::debug!("GET {}", path);

        let resp = self
            .build_request(&url)
            .send()
            .await
            .map_err(|e| Error::CatalogUnavailable(e.without_url().to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::CatalogStatus {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }

        resp.json().await.map_err(|e| Error::Http(e.without_url()))
    }

    async fn search(&self, path: &str, query: &str, extra_params: &str) -> Result<Vec<SearchItem>> {
        let params = format!("&query={}{}", urlencoding::encode(query), extra_params);
        let page: SearchPage<SearchItem> = self.get_json(path, &params).await?;
        Ok(page.results)
    }
}

#[async_trait]
impl Catalog for TmdbClient {
    async fn search_movie(&self, title: &str, year: Option<&str>) -> Result<Vec<SearchResult>> {
        let year_param = year
            .map(|y| format!("&primary_release_year={}", y))
            .unwrap_or_default();
        let items = self.search("search/movie", title, &year_param).await?;
        Ok(items
            .into_iter()
            .map(|item| item.into_result(Some(MediaKind::Movie)))
            .collect())
    }

    async fn search_tv(&self, title: &str, year: Option<&str>) -> Result<Vec<SearchResult>> {
        let year_param = year
            .map(|y| format!("&first_air_date_year={}", y))
            .unwrap_or_default();
        let items = self.search("search/tv", title, &year_param).await?;
        Ok(items
            .into_iter()
            .map(|item| item.into_result(Some(MediaKind::Tv)))
            .collect())
    }

    async fn search_multi(&self, title: &str) -> Result<Vec<SearchResult>> {
        let items = self.search("search/multi", title, "").await?;
        Ok(items
            .into_iter()
            .map(|item| {
                let kind = item.media_type.as_deref().and_then(MediaKind::from_catalog);
                item.into_result(kind)
            })
            .collect())
    }

    async fn search_collection(&self, title: &str) -> Result<Vec<CollectionSummary>> {
        let params = format!("&query={}", urlencoding::encode(title));
        let page: SearchPage<CollectionItem> = self.get_json("search/collection", &params).await?;
        Ok(page
            .results
            .into_iter()
            .map(|c| CollectionSummary {
                id: c.id,
                name: c.name,
                popularity: c.popularity.unwrap_or(0.0),
            })
            .collect())
    }

    async fn get_collection(&self, id: u64) -> Result<Collection> {
        let details: CollectionDetails = self.get_json(&format!("collection/{}", id), "").await?;
        Ok(Collection {
            id: details.id,
            name: details.name,
            parts: details
                .parts
                .into_iter()
                .map(|item| item.into_result(Some(MediaKind::Movie)))
                .collect(),
        })
    }

    async fn get_details(&self, target: &CatalogTarget) -> Result<UnitDetails> {
        let payload: DetailsPayload = self.get_json(&target.path(), "").await?;
        Ok(payload.into_details(target))
    }

    async fn get_credits(&self, target: &CatalogTarget) -> Result<UnitCredits> {
        let credits: Credits = self
            .get_json(&format!("{}/credits", target.path()), "")
            .await?;
        Ok(credits.into_credits())
    }

    async fn get_tv_info(&self, id: u64) -> Result<TvInfo> {
        let tv: TvSeasons = self.get_json(&format!("tv/{}", id), "").await?;
        Ok(TvInfo {
            id: tv.id,
            seasons: tv
                .seasons
                .into_iter()
                .map(|s| SeasonSummary {
                    season_number: s.season_number,
                    episode_count: s.episode_count,
                })
                .collect(),
        })
    }

    async fn get_season_info(&self, id: u64, season: u32) -> Result<SeasonInfo> {
        let details: SeasonEpisodes = self
            .get_json(&format!("tv/{}/season/{}", id, season), "")
            .await?;
        Ok(SeasonInfo {
            season_number: details.season_number,
            episodes: details
                .episodes
                .into_iter()
                .map(|e| EpisodeSummary {
                    episode_number: e.episode_number,
                    name: e.name,
                })
                .collect(),
        })
    }

    async fn get_translations(&self, target: &CatalogTarget) -> Result<Vec<Translation>> {
        let payload: TranslationsPayload = self
            .get_json(&format!("{}/translations", target.path()), "")
            .await?;
        Ok(payload
            .translations
            .into_iter()
            .map(|t| Translation {
                language: t.iso_639_1,
                country: t.iso_3166_1,
                language_name: t.english_name,
                title: t.data.title,
                name: t.data.name,
                overview: t.data.overview,
            })
            .collect())
    }

    async fn verify_credentials(&self) -> Result<bool> {
        let url = if self.use_bearer {
            format!("{}/authentication", self.config.base_url)
        } else {
            format!(
                "{}/authentication?api_key={}",
                self.config.base_url, self.api_key
            )
        };

        match self.build_request(&url).send().await {
            Ok(resp) => Ok(resp.status().is_success()),
            Err(e) => Err(Error::CatalogUnavailable(e.without_url().to_string())),
        }
    }
}
