use otakuverse_core::chat::{AnimeCatalog, CatalogResult};
use otakuverse_core::types::{ListEnvelope, SingleEnvelope};
use otakuverse_core::{AnimeData, CatalogError, CharacterData, Genre};
use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::JikanConfig;

/// HTTP client for the Jikan v4 API.
#[derive(Debug, Clone)]
pub struct JikanClient {
    config: JikanConfig,
    http: reqwest::Client,
}

impl JikanClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Transport` if the HTTP client cannot be built.
    pub fn new(config: JikanConfig) -> CatalogResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("otakuverse/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &JikanConfig {
        &self.config
    }

    /// Full details for one anime by MyAnimeList id.
    pub async fn anime_details(&self, mal_id: u64) -> CatalogResult<Option<AnimeData>> {
        let url = self.endpoint(&format!("/anime/{mal_id}"), &[])?;
        let envelope: SingleEnvelope<AnimeData> = self.get_json(url).await?;
        Ok(envelope.data)
    }

    /// `GET /anime?q=..&limit=..`
    pub fn anime_search_url(&self, query: &str) -> CatalogResult<Url> {
        let limit = self.config.anime_limit.to_string();
        self.endpoint("/anime", &[("q", query), ("limit", limit.as_str())])
    }

    /// `GET /characters?q=..&limit=..`
    pub fn character_search_url(&self, query: &str) -> CatalogResult<Url> {
        let limit = self.config.character_limit.to_string();
        self.endpoint("/characters", &[("q", query), ("limit", limit.as_str())])
    }

    /// `GET /anime?genres=..&limit=..`
    pub fn genre_url(&self, genre: Genre) -> CatalogResult<Url> {
        let id = genre.mal_id().to_string();
        let limit = self.config.anime_limit.to_string();
        self.endpoint("/anime", &[("genres", id.as_str()), ("limit", limit.as_str())])
    }

    /// `GET /top/anime?limit=..`
    pub fn top_url(&self) -> CatalogResult<Url> {
        let limit = self.config.anime_limit.to_string();
        self.endpoint("/top/anime", &[("limit", limit.as_str())])
    }

    /// `GET /random/anime`
    pub fn random_url(&self) -> CatalogResult<Url> {
        self.endpoint("/random/anime", &[])
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> CatalogResult<Url> {
        let mut url = Url::parse(&format!("{}{path}", self.config.base_url))
            .map_err(|_| CatalogError::InvalidUrl)?;
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> CatalogResult<T> {
        debug!(%url, "jikan request");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        check_status(response.status())?;

        let body = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, "failed to decode jikan response");
            CatalogError::Decode(e.to_string())
        })
    }

    async fn get_list<T: DeserializeOwned>(&self, url: Url) -> CatalogResult<Vec<T>> {
        let envelope: ListEnvelope<T> = self.get_json(url).await?;
        Ok(envelope.data.unwrap_or_default())
    }
}

/// Maps a response status onto the catalog error taxonomy.
pub fn check_status(status: StatusCode) -> CatalogResult<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::TOO_MANY_REQUESTS => Err(CatalogError::RateLimited),
        other => Err(CatalogError::Http {
            status: other.as_u16(),
        }),
    }
}

impl AnimeCatalog for JikanClient {
    async fn search_anime(&self, query: &str) -> CatalogResult<Vec<AnimeData>> {
        self.get_list(self.anime_search_url(query)?).await
    }

    async fn search_characters(&self, query: &str) -> CatalogResult<Vec<CharacterData>> {
        self.get_list(self.character_search_url(query)?).await
    }

    async fn search_by_genre(&self, genre: Genre) -> CatalogResult<Vec<AnimeData>> {
        self.get_list(self.genre_url(genre)?).await
    }

    async fn top_anime(&self) -> CatalogResult<Vec<AnimeData>> {
        self.get_list(self.top_url()?).await
    }

    async fn random_anime(&self) -> CatalogResult<Option<AnimeData>> {
        let envelope: SingleEnvelope<AnimeData> = self.get_json(self.random_url()?).await?;
        Ok(envelope.data)
    }
}
