use std::future::Future;

use crate::error::CatalogError;
use crate::types::{AnimeData, CharacterData, Genre, Intent};

/// Result alias for catalog lookups.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// An anime metadata source the chat session can query.
pub trait AnimeCatalog {
    /// Title search.
    fn search_anime(&self, query: &str)
    -> impl Future<Output = CatalogResult<Vec<AnimeData>>> + Send;

    /// Character name search.
    fn search_characters(
        &self,
        query: &str,
    ) -> impl Future<Output = CatalogResult<Vec<CharacterData>>> + Send;

    /// Anime tagged with `genre`.
    fn search_by_genre(
        &self,
        genre: Genre,
    ) -> impl Future<Output = CatalogResult<Vec<AnimeData>>> + Send;

    /// Highest-ranked anime.
    fn top_anime(&self) -> impl Future<Output = CatalogResult<Vec<AnimeData>>> + Send;

    /// One random anime, or `None` when the catalog has nothing to offer.
    fn random_anime(&self) -> impl Future<Output = CatalogResult<Option<AnimeData>>> + Send;
}

/// What a catalog lookup for one intent produced.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResults {
    /// Anime list, with the label used when talking about it.
    Anime {
        label: String,
        results: Vec<AnimeData>,
    },
    /// Character list for the given query.
    Characters {
        query: String,
        results: Vec<CharacterData>,
    },
    /// Outcome of a random pick.
    Random(Option<AnimeData>),
}

/// Runs the catalog lookup matching `intent`.
///
/// # Errors
///
/// Propagates the catalog's error unchanged.
pub async fn dispatch<C>(catalog: &C, intent: &Intent) -> CatalogResult<SearchResults>
where
    C: AnimeCatalog + ?Sized,
{
    let results = match intent {
        Intent::AnimeSearch(query) | Intent::General(query) => SearchResults::Anime {
            label: query.clone(),
            results: catalog.search_anime(query).await?,
        },
        Intent::CharacterSearch(query) => SearchResults::Characters {
            query: query.clone(),
            results: catalog.search_characters(query).await?,
        },
        Intent::GenreSearch(genre) => SearchResults::Anime {
            label: format!("anime in {genre} genre"),
            results: catalog.search_by_genre(*genre).await?,
        },
        Intent::TopAnime => SearchResults::Anime {
            label: "top anime".to_string(),
            results: catalog.top_anime().await?,
        },
        Intent::RandomAnime => SearchResults::Random(catalog.random_anime().await?),
    };
    Ok(results)
}
