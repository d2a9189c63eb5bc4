use serde::{Deserialize, Serialize};

/// One anime record as returned by the Jikan v4 API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeData {
    /// MyAnimeList id; the identity of the record.
    pub mal_id: u64,
    pub images: AnimeImages,
    pub title: String,
    #[serde(default)]
    pub title_english: Option<String>,
    #[serde(default)]
    pub title_japanese: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
    /// Media type ("TV", "Movie", ...).
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub episodes: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub aired: Option<AiredDates>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub scored_by: Option<u64>,
    #[serde(default)]
    pub popularity: Option<u64>,
    #[serde(default)]
    pub members: Option<u64>,
    #[serde(default)]
    pub favorites: Option<u64>,
    #[serde(default)]
    pub genres: Option<Vec<NamedResource>>,
    #[serde(default)]
    pub studios: Option<Vec<NamedResource>>,
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub season: Option<String>,
}

impl AnimeData {
    /// Creates a record with only the required fields set.
    #[must_use]
    pub fn new(mal_id: u64, title: impl Into<String>) -> Self {
        Self {
            mal_id,
            images: AnimeImages::default(),
            title: title.into(),
            title_english: None,
            title_japanese: None,
            synopsis: None,
            kind: None,
            episodes: None,
            status: None,
            aired: None,
            duration: None,
            rating: None,
            score: None,
            scored_by: None,
            popularity: None,
            members: None,
            favorites: None,
            genres: None,
            studios: None,
            year: None,
            season: None,
        }
    }

    /// English title when present, otherwise the default title.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title_english.as_deref().unwrap_or(&self.title)
    }

    /// Two records describe the same anime when their ids match.
    #[must_use]
    pub fn same_anime(&self, other: &Self) -> bool {
        self.mal_id == other.mal_id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimeImages {
    #[serde(default)]
    pub jpg: ImageUrls,
    #[serde(default)]
    pub webp: Option<ImageUrls>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageUrls {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub small_image_url: Option<String>,
    #[serde(default)]
    pub large_image_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiredDates {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub prop: Option<DateProp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateProp {
    #[serde(default)]
    pub from: Option<DateInfo>,
    #[serde(default)]
    pub to: Option<DateInfo>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    pub day: Option<u8>,
    pub month: Option<u8>,
    pub year: Option<u16>,
}

/// Genre or studio reference embedded in an anime record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub mal_id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
}

/// One character record as returned by the Jikan v4 API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterData {
    pub mal_id: u64,
    #[serde(default)]
    pub images: CharacterImages,
    pub name: String,
    #[serde(default)]
    pub name_kanji: Option<String>,
    #[serde(default)]
    pub nicknames: Option<Vec<String>>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub favorites: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterImages {
    #[serde(default)]
    pub jpg: CharacterImageUrls,
    #[serde(default)]
    pub webp: Option<CharacterImageUrls>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterImageUrls {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// List response envelope: `{ "data": [...], "pagination": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Option<Vec<T>>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Single-record response envelope: `{ "data": {...} }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleEnvelope<T> {
    pub data: Option<T>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    #[serde(default)]
    pub last_visible_page: Option<u32>,
    #[serde(default)]
    pub has_next_page: Option<bool>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub items: Option<PaginationItems>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationItems {
    pub count: Option<u32>,
    pub total: Option<u32>,
    pub per_page: Option<u32>,
}
