use std::fmt;

use serde::{Deserialize, Serialize};

use super::genre::Genre;

/// The classified purpose of one chat message.
///
/// Produced by [`IntentClassifier::classify`](crate::intent::IntentClassifier::classify)
/// and consumed by whatever performs the catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "query", rename_all = "snake_case")]
pub enum Intent {
    /// Search anime by title.
    AnimeSearch(String),

    /// Search characters by name.
    CharacterSearch(String),

    /// Browse anime of one genre.
    GenreSearch(Genre),

    /// Highest-ranked anime.
    TopAnime,

    /// One random anime.
    RandomAnime,

    /// Nothing more specific matched; treated as a title search.
    General(String),
}

impl Intent {
    /// Returns the payload-free discriminant.
    #[must_use]
    pub fn kind(&self) -> IntentKind {
        match self {
            Self::AnimeSearch(_) => IntentKind::AnimeSearch,
            Self::CharacterSearch(_) => IntentKind::CharacterSearch,
            Self::GenreSearch(_) => IntentKind::GenreSearch,
            Self::TopAnime => IntentKind::TopAnime,
            Self::RandomAnime => IntentKind::RandomAnime,
            Self::General(_) => IntentKind::General,
        }
    }

    /// Returns the extracted free-text query, if this intent carries one.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        match self {
            Self::AnimeSearch(q) | Self::CharacterSearch(q) | Self::General(q) => Some(q),
            Self::GenreSearch(_) | Self::TopAnime | Self::RandomAnime => None,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenreSearch(genre) => write!(f, "{}({genre})", self.kind()),
            Self::TopAnime | Self::RandomAnime => write!(f, "{}", self.kind()),
            Self::AnimeSearch(q) | Self::CharacterSearch(q) | Self::General(q) => {
                write!(f, "{}({q:?})", self.kind())
            }
        }
    }
}

/// Intent discriminant without payload, used to label rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentKind {
    AnimeSearch,
    CharacterSearch,
    GenreSearch,
    TopAnime,
    RandomAnime,
    General,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AnimeSearch => write!(f, "AnimeSearch"),
            Self::CharacterSearch => write!(f, "CharacterSearch"),
            Self::GenreSearch => write!(f, "GenreSearch"),
            Self::TopAnime => write!(f, "TopAnime"),
            Self::RandomAnime => write!(f, "RandomAnime"),
            Self::General => write!(f, "General"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_and_query() {
        let intent = Intent::CharacterSearch("Luffy".into());
        assert_eq!(intent.kind(), IntentKind::CharacterSearch);
        assert_eq!(intent.query(), Some("Luffy"));

        assert_eq!(Intent::TopAnime.query(), None);
        assert_eq!(Intent::GenreSearch(Genre::Drama).query(), None);
    }

    #[test]
    fn display() {
        assert_eq!(Intent::RandomAnime.to_string(), "RandomAnime");
        assert_eq!(
            Intent::GenreSearch(Genre::SciFi).to_string(),
            "GenreSearch(sci-fi)"
        );
        assert_eq!(
            Intent::General("Cowboy Bebop".into()).to_string(),
            "General(\"Cowboy Bebop\")"
        );
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(Intent::AnimeSearch("Naruto".into())).unwrap();
        assert_eq!(json["kind"], "anime_search");
        assert_eq!(json["query"], "Naruto");

        let json = serde_json::to_value(Intent::GenreSearch(Genre::SciFi)).unwrap();
        assert_eq!(json["kind"], "genre_search");
        assert_eq!(json["query"], "sci-fi");

        let json = serde_json::to_string(&Intent::TopAnime).unwrap();
        assert_eq!(json, r#"{"kind":"top_anime"}"#);
    }
}
