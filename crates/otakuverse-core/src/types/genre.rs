use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OtakuError;

/// Genres recognised in chat input.
///
/// The declaration order is the match priority: when several keywords occur
/// in one message, the earliest-declared genre wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Mystery,
    Romance,
    SciFi,
    Thriller,
}

impl Genre {
    /// All genres in match-priority order.
    pub const ALL: [Genre; 10] = [
        Self::Action,
        Self::Adventure,
        Self::Comedy,
        Self::Drama,
        Self::Fantasy,
        Self::Horror,
        Self::Mystery,
        Self::Romance,
        Self::SciFi,
        Self::Thriller,
    ];

    /// Lower-case keyword matched against chat text.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Adventure => "adventure",
            Self::Comedy => "comedy",
            Self::Drama => "drama",
            Self::Fantasy => "fantasy",
            Self::Horror => "horror",
            Self::Mystery => "mystery",
            Self::Romance => "romance",
            Self::SciFi => "sci-fi",
            Self::Thriller => "thriller",
        }
    }

    /// MyAnimeList genre id.
    #[must_use]
    pub fn mal_id(self) -> u32 {
        match self {
            Self::Action => 1,
            Self::Adventure => 2,
            Self::Comedy => 4,
            Self::Mystery => 7,
            Self::Drama => 8,
            Self::Fantasy => 10,
            Self::Horror => 14,
            Self::Romance => 22,
            Self::SciFi => 24,
            Self::Thriller => 41,
        }
    }

    /// Looks up a genre by its exact keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.keyword() == keyword)
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Genre {
    type Err = OtakuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_keyword(&s.trim().to_lowercase())
            .ok_or_else(|| OtakuError::UnknownGenre(s.to_string()))
    }
}
