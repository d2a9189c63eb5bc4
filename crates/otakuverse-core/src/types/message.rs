use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::anime::AnimeData;

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sender {
    User,
    Assistant,
}

/// One entry in the chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message body. Assistant follow-up cards may have an empty body.
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
    /// Anime card attached to the message, if any.
    pub anime: Option<AnimeData>,
}

impl ChatMessage {
    /// A message typed by the user.
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, Sender::User, None)
    }

    /// A plain assistant reply.
    #[must_use]
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(text, Sender::Assistant, None)
    }

    /// An assistant reply carrying an anime card.
    #[must_use]
    pub fn assistant_with_anime(text: impl Into<String>, anime: AnimeData) -> Self {
        Self::new(text, Sender::Assistant, Some(anime))
    }

    fn new(text: impl Into<String>, sender: Sender, anime: Option<AnimeData>) -> Self {
        Self {
            text: text.into(),
            sender,
            timestamp: Utc::now(),
            anime,
        }
    }

    #[must_use]
    pub fn is_from_assistant(&self) -> bool {
        self.sender == Sender::Assistant
    }
}

/// A past chat query, kept for the recent-searches list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub query: String,
    pub timestamp: DateTime<Utc>,
}

impl RecentSearch {
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_sender() {
        assert!(!ChatMessage::user("hi").is_from_assistant());
        assert!(ChatMessage::assistant("hello").is_from_assistant());

        let msg = ChatMessage::assistant_with_anime("", AnimeData::new(1, "Cowboy Bebop"));
        assert!(msg.is_from_assistant());
        assert_eq!(msg.anime.map(|a| a.mal_id), Some(1));
    }

    #[test]
    fn recent_search_serialization_roundtrip() {
        let search = RecentSearch::new("Naruto");
        let json = serde_json::to_string(&search).unwrap();
        let back: RecentSearch = serde_json::from_str(&json).unwrap();
        assert_eq!(search, back);
    }
}
