//! Plain-text rendering of chat messages for the terminal.

use otakuverse_core::{AnimeData, ChatMessage, MessageSink, RecentSearch, Sender};

/// Prints assistant messages as they arrive and remembers the last anime card.
#[derive(Debug, Default)]
pub struct TerminalSink {
    last_anime: Option<AnimeData>,
}

impl TerminalSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent anime card shown, target of `/fav`.
    pub fn last_anime(&self) -> Option<&AnimeData> {
        self.last_anime.as_ref()
    }
}

impl MessageSink for TerminalSink {
    fn push(&mut self, message: ChatMessage) {
        // The user already sees what they typed.
        if message.sender == Sender::User {
            return;
        }
        if !message.text.is_empty() {
            println!("{}", message.text);
        }
        if let Some(anime) = message.anime {
            println!("{}", format_card(&anime));
            self.last_anime = Some(anime);
        }
    }
}

/// One-line summary of an anime record.
pub fn format_card(anime: &AnimeData) -> String {
    let mut line = format!("  • {} (#{})", anime.display_title(), anime.mal_id);

    let mut details = Vec::new();
    if let Some(kind) = &anime.kind {
        details.push(kind.clone());
    }
    if let Some(episodes) = anime.episodes {
        details.push(format!("{episodes} eps"));
    }
    if let Some(year) = anime.year {
        details.push(year.to_string());
    }
    if let Some(score) = anime.score {
        details.push(format!("★ {score:.2}"));
    }
    if !details.is_empty() {
        line.push_str(&format!(" [{}]", details.join(", ")));
    }
    line
}

/// Multi-line view of one anime: the card, status, genres and synopsis.
pub fn format_details(anime: &AnimeData) -> String {
    let mut lines = vec![format_card(anime)];
    if let Some(status) = &anime.status {
        lines.push(format!("    Status: {status}"));
    }
    if let Some(genres) = anime.genres.as_deref().filter(|g| !g.is_empty()) {
        let names: Vec<_> = genres.iter().map(|g| g.name.as_str()).collect();
        lines.push(format!("    Genres: {}", names.join(", ")));
    }
    lines.push(String::new());
    lines.push(
        anime
            .synopsis
            .clone()
            .unwrap_or_else(|| "No synopsis available.".to_string()),
    );
    lines.join("\n")
}

/// Numbered listing of recent searches, newest first.
pub fn format_recent(searches: &[RecentSearch]) -> String {
    if searches.is_empty() {
        return "No Recent Searches".to_string();
    }
    searches
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{i:>2}. {} ({})", s.query, s.timestamp.format("%Y-%m-%d %H:%M")))
        .collect::<Vec<_>>()
        .join("\n")
}
