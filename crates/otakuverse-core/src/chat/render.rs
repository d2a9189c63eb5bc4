//! Turns catalog results into assistant messages.

use crate::error::CatalogError;
use crate::types::{AnimeData, CharacterData, ChatMessage};

use super::catalog::SearchResults;

/// The greeting shown when a conversation starts.
pub const WELCOME_TEXT: &str = "Hello! I'm your anime assistant. Ask me about any anime, character, or get recommendations!\n\nTry saying:\n• \"Tell me about Naruto\"\n• \"Find anime with Luffy\"\n• \"Show me action anime\"\n• \"Random anime please\"";

#[must_use]
pub fn welcome() -> ChatMessage {
    ChatMessage::assistant(WELCOME_TEXT)
}

/// Renders one lookup outcome. `preview` bounds how many anime cards are emitted.
#[must_use]
pub fn render(results: SearchResults, preview: usize) -> Vec<ChatMessage> {
    match results {
        SearchResults::Anime { label, results } => render_anime(results, &label, preview),
        SearchResults::Characters { query, results } => {
            vec![render_characters(results.first(), &query)]
        }
        SearchResults::Random(Some(anime)) => vec![ChatMessage::assistant_with_anime(
            "Here's a random anime for you!",
            anime,
        )],
        SearchResults::Random(None) => vec![ChatMessage::assistant(
            "Sorry, I couldn't get a random anime right now. Please try again.",
        )],
    }
}

/// Message shown when the catalog lookup failed.
#[must_use]
pub fn render_error(error: &CatalogError) -> ChatMessage {
    ChatMessage::assistant(format!(
        "Sorry, I encountered an error: {error}. Please try again."
    ))
}

fn render_anime(results: Vec<AnimeData>, label: &str, preview: usize) -> Vec<ChatMessage> {
    let preview = preview.max(1);
    let total = results.len();
    let mut cards = results.into_iter().take(preview);

    let Some(first) = cards.next() else {
        return vec![ChatMessage::assistant(format!(
            "Sorry, I couldn't find any anime matching '{label}'. Try a different search term!"
        ))];
    };

    if total == 1 {
        return vec![ChatMessage::assistant_with_anime(
            format!("Here's what I found for '{label}':"),
            first,
        )];
    }

    let mut messages = vec![ChatMessage::assistant_with_anime(
        format!("I found {total} anime matching '{label}'. Here's the top result:"),
        first,
    )];
    messages.extend(cards.map(|anime| ChatMessage::assistant_with_anime("", anime)));

    if total > preview {
        messages.push(ChatMessage::assistant(format!(
            "And {} more results! Try being more specific if you're looking for something particular.",
            total - preview
        )));
    }
    messages
}

fn render_characters(first: Option<&CharacterData>, query: &str) -> ChatMessage {
    let Some(character) = first else {
        return ChatMessage::assistant(format!(
            "Sorry, I couldn't find any characters matching '{query}'. Try a different search term!"
        ));
    };

    ChatMessage::assistant(format!(
        "I found the character '{}'!\n\n{}\n\nThis character has {} favorites on MyAnimeList.",
        character.name,
        character.about.as_deref().unwrap_or("No description available."),
        character.favorites.unwrap_or(0),
    ))
}
