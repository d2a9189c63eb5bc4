//! The ordered rule table driving intent classification.
//!
//! Rules are tried top to bottom and the first one whose trigger occurs in
//! the lower-cased input wins. [`FALLBACK`] applies when none match.

use crate::types::IntentKind;

/// Phrases removed before a character lookup.
pub const CHARACTER_STRIP: &[&str] = &["character", "find anime with", "who is", "tell me about"];

/// Phrases removed before an anime or general lookup.
pub const QUERY_STRIP: &[&str] = &["tell me about", "what is", "find", "show me", "search for"];

/// Genre keywords in priority order. Mirrors [`Genre::ALL`](crate::types::Genre::ALL).
pub const GENRE_TRIGGERS: &[&str] = &[
    "action",
    "adventure",
    "comedy",
    "drama",
    "fantasy",
    "horror",
    "mystery",
    "romance",
    "sci-fi",
    "thriller",
];

/// One step of the classification cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    /// Intent produced when this rule fires.
    pub kind: IntentKind,
    /// Lower-case substrings, any of which fires the rule.
    pub triggers: &'static [&'static str],
    /// Phrases removed from the original text to form the query.
    pub strip: &'static [&'static str],
}

impl IntentRule {
    /// Returns the first trigger, in declared order, contained in `lowered`.
    #[must_use]
    pub fn first_trigger(&self, lowered: &str) -> Option<&'static str> {
        self.triggers
            .iter()
            .copied()
            .find(|trigger| lowered.contains(trigger))
    }
}

/// Classification rules in priority order.
pub const RULES: [IntentRule; 5] = [
    IntentRule {
        kind: IntentKind::RandomAnime,
        triggers: &["random", "surprise"],
        strip: &[],
    },
    IntentRule {
        kind: IntentKind::TopAnime,
        triggers: &["top", "best", "highest rated"],
        strip: &[],
    },
    IntentRule {
        kind: IntentKind::CharacterSearch,
        triggers: &["character", "find anime with", "who is"],
        strip: CHARACTER_STRIP,
    },
    IntentRule {
        kind: IntentKind::GenreSearch,
        triggers: GENRE_TRIGGERS,
        strip: &[],
    },
    IntentRule {
        kind: IntentKind::AnimeSearch,
        triggers: &["anime", "series", "show"],
        strip: QUERY_STRIP,
    },
];

/// Applied when no rule in [`RULES`] fires.
pub const FALLBACK: IntentRule = IntentRule {
    kind: IntentKind::General,
    triggers: &[],
    strip: QUERY_STRIP,
};
