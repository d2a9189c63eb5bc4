use tracing::debug;

use crate::error::Result;
use crate::intent::extract::PhraseStripper;
use crate::intent::rules::{FALLBACK, IntentRule, RULES};
use crate::types::{Genre, Intent, IntentKind};

/// A rule paired with its pre-compiled phrase stripper.
#[derive(Debug, Clone)]
struct CompiledRule {
    rule: IntentRule,
    stripper: PhraseStripper,
}

impl CompiledRule {
    fn new(rule: IntentRule) -> Result<Self> {
        Ok(Self {
            rule,
            stripper: PhraseStripper::new(rule.strip)?,
        })
    }

    /// Returns the intent if one of the rule's triggers occurs in `lowered`.
    fn apply(&self, text: &str, lowered: &str) -> Option<Intent> {
        let trigger = self.rule.first_trigger(lowered)?;
        match self.rule.kind {
            IntentKind::RandomAnime => Some(Intent::RandomAnime),
            IntentKind::TopAnime => Some(Intent::TopAnime),
            IntentKind::GenreSearch => Genre::from_keyword(trigger).map(Intent::GenreSearch),
            _ => Some(self.query_intent(text)),
        }
    }

    /// Builds a query-carrying intent of this rule's kind from `text`.
    fn query_intent(&self, text: &str) -> Intent {
        let query = self.stripper.strip(text);
        match self.rule.kind {
            IntentKind::CharacterSearch => Intent::CharacterSearch(query),
            IntentKind::AnimeSearch => Intent::AnimeSearch(query),
            _ => Intent::General(query),
        }
    }
}

/// Deterministic keyword classifier for chat input.
///
/// Evaluates [`RULES`] in order against the lower-cased input; the first
/// rule with a trigger substring present decides the intent. Queries are
/// extracted from the original text, so casing of names is preserved.
/// When nothing matches the input becomes [`Intent::General`].
///
/// Matching is plain substring containment: "dramatic" counts as "drama".
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<CompiledRule>,
    fallback: CompiledRule,
}

impl IntentClassifier {
    /// Constructs a classifier with pre-compiled extraction patterns.
    ///
    /// # Errors
    ///
    /// Returns `OtakuError::RegexError` if any phrase pattern fails to compile
    /// (should never happen with the static phrases defined in [`rules`](crate::intent::rules)).
    pub fn new() -> Result<Self> {
        let rules = RULES
            .into_iter()
            .map(CompiledRule::new)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            rules,
            fallback: CompiledRule::new(FALLBACK)?,
        })
    }

    /// Classifies one chat message. Never fails.
    ///
    /// # Examples
    /// ```
    /// use otakuverse_core::{Genre, Intent, IntentClassifier};
    ///
    /// let classifier = IntentClassifier::new().unwrap();
    /// assert_eq!(
    ///     classifier.classify("find anime with Luffy"),
    ///     Intent::CharacterSearch("Luffy".into())
    /// );
    /// assert_eq!(
    ///     classifier.classify("show me action anime"),
    ///     Intent::GenreSearch(Genre::Action)
    /// );
    /// ```
    #[must_use]
    pub fn classify(&self, text: &str) -> Intent {
        let lowered = text.to_lowercase();

        let intent = self
            .rules
            .iter()
            .find_map(|rule| rule.apply(text, &lowered))
            .unwrap_or_else(|| self.fallback.query_intent(text));

        debug!(kind = %intent.kind(), query = intent.query(), "classified chat input");
        intent
    }

    /// The rule table this classifier evaluates, in priority order.
    #[must_use]
    pub fn rules(&self) -> impl Iterator<Item = &IntentRule> {
        self.rules.iter().map(|compiled| &compiled.rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(text: &str) -> Intent {
        IntentClassifier::new().unwrap().classify(text)
    }

    #[test]
    fn empty_input_is_general() {
        assert_eq!(classify(""), Intent::General(String::new()));
        assert_eq!(classify("   "), Intent::General(String::new()));
    }

    #[test]
    fn random_request() {
        assert_eq!(classify("random anime please"), Intent::RandomAnime);
        assert_eq!(classify("Surprise me!"), Intent::RandomAnime);
    }

    #[test]
    fn random_beats_top() {
        assert_eq!(classify("random pick from the best"), Intent::RandomAnime);
    }

    #[test]
    fn top_checked_before_genre_and_anime() {
        assert_eq!(classify("show me top anime"), Intent::TopAnime);
        assert_eq!(classify("best action shows"), Intent::TopAnime);
        assert_eq!(classify("Highest Rated of 2023"), Intent::TopAnime);
    }

    #[test]
    fn character_search_strips_phrases() {
        assert_eq!(
            classify("find anime with Luffy"),
            Intent::CharacterSearch("Luffy".into())
        );
        assert_eq!(
            classify("who is Levi Ackerman"),
            Intent::CharacterSearch("Levi Ackerman".into())
        );
        assert_eq!(
            classify("Tell me about the character Mikasa"),
            Intent::CharacterSearch("the  Mikasa".into())
        );
    }

    #[test]
    fn character_beats_genre() {
        assert_eq!(
            classify("who is the action hero"),
            Intent::CharacterSearch("the action hero".into())
        );
    }

    #[test]
    fn tell_me_about_alone_is_general() {
        assert_eq!(classify("tell me about Naruto"), Intent::General("Naruto".into()));
    }

    #[test]
    fn genre_checked_before_anime() {
        assert_eq!(
            classify("show me action anime"),
            Intent::GenreSearch(Genre::Action)
        );
    }

    #[test]
    fn genre_uses_declared_order_not_text_order() {
        assert_eq!(
            classify("thriller or mystery"),
            Intent::GenreSearch(Genre::Mystery)
        );
        assert_eq!(
            classify("Romance Comedy"),
            Intent::GenreSearch(Genre::Comedy)
        );
    }

    #[test]
    fn genre_substring_matches_inside_words() {
        assert_eq!(
            classify("something dramatic"),
            Intent::GenreSearch(Genre::Drama)
        );
    }

    #[test]
    fn each_genre_alone_is_detected() {
        for genre in Genre::ALL {
            let text = format!("I like {} stuff", genre.keyword().to_uppercase());
            assert_eq!(classify(&text), Intent::GenreSearch(genre), "failed for {genre}");
        }
    }

    #[test]
    fn anime_search_keywords() {
        assert_eq!(
            classify("search for Bleach anime"),
            Intent::AnimeSearch("Bleach anime".into())
        );
        assert_eq!(
            classify("the Monogatari series"),
            Intent::AnimeSearch("the Monogatari series".into())
        );
        assert_eq!(classify("show me Naruto"), Intent::AnimeSearch("Naruto".into()));
    }

    #[test]
    fn general_fallback_extracts_query() {
        assert_eq!(
            classify("what is Cowboy Bebop"),
            Intent::General("Cowboy Bebop".into())
        );
        assert_eq!(classify("Find Bleach"), Intent::General("Bleach".into()));
        assert_eq!(classify("Steins;Gate"), Intent::General("Steins;Gate".into()));
    }

    #[test]
    fn fallback_rule_builds_general_intent() {
        let fallback = CompiledRule::new(FALLBACK).unwrap();
        assert_eq!(fallback.rule.kind, IntentKind::General);
        assert_eq!(fallback.apply("search for Monster", "search for monster"), None);
        assert_eq!(
            fallback.query_intent("search for Monster"),
            Intent::General("Monster".into())
        );
    }

    #[test]
    fn seriously_is_not_a_trigger() {
        assert_eq!(classify("seriously"), Intent::General("seriously".into()));
    }

    #[test]
    fn classification_is_deterministic() {
        let classifier = IntentClassifier::new().unwrap();
        for text in ["random", "who is Goku", "show me Bleach", "hello", ""] {
            assert_eq!(classifier.classify(text), classifier.classify(text));
        }
    }

    #[test]
    fn exposes_rule_table() {
        let classifier = IntentClassifier::new().unwrap();
        let kinds: Vec<_> = classifier.rules().map(|r| r.kind).collect();
        assert_eq!(kinds.first(), Some(&IntentKind::RandomAnime));
        assert_eq!(kinds.last(), Some(&IntentKind::AnimeSearch));
        assert_eq!(kinds.len(), RULES.len());
    }

    #[test]
    fn classifier_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IntentClassifier>();
    }
}
