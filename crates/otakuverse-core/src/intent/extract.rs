use regex::Regex;

use crate::error::Result;

/// Removes filler phrases from chat text to leave the search query.
///
/// Each phrase is matched case-insensitively and every occurrence is
/// removed. Phrases are applied in the order given; the remainder is
/// trimmed of surrounding whitespace.
#[derive(Debug, Clone)]
pub struct PhraseStripper {
    patterns: Vec<Regex>,
}

impl PhraseStripper {
    /// Compiles one case-insensitive literal pattern per phrase.
    ///
    /// # Errors
    ///
    /// Returns `OtakuError::RegexError` if a pattern fails to compile
    /// (escaped literals never do in practice).
    pub fn new(phrases: &[&str]) -> Result<Self> {
        let patterns = phrases
            .iter()
            .map(|phrase| Regex::new(&format!("(?i){}", regex::escape(phrase))))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Returns `text` with every configured phrase removed and the result trimmed.
    #[must_use]
    pub fn strip(&self, text: &str) -> String {
        let mut work = text.to_string();
        for pattern in &self.patterns {
            work = pattern.replace_all(&work, "").into_owned();
        }
        work.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripper(phrases: &[&str]) -> PhraseStripper {
        PhraseStripper::new(phrases).unwrap()
    }

    #[test]
    fn removes_case_insensitively() {
        let s = stripper(&["tell me about"]);
        assert_eq!(s.strip("Tell Me About Naruto"), "Naruto");
        assert_eq!(s.strip("TELL ME ABOUT naruto"), "naruto");
    }

    #[test]
    fn removes_every_occurrence() {
        let s = stripper(&["find"]);
        assert_eq!(s.strip("find Find FIND Bleach"), "Bleach");
    }

    #[test]
    fn keeps_original_casing_of_remainder() {
        let s = stripper(&["what is"]);
        assert_eq!(s.strip("what is Cowboy Bebop"), "Cowboy Bebop");
    }

    #[test]
    fn absent_phrases_only_trim() {
        let s = stripper(&["show me", "search for"]);
        assert_eq!(s.strip("  Cowboy Bebop \n"), "Cowboy Bebop");
        assert_eq!(s.strip("Cowboy Bebop"), "Cowboy Bebop");
    }

    #[test]
    fn removes_inside_words() {
        let s = stripper(&["find"]);
        assert_eq!(s.strip("pathfinder"), "pather");
    }

    #[test]
    fn regex_metacharacters_are_literal() {
        let s = stripper(&["sci-fi", "a.b"]);
        assert_eq!(s.strip("SCI-FI axb a.b"), "axb");
    }

    #[test]
    fn may_produce_empty_string() {
        let s = stripper(&["who is"]);
        assert_eq!(s.strip("  who is  "), "");
        assert_eq!(s.strip(""), "");
    }
}
