//! Keyword extraction — turns free text into a set of significant lowercase terms.
//!
//! Tokens are maximal runs of `a`–`z` (after lowercasing) of length ≥ 3.
//! Anything else separates tokens. No stemming, no synonyms: surface forms only.

use std::collections::{BTreeSet, HashSet};

/// Shortest token kept by the extractor.
pub const MIN_TOKEN_LEN: usize = 3;

/// Default English stop-word table.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "will", "are", "have", "has", "been",
    "were", "was", "can", "our", "you", "your", "about", "into", "through", "during", "before",
    "after", "above", "below", "between", "under", "again", "further", "then", "once",
];

/// Extracts keyword sets from text using a fixed stop-word table.
///
/// The table is chosen once (at startup) and never changes per call.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    stop_words: HashSet<String>,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl KeywordExtractor {
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn stop_word_count(&self) -> usize {
        self.stop_words.len()
    }

    /// Returns the unique, non-stop-word tokens of `text`.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_ascii_lowercase())
            .filter(|token| token.len() >= MIN_TOKEN_LEN)
            .filter(|token| !self.stop_words.contains(*token))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_stop_words_short_tokens_and_digits_removed() {
        let extractor = KeywordExtractor::default();
        assert_eq!(
            extractor.extract("  The The the CAT cat dog123"),
            set(&["cat", "dog"])
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let extractor = KeywordExtractor::default();
        let text = "Designed REST APIs with Rust, Python and PostgreSQL.";
        assert_eq!(extractor.extract(text), extractor.extract(text));
    }

    #[test]
    fn test_empty_and_degenerate_input_yields_empty_set() {
        let extractor = KeywordExtractor::default();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("the and for with").is_empty());
        assert!(extractor.extract("a an to of 42 ??").is_empty());
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let extractor = KeywordExtractor::default();
        assert_eq!(
            extractor.extract("machine-learning/data_science"),
            set(&["machine", "learning", "data", "science"])
        );
    }

    #[test]
    fn test_non_ascii_letters_act_as_separators() {
        let extractor = KeywordExtractor::default();
        assert_eq!(extractor.extract("café résumé"), set(&["caf", "sum"]));
    }

    #[test]
    fn test_default_table_size() {
        assert_eq!(KeywordExtractor::default().stop_word_count(), 32);
    }

    #[test]
    fn test_custom_stop_words_replace_defaults() {
        let extractor = KeywordExtractor::new(["Python", " sql "]);
        assert_eq!(
            extractor.extract("Python SQL the docker"),
            set(&["the", "docker"])
        );
    }
}
