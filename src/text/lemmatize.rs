//! Whole-text lemmatization strategies
//!
//! Two interchangeable backends behind [`crate::core::Lemmatizer`]: a
//! dictionary-and-suffix lookup that produces real lemmas for known word
//! classes, and a Snowball stemmer that truncates aggressively but covers
//! the open vocabulary. Which one a pipeline uses is a configuration choice.

use rust_stemmers::{Algorithm, Stemmer};

use crate::core::{Lemmatizer, Result};
use crate::nlp::morph::word_lemma;

/// Dictionary-backed lemmatizer; unknown words pass through unchanged
#[derive(Debug, Default)]
pub struct DictionaryLemmatizer;

impl DictionaryLemmatizer {
    /// Create a dictionary lemmatizer
    pub fn new() -> Self {
        Self
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, text: &str) -> Result<String> {
        let words: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(word_lemma)
            .collect();
        Ok(words.join(" "))
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

/// Snowball-stemming lemmatizer for Russian
pub struct StemmingLemmatizer {
    stemmer: Stemmer,
}

impl StemmingLemmatizer {
    /// Create a stemming lemmatizer
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::Russian),
        }
    }
}

impl Default for StemmingLemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StemmingLemmatizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StemmingLemmatizer").finish_non_exhaustive()
    }
}

impl Lemmatizer for StemmingLemmatizer {
    fn lemmatize(&self, text: &str) -> Result<String> {
        let words: Vec<String> = text
            .to_lowercase()
            .split_whitespace()
            .map(|word| self.stemmer.stem(word).into_owned())
            .collect();
        Ok(words.join(" "))
    }

    fn name(&self) -> &'static str {
        "stemmer"
    }
}
