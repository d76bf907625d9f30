//! Preprocessing pipeline facade
//!
//! [`Preprocessor`] wires the configured filters together so callers that
//! don't need to mix and match can run the whole sequence with one call.
//! Each step is also exposed on its own.

use std::collections::HashSet;

use crate::config::Config;
use crate::core::{AnalyzerSet, EntityRecord, Lemmatizer, Result};
use crate::entity::{reinsert, EntityExtractor, ExtractionOptions, ReinsertOptions};
use crate::text::cleanup::early_preproc;
use crate::text::emoji::replace_emoji;
use crate::text::numbers::numbers_to_words;
use crate::text::stopwords::remove_stopwords_with;

/// Configured preprocessing pipeline
///
/// Built once from a [`Config`]; all methods take `&self` and the analyzers
/// are shared, so one instance serves concurrent callers.
pub struct Preprocessor {
    config: Config,
    lemmatizer: Box<dyn Lemmatizer>,
    extra_stopwords: HashSet<String>,
    extractor: EntityExtractor,
}

impl Preprocessor {
    /// Build a pipeline from the configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let lemmatizer = config.build_lemmatizer();
        let extra_stopwords = config
            .extra_stopwords
            .iter()
            .map(|word| word.to_lowercase())
            .collect();
        let analyzers = AnalyzerSet::rule_based_with_gazetteer(
            config.extra_person_names.clone(),
            config.extra_locations.clone(),
        );
        tracing::debug!(lemmatizer = lemmatizer.name(), "pipeline ready");
        Ok(Self {
            config,
            lemmatizer,
            extra_stopwords,
            extractor: EntityExtractor::new(analyzers),
        })
    }

    /// Replace configured emoji with their words
    pub fn replace_emoji(&self, text: &str) -> String {
        replace_emoji(text, &self.config.emoji_pairs())
    }

    /// Run the configured cleanup passes
    pub fn clean(&self, text: &str) -> String {
        early_preproc(text, &self.config.cleanup)
    }

    /// Spell out digit-only tokens
    pub fn numbers_to_words(&self, text: &str) -> String {
        numbers_to_words(text)
    }

    /// Lemmatize the text with the configured backend
    pub fn lemmatize(&self, text: &str) -> Result<String> {
        self.lemmatizer.lemmatize(text)
    }

    /// Remove built-in and configured stopwords
    pub fn remove_stopwords(&self, text: &str) -> String {
        remove_stopwords_with(text, &self.extra_stopwords)
    }

    /// Extract entities, optionally deleting them from the text
    pub fn extract_entities(
        &self,
        text: &str,
        options: &ExtractionOptions,
    ) -> Result<(String, EntityRecord)> {
        self.extractor.extract(text, options)
    }

    /// Append a record's entities back onto the text
    pub fn reinsert_entities(
        &self,
        text: &str,
        record: &EntityRecord,
        options: &ReinsertOptions,
    ) -> String {
        reinsert(text, record, options)
    }

    /// Run the full destructive sequence: emoji, cleanup, number spelling,
    /// lemmatization, stopword removal
    pub fn preprocess(&self, text: &str) -> Result<String> {
        let text = self.replace_emoji(text);
        let text = self.clean(&text);
        let text = self.numbers_to_words(&text);
        let text = self.lemmatize(&text)?;
        Ok(self.remove_stopwords(&text))
    }

    /// The round trip: extract entities first, run the destructive sequence
    /// on the reduced text, then reinsert the canonical forms
    pub fn preprocess_with_entities(
        &self,
        text: &str,
        extraction: &ExtractionOptions,
        reinsertion: &ReinsertOptions,
    ) -> Result<String> {
        let (reduced, record) = self.extract_entities(text, extraction)?;
        let processed = self.preprocess(&reduced)?;
        Ok(self.reinsert_entities(&processed, &record, reinsertion))
    }
}

impl std::fmt::Debug for Preprocessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Preprocessor")
            .field("lemmatizer", &self.lemmatizer.name())
            .finish_non_exhaustive()
    }
}
