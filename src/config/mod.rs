//! Pipeline configuration
//!
//! A single TOML-backed [`Config`] drives the preprocessing pipeline: which
//! lemmatizer backend to use, which cleanup passes run, and the
//! caller-supplied extensions (stopwords, gazetteer entries, emoji table).
//! Every field has a default, so an empty file is a valid configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::{Lemmatizer, PreprocessError, Result};
use crate::text::cleanup::CleanupOptions;
use crate::text::lemmatize::{DictionaryLemmatizer, StemmingLemmatizer};

/// Which lemmatization strategy the pipeline uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LemmatizerBackend {
    /// Dictionary and suffix-rule lookup; unknown words pass through
    #[default]
    Dictionary,
    /// Snowball stemming for Russian
    Stemmer,
}

/// One emoji-to-word substitution entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmojiReplacement {
    /// The literal emoji sequence to replace
    pub emoji: String,
    /// The word it becomes
    pub word: String,
}

/// Preprocessing pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Lemmatizer backend selection
    pub lemmatizer: LemmatizerBackend,
    /// Cleanup passes applied by the pipeline's clean step
    pub cleanup: CleanupOptions,
    /// Stopwords removed in addition to the built-in Russian list
    pub extra_stopwords: Vec<String>,
    /// Extra first-name lemmas for the NER gazetteer, lowercase
    pub extra_person_names: Vec<String>,
    /// Extra location lemmas for the NER gazetteer, lowercase
    pub extra_locations: Vec<String>,
    /// Emoji substitution table, applied in order
    pub emoji_replacements: Vec<EmojiReplacement>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lemmatizer: LemmatizerBackend::default(),
            cleanup: CleanupOptions::default(),
            extra_stopwords: Vec::new(),
            extra_person_names: Vec::new(),
            extra_locations: Vec::new(),
            emoji_replacements: Vec::new(),
        }
    }
}

impl Config {
    /// Load and validate a configuration from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&raw)?;
        config.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "loaded configuration");
        Ok(config)
    }

    /// Check invariants the type system cannot express
    pub fn validate(&self) -> Result<()> {
        for entry in &self.emoji_replacements {
            if entry.emoji.is_empty() {
                return Err(PreprocessError::Config {
                    message: "emoji replacement with an empty emoji field".to_string(),
                });
            }
            if entry.word.trim().is_empty() {
                return Err(PreprocessError::Config {
                    message: format!("emoji {:?} maps to an empty word", entry.emoji),
                });
            }
        }
        Ok(())
    }

    /// Construct the configured lemmatizer backend
    pub fn build_lemmatizer(&self) -> Box<dyn Lemmatizer> {
        match self.lemmatizer {
            LemmatizerBackend::Dictionary => Box::new(DictionaryLemmatizer::new()),
            LemmatizerBackend::Stemmer => Box::new(StemmingLemmatizer::new()),
        }
    }

    /// Emoji table as the pair slices the emoji filter takes
    pub fn emoji_pairs(&self) -> Vec<(&str, &str)> {
        self.emoji_replacements
            .iter()
            .map(|entry| (entry.emoji.as_str(), entry.word.as_str()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.lemmatizer, LemmatizerBackend::Dictionary);
        assert!(config.cleanup.strip_html);
        assert!(!config.cleanup.strip_digits);
    }

    #[test]
    fn test_empty_toml_parses_to_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.lemmatizer, LemmatizerBackend::Dictionary);
        assert!(config.extra_stopwords.is_empty());
    }

    #[test]
    fn test_full_toml() {
        let raw = r#"
            lemmatizer = "stemmer"
            extra_stopwords = ["типа"]
            extra_person_names = ["зухра"]
            extra_locations = ["бугульма"]

            [cleanup]
            strip_digits = true

            [[emoji_replacements]]
            emoji = "😊"
            word = "улыбка"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert_eq!(config.lemmatizer, LemmatizerBackend::Stemmer);
        assert!(config.cleanup.strip_digits);
        assert!(config.cleanup.strip_html);
        assert_eq!(config.emoji_pairs(), vec![("😊", "улыбка")]);
    }

    #[test]
    fn test_empty_emoji_rejected() {
        let config = Config {
            emoji_replacements: vec![EmojiReplacement {
                emoji: String::new(),
                word: "слово".to_string(),
            }],
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PreprocessError::Config { .. }));
    }

    #[test]
    fn test_backend_construction() {
        let config = Config {
            lemmatizer: LemmatizerBackend::Stemmer,
            ..Config::default()
        };
        assert_eq!(config.build_lemmatizer().name(), "stemmer");
        assert_eq!(Config::default().build_lemmatizer().name(), "dictionary");
    }
}
