//! Text-preprocessing filters
//!
//! Standalone string-to-string passes: emoji substitution, markup and
//! punctuation cleanup, stopword removal, number spelling, and whole-text
//! lemmatization. Each filter is usable on its own; the
//! [`crate::pipeline::Preprocessor`] chains them in a fixed order.

pub mod cleanup;
pub mod emoji;
pub mod lemmatize;
pub mod numbers;
pub mod stopwords;

pub use cleanup::{early_preproc, remove_digits, CleanupOptions};
pub use emoji::replace_emoji;
pub use lemmatize::{DictionaryLemmatizer, StemmingLemmatizer};
pub use numbers::{number_to_words, numbers_to_words};
pub use stopwords::{remove_stopwords, remove_stopwords_with, RUSSIAN_STOPWORDS};
