//! Russian text preprocessing for retrieval and classification pipelines
//!
//! A collection of composable text filters (emoji substitution, markup and
//! punctuation cleanup, number spelling, lemmatization, stopword removal)
//! plus a named-entity round trip that extracts person and location
//! entities before the destructive filters run and reinserts their
//! canonical forms afterwards.
//!
//! # Quick start
//!
//! ```
//! use rutext::config::Config;
//! use rutext::pipeline::Preprocessor;
//!
//! # fn main() -> rutext::core::Result<()> {
//! let pipeline = Preprocessor::new(Config::default())?;
//! let out = pipeline.preprocess("<p>Я купил 2 книги</p>")?;
//! assert_eq!(out, "купил два книги");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod core;
pub mod entity;
pub mod nlp;
pub mod pipeline;
pub mod text;

/// Common imports for pipeline users
pub mod prelude {
    pub use crate::config::{Config, LemmatizerBackend};
    pub use crate::core::{
        AnalyzerSet, EntityRecord, ErrorContext, PreprocessError, Result,
    };
    pub use crate::entity::{
        reinsert, EntityExtractor, ExtractionOptions, NameStyle, ReinsertOptions,
    };
    pub use crate::pipeline::Preprocessor;
    pub use crate::text::{
        early_preproc, numbers_to_words, remove_stopwords, replace_emoji, CleanupOptions,
    };
}
