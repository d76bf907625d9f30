//! Core data structures and abstractions for the preprocessing library
//!
//! This module contains the fundamental types, traits, and error handling
//! shared by the text filters and the entity extraction round trip.

pub mod error;
pub mod mock_analyzers;
pub mod traits;

// Re-export key items for convenience
pub use error::{ErrorContext, ErrorSeverity, PreprocessError, Result};
pub use traits::{
    AnalyzerSet, FactExtractor, Lemmatizer, MorphNormalizer, MorphTagger, NerTagger, Segmenter,
};

/// A token produced by a [`Segmenter`]: a contiguous word-like region of text
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    /// Surface text of the token
    pub text: String,
    /// Byte offset of the token start in the source text
    pub start: usize,
    /// Byte offset one past the token end
    pub end: usize,
}

/// A sentence boundary produced by a [`Segmenter`]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Sentence {
    /// Surface text of the sentence
    pub text: String,
    /// Byte offset of the sentence start in the source text
    pub start: usize,
    /// Byte offset one past the sentence end
    pub end: usize,
}

/// Segmentation result: tokens and sentences over one text
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Segmented {
    /// Word-level tokens in document order
    pub tokens: Vec<Token>,
    /// Sentences in document order
    pub sentences: Vec<Sentence>,
}

/// Coarse part-of-speech tag assigned by a [`MorphTagger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Pos {
    /// Common noun
    Noun,
    /// Proper noun (capitalized name-like token)
    ProperNoun,
    /// Adjective
    Adjective,
    /// Verb
    Verb,
    /// Numeral
    Numeral,
    /// Anything else (particles, prepositions, punctuation remnants)
    Other,
}

/// Morphological tag for a single token
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MorphTag {
    /// Coarse part of speech
    pub pos: Pos,
    /// Canonical (lemma) form of the token, lowercase
    pub normal: String,
}

/// Category tag of a named-entity span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanKind {
    /// Person name
    Person,
    /// Location or address
    Location,
    /// Any other entity category the tagger knows about
    Other,
}

/// A contiguous labeled region of text produced by a [`NerTagger`]
///
/// Spans are read by the extractor; only tagger implementations construct
/// them. `normal` is empty until the morphological normalizer fills it in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Surface text of the span as it appears in the source
    pub text: String,
    /// Byte offset of the span start in the source text
    pub start: usize,
    /// Byte offset one past the span end
    pub end: usize,
    /// Entity category
    pub kind: SpanKind,
    /// Canonical whitespace-joined form, filled in during extraction
    pub normal: Option<String>,
}

impl Span {
    /// Create an unnormalized span
    pub fn new(text: impl Into<String>, start: usize, end: usize, kind: SpanKind) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            kind,
            normal: None,
        }
    }
}

/// Structured name parts produced by the names fact extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct NameFact {
    /// First (given) name
    pub first: Option<String>,
    /// Patronymic
    pub middle: Option<String>,
    /// Last (family) name
    pub last: Option<String>,
}

/// Structured address parts produced by the address fact extractor
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddressFact {
    /// Settlement name
    pub city: Option<String>,
    /// Street name
    pub street: Option<String>,
    /// House number
    pub house: Option<String>,
}

/// A fact extracted from a span as a side validation step
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Fact {
    /// Person name parts
    Name(NameFact),
    /// Address parts
    Address(AddressFact),
}

/// Normalized entity strings grouped by category, in encounter order
///
/// Produced fresh by each extraction and passed by value to the reinserter;
/// duplicates are preserved and either sequence may be empty. The JSON form
/// keeps the original `NAMES` / `LOCATIONS` key names, and both keys are
/// required when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct EntityRecord {
    /// Normalized person names, in span order
    #[serde(rename = "NAMES")]
    pub names: Vec<String>,
    /// Normalized locations, in span order
    #[serde(rename = "LOCATIONS")]
    pub locations: Vec<String>,
}

impl EntityRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// True when both category sequences are empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.locations.is_empty()
    }

    /// Parse a record from its JSON form
    ///
    /// A record missing either the `NAMES` or the `LOCATIONS` key is
    /// rejected with an input error.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| PreprocessError::Input {
            message: format!("invalid entity record: {e}"),
        })
    }

    /// Serialize the record to JSON with the original key names
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
