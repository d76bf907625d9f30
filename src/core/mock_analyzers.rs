//! Deterministic mock analyzers for offline testing
//!
//! This module provides in-memory implementations of the analyzer traits
//! that produce reproducible results without any external NLP resources,
//! so extraction tests can run fully offline.
//!
//! # Analyzers
//!
//! - [`StaticNerTagger`] — returns canned spans keyed by the exact input
//!   text; unknown texts yield no spans.
//! - [`EchoMorphTagger`] — tags every token as [`Pos::Other`] with its
//!   lowercased surface as the lemma.
//! - [`LookupNormalizer`] — normalizes a span via a lookup table, falling
//!   back to the span's surface text.
//! - [`NoFacts`] — a fact extractor that never matches.
//! - [`UnavailableAnalyzer`] — fails every call with
//!   [`PreprocessError::ToolUnavailable`], for exercising error paths.

use std::collections::HashMap;

use crate::core::{
    Fact, FactExtractor, MorphNormalizer, MorphTag, MorphTagger, NerTagger, Pos, PreprocessError,
    Result, Segmented, Segmenter, Span, Token,
};

/// NER tagger returning canned spans keyed by the exact input text
#[derive(Debug, Clone, Default)]
pub struct StaticNerTagger {
    spans: HashMap<String, Vec<Span>>,
}

impl StaticNerTagger {
    /// Create a tagger with no canned spans
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the spans to return for a given text
    pub fn with_spans(mut self, text: impl Into<String>, spans: Vec<Span>) -> Self {
        self.spans.insert(text.into(), spans);
        self
    }
}

impl NerTagger for StaticNerTagger {
    fn tag(&self, text: &str, _tokens: &[Token]) -> Result<Vec<Span>> {
        Ok(self.spans.get(text).cloned().unwrap_or_default())
    }
}

/// Morph tagger that echoes each token back as its own lowercase lemma
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoMorphTagger;

impl MorphTagger for EchoMorphTagger {
    fn tag(&self, tokens: &[Token]) -> Result<Vec<MorphTag>> {
        Ok(tokens
            .iter()
            .map(|token| MorphTag {
                pos: Pos::Other,
                normal: token.text.to_lowercase(),
            })
            .collect())
    }
}

/// Normalizer backed by a lookup table of surface form to canonical form
#[derive(Debug, Clone, Default)]
pub struct LookupNormalizer {
    map: HashMap<String, String>,
}

impl LookupNormalizer {
    /// Create a normalizer with an empty table (identity behavior)
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a canonical form for a surface form
    pub fn with_entry(mut self, surface: impl Into<String>, normal: impl Into<String>) -> Self {
        self.map.insert(surface.into(), normal.into());
        self
    }
}

impl MorphNormalizer for LookupNormalizer {
    fn normalize_span(
        &self,
        span: &Span,
        _tokens: &[Token],
        _tags: &[MorphTag],
    ) -> Result<String> {
        Ok(self
            .map
            .get(&span.text)
            .cloned()
            .unwrap_or_else(|| span.text.clone()))
    }
}

/// Fact extractor that never produces a fact
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFacts;

impl FactExtractor for NoFacts {
    fn extract(&self, _span: &Span) -> Result<Option<Fact>> {
        Ok(None)
    }
}

/// Analyzer that is permanently unavailable
///
/// Implements every trait and fails each call, so any single analyzer in a
/// set can be swapped for a broken one in tests.
#[derive(Debug, Clone, Copy)]
pub struct UnavailableAnalyzer {
    /// Tool name reported in the error
    pub tool: &'static str,
}

impl UnavailableAnalyzer {
    fn fail<T>(&self) -> Result<T> {
        Err(PreprocessError::ToolUnavailable {
            tool: self.tool.to_string(),
            message: "mock analyzer configured as unavailable".to_string(),
        })
    }
}

impl Segmenter for UnavailableAnalyzer {
    fn segment(&self, _text: &str) -> Result<Segmented> {
        self.fail()
    }
}

impl MorphTagger for UnavailableAnalyzer {
    fn tag(&self, _tokens: &[Token]) -> Result<Vec<MorphTag>> {
        self.fail()
    }
}

impl MorphNormalizer for UnavailableAnalyzer {
    fn normalize_span(
        &self,
        _span: &Span,
        _tokens: &[Token],
        _tags: &[MorphTag],
    ) -> Result<String> {
        self.fail()
    }
}

impl NerTagger for UnavailableAnalyzer {
    fn tag(&self, _text: &str, _tokens: &[Token]) -> Result<Vec<Span>> {
        self.fail()
    }
}

impl FactExtractor for UnavailableAnalyzer {
    fn extract(&self, _span: &Span) -> Result<Option<Fact>> {
        self.fail()
    }
}
