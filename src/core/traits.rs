//! Core traits for the analyzer capabilities
//!
//! The external NLP tools the extractor depends on — segmenter,
//! morphological tagger, morphological normalizer, NER tagger, fact
//! extractors — are expensive to build and stateless across calls, so they
//! are constructed once at startup, bundled into an [`AnalyzerSet`], and
//! passed by reference into each extraction. Tests substitute the
//! deterministic fakes from [`crate::core::mock_analyzers`].

use std::sync::Arc;

use crate::core::{Fact, MorphTag, Result, Segmented, Span, Token};

/// Splits raw text into word tokens and sentences
pub trait Segmenter: Send + Sync {
    /// Segment the text, producing tokens and sentences in document order
    fn segment(&self, text: &str) -> Result<Segmented>;
}

/// Assigns morphological tags (part of speech, lemma) to tokens
pub trait MorphTagger: Send + Sync {
    /// Tag each token; the result is index-aligned with the input slice
    fn tag(&self, tokens: &[Token]) -> Result<Vec<MorphTag>>;
}

/// Computes the canonical (lemma) form of a tagged span
pub trait MorphNormalizer: Send + Sync {
    /// Normalize a span given the document's tokens and their tags
    ///
    /// Returns the whitespace-joined canonical form of the tokens covered
    /// by the span.
    fn normalize_span(&self, span: &Span, tokens: &[Token], tags: &[MorphTag]) -> Result<String>;
}

/// Produces labeled entity spans over a text
pub trait NerTagger: Send + Sync {
    /// Tag the text, returning non-overlapping spans in document order
    fn tag(&self, text: &str, tokens: &[Token]) -> Result<Vec<Span>>;
}

/// Extracts a structured fact (name parts, address parts) from a span
pub trait FactExtractor: Send + Sync {
    /// Extract a fact from the span, or `None` when the span does not match
    /// the extractor's category
    fn extract(&self, span: &Span) -> Result<Option<Fact>>;
}

/// Lemmatizes whole texts, lowercasing first
///
/// One capability with two built-in strategies (dictionary lookup and
/// Snowball stemming); which one a pipeline uses is decided by
/// configuration, not by picking a different function.
pub trait Lemmatizer: Send + Sync {
    /// Lowercase the text and replace each whitespace token with its lemma,
    /// joined back with single spaces
    fn lemmatize(&self, text: &str) -> Result<String>;

    /// Short identifier of the strategy (e.g. "dictionary", "stemmer")
    fn name(&self) -> &'static str;
}

/// The pre-built, process-wide analyzer handles the extractor works with
///
/// Cheap to clone; the handles are shared and immutable after construction,
/// so no locking discipline is needed across calls.
#[derive(Clone)]
pub struct AnalyzerSet {
    /// Text segmenter
    pub segmenter: Arc<dyn Segmenter>,
    /// Morphological tagger
    pub morph_tagger: Arc<dyn MorphTagger>,
    /// Morphological normalizer (span lemmatization)
    pub normalizer: Arc<dyn MorphNormalizer>,
    /// Named-entity tagger
    pub ner_tagger: Arc<dyn NerTagger>,
    /// Name fact extractor, applied to person spans
    pub name_facts: Arc<dyn FactExtractor>,
    /// Address fact extractor, applied to location spans
    pub address_facts: Arc<dyn FactExtractor>,
}

impl std::fmt::Debug for AnalyzerSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyzerSet").finish_non_exhaustive()
    }
}
