//! Rule-based Russian NLP analyzers
//!
//! Self-contained implementations of the analyzer traits in
//! [`crate::core::traits`]: a word-boundary segmenter, a suffix-driven
//! morphological tagger and normalizer, a gazetteer NER tagger, and the name
//! and address fact extractors. They are wired together by
//! [`AnalyzerSet::rule_based`], which is what the entity extractor runs on
//! by default.

pub mod facts;
pub mod morph;
pub mod ner;
pub mod segmenter;

use std::sync::Arc;

use crate::core::AnalyzerSet;

pub use facts::{RuleAddressExtractor, RuleNameExtractor};
pub use morph::{DictionaryNormalizer, SuffixMorphTagger};
pub use ner::RuleNerTagger;
pub use segmenter::RuleSegmenter;

impl AnalyzerSet {
    /// Build the full rule-based analyzer stack with the built-in gazetteer
    pub fn rule_based() -> Self {
        Self::rule_based_with_gazetteer(Vec::new(), Vec::new())
    }

    /// Build the rule-based stack, extending the NER gazetteer with extra
    /// lowercase person-name and location lemmas
    pub fn rule_based_with_gazetteer(
        person_names: Vec<String>,
        locations: Vec<String>,
    ) -> Self {
        tracing::debug!(
            extra_person_names = person_names.len(),
            extra_locations = locations.len(),
            "building rule-based analyzer set"
        );
        Self {
            segmenter: Arc::new(RuleSegmenter::new()),
            morph_tagger: Arc::new(SuffixMorphTagger::new()),
            normalizer: Arc::new(DictionaryNormalizer::new()),
            ner_tagger: Arc::new(RuleNerTagger::new().with_gazetteer(person_names, locations)),
            name_facts: Arc::new(RuleNameExtractor::new()),
            address_facts: Arc::new(RuleAddressExtractor::new()),
        }
    }
}
