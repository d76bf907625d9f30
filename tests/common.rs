//! Shared fixtures for the integration tests

use std::sync::Arc;

use rutext::core::mock_analyzers::StaticNerTagger;
use rutext::core::{AnalyzerSet, EntityRecord, Span};

/// Rule-based analyzer set with the built-in gazetteer
pub fn analyzers() -> AnalyzerSet {
    AnalyzerSet::rule_based()
}

/// Rule-based set with the NER tagger swapped for canned spans
#[allow(dead_code)]
pub fn analyzers_with_spans(text: &str, spans: Vec<Span>) -> AnalyzerSet {
    let mut set = AnalyzerSet::rule_based();
    set.ner_tagger = Arc::new(StaticNerTagger::new().with_spans(text, spans));
    set
}

/// A record with known names and locations
#[allow(dead_code)]
pub fn sample_record() -> EntityRecord {
    EntityRecord {
        names: vec!["Иван Петров".to_string()],
        locations: vec!["Санкт Петербург".to_string()],
    }
}
