//! Named-entity extraction and removal

use serde::{Deserialize, Serialize};

use crate::core::{
    AnalyzerSet, EntityRecord, FactExtractor, MorphNormalizer, MorphTagger, NerTagger, Result,
    Segmenter, SpanKind,
};

/// Which entity categories [`EntityExtractor::extract`] deletes from the text
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionOptions {
    /// Delete person-name spans from the returned text
    pub delete_names: bool,
    /// Delete location spans from the returned text
    pub delete_addresses: bool,
}

/// Finds person and location entities, records their canonical forms, and
/// optionally deletes their surface forms from the text
#[derive(Debug, Clone)]
pub struct EntityExtractor {
    analyzers: AnalyzerSet,
}

impl EntityExtractor {
    /// Create an extractor over the given analyzer set
    pub fn new(analyzers: AnalyzerSet) -> Self {
        Self { analyzers }
    }

    /// Extract entities from the text
    ///
    /// Returns the (possibly reduced) text and the record of canonical
    /// entity forms, in document order. Deletion removes every occurrence of
    /// a span's surface string, not just the occurrence at the span's
    /// offsets, so an entity string that also appears as ordinary text is
    /// removed there too.
    pub fn extract(
        &self,
        text: &str,
        options: &ExtractionOptions,
    ) -> Result<(String, EntityRecord)> {
        if text.trim().is_empty() {
            return Ok((text.to_string(), EntityRecord::default()));
        }

        let segmented = self.analyzers.segmenter.segment(text)?;
        let tags = self.analyzers.morph_tagger.tag(&segmented.tokens)?;
        let mut spans = self.analyzers.ner_tagger.tag(text, &segmented.tokens)?;

        for span in &mut spans {
            let normal = self
                .analyzers
                .normalizer
                .normalize_span(span, &segmented.tokens, &tags)?;
            span.normal = Some(normal);
        }

        let mut record = EntityRecord::default();
        let mut reduced = text.to_string();
        for span in &spans {
            let normal = span.normal.clone().unwrap_or_else(|| span.text.clone());
            match span.kind {
                SpanKind::Person => {
                    let fact = self.analyzers.name_facts.extract(span)?;
                    tracing::debug!(span = %span.text, ?fact, "person span");
                    record.names.push(normal);
                    if options.delete_names {
                        reduced = reduced.replace(&span.text, "");
                    }
                }
                SpanKind::Location => {
                    let fact = self.analyzers.address_facts.extract(span)?;
                    tracing::debug!(span = %span.text, ?fact, "location span");
                    record.locations.push(normal);
                    if options.delete_addresses {
                        reduced = reduced.replace(&span.text, "");
                    }
                }
                SpanKind::Other => {}
            }
        }

        tracing::debug!(
            names = record.names.len(),
            locations = record.locations.len(),
            "entity extraction finished"
        );
        Ok((reduced, record))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::mock_analyzers::{StaticNerTagger, UnavailableAnalyzer};
    use crate::core::{PreprocessError, Span};

    fn rule_extractor() -> EntityExtractor {
        EntityExtractor::new(AnalyzerSet::rule_based())
    }

    #[test]
    fn test_extracts_names_and_locations() {
        let extractor = rule_extractor();
        let text = "Иван Петров уехал в Москву";
        let (reduced, record) = extractor
            .extract(text, &ExtractionOptions::default())
            .unwrap();

        assert_eq!(reduced, text);
        assert_eq!(record.names, vec!["Иван Петров"]);
        assert_eq!(record.locations, vec!["Москва"]);
    }

    #[test]
    fn test_deletes_all_occurrences() {
        let extractor = rule_extractor();
        let options = ExtractionOptions {
            delete_names: true,
            delete_addresses: false,
        };
        let (reduced, record) = extractor
            .extract("Иван пришёл и Иван ушёл", &options)
            .unwrap();

        assert_eq!(record.names, vec!["Иван", "Иван"]);
        assert_eq!(reduced, " пришёл и  ушёл");
    }

    #[test]
    fn test_blank_text_is_noop() {
        let extractor = rule_extractor();
        for text in ["", "   "] {
            let (reduced, record) = extractor
                .extract(text, &ExtractionOptions::default())
                .unwrap();
            assert_eq!(reduced, text);
            assert!(record.is_empty());
        }
    }

    #[test]
    fn test_unavailable_tool_surfaces_error() {
        let mut analyzers = AnalyzerSet::rule_based();
        analyzers.ner_tagger = Arc::new(UnavailableAnalyzer { tool: "ner-tagger" });
        let extractor = EntityExtractor::new(analyzers);

        let err = extractor
            .extract("Иван Петров", &ExtractionOptions::default())
            .unwrap_err();
        assert!(matches!(
            err,
            PreprocessError::ToolUnavailable { ref tool, .. } if tool == "ner-tagger"
        ));
    }

    #[test]
    fn test_static_tagger_drives_record_order() {
        let text = "Анна была в Казани";
        let tagger = StaticNerTagger::new().with_spans(
            text,
            vec![
                Span::new("Анна", 0, 8, SpanKind::Person),
                Span::new("Казани", 21, 33, SpanKind::Location),
            ],
        );
        let mut analyzers = AnalyzerSet::rule_based();
        analyzers.ner_tagger = Arc::new(tagger);

        let (_, record) = EntityExtractor::new(analyzers)
            .extract(text, &ExtractionOptions::default())
            .unwrap();
        assert_eq!(record.names, vec!["Анна"]);
        assert_eq!(record.locations, vec!["Казань"]);
    }
}
