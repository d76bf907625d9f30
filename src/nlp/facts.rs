//! Rule-based fact extraction from entity spans
//!
//! Splits a person span into first/patronymic/last name parts and a
//! location span into city/street/house address parts. Extraction runs as a
//! side validation step; its output never reaches the entity record.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::{AddressFact, Fact, FactExtractor, NameFact, Result, Span, SpanKind};
use crate::nlp::morph::{has_patronymic_suffix, has_surname_suffix, title_case, word_lemma};
use crate::nlp::ner::first_name_lemmas;

/// Name fact extractor for person spans
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleNameExtractor;

impl RuleNameExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl FactExtractor for RuleNameExtractor {
    fn extract(&self, span: &Span) -> Result<Option<Fact>> {
        if span.kind != SpanKind::Person {
            return Ok(None);
        }

        let mut fact = NameFact::default();
        for word in span.text.split_whitespace() {
            let lemma = word_lemma(&word.to_lowercase());

            if has_patronymic_suffix(&lemma) {
                fact.middle.get_or_insert_with(|| title_case(&lemma));
            } else if first_name_lemmas().contains(lemma.as_str()) {
                fact.first.get_or_insert_with(|| title_case(&lemma));
            } else if has_surname_suffix(&lemma) {
                fact.last.get_or_insert_with(|| title_case(&lemma));
            } else if fact.first.is_none() {
                fact.first = Some(title_case(&lemma));
            } else {
                fact.last.get_or_insert_with(|| title_case(&lemma));
            }
        }

        Ok(Some(Fact::Name(fact)))
    }
}

static CITY_MARKERS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["г", "гор", "город"].into_iter().collect());

static STREET_MARKERS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["ул", "улица", "пр", "просп", "проспект", "пер", "переулок", "наб", "набережная"]
        .into_iter()
        .collect()
});

/// Address fact extractor for location spans
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleAddressExtractor;

impl RuleAddressExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl FactExtractor for RuleAddressExtractor {
    fn extract(&self, span: &Span) -> Result<Option<Fact>> {
        if span.kind != SpanKind::Location {
            return Ok(None);
        }

        let mut fact = AddressFact::default();
        let mut expecting: Option<&str> = None;

        for word in span.text.split_whitespace() {
            let lower = word.trim_matches('.').to_lowercase();

            if CITY_MARKERS.contains(lower.as_str()) {
                expecting = Some("city");
                continue;
            }
            if STREET_MARKERS.contains(lower.as_str()) {
                expecting = Some("street");
                continue;
            }
            if lower.chars().all(|c| c.is_ascii_digit()) && !lower.is_empty() {
                fact.house.get_or_insert_with(|| lower.clone());
                expecting = None;
                continue;
            }

            let value = title_case(&word_lemma(&lower));
            match expecting.take() {
                Some("street") => {
                    fact.street.get_or_insert(value);
                },
                Some(_) => {
                    fact.city.get_or_insert(value);
                },
                None => {
                    fact.city.get_or_insert(value);
                },
            }
        }

        Ok(Some(Fact::Address(fact)))
    }
}
