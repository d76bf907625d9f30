//! Rule-based named-entity tagging for Russian text
//!
//! Gazetteer and suffix heuristics, no models: first names and toponyms come
//! from a built-in lemma gazetteer (extendable through configuration),
//! surnames and patronymics are recognized by their suffixes, and toponym
//! markers ("г.", "ул.", …) promote the following capitalized token to a
//! location. Location evidence takes precedence over surname suffixes, so
//! "Ростов" stays a location despite its "-ов" ending.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::core::{NerTagger, Result, Span, SpanKind, Token};
use crate::nlp::morph::{has_patronymic_suffix, has_surname_suffix, word_lemma};

static FIRST_NAME_LEMMAS: &[&str] = &[
    "иван",
    "пётр",
    "петр",
    "мария",
    "анна",
    "алексей",
    "александр",
    "сергей",
    "дмитрий",
    "михаил",
    "николай",
    "павел",
    "ольга",
    "елена",
    "татьяна",
    "наталья",
    "владимир",
    "андрей",
    "екатерина",
    "юрий",
    "ирина",
    "антон",
    "фёдор",
    "федор",
    "борис",
    "григорий",
    "василий",
    "степан",
    "илья",
    "егор",
    "максим",
    "роман",
    "олег",
    "светлана",
    "людмила",
    "галина",
    "вера",
    "надежда",
    "любовь",
];

static LOCATION_LEMMAS: &[&str] = &[
    "москва",
    "петербург",
    "санкт",
    "россия",
    "тверь",
    "казань",
    "новосибирск",
    "екатеринбург",
    "сибирь",
    "урал",
    "волга",
    "нева",
    "крым",
    "киев",
    "минск",
    "лондон",
    "париж",
    "берлин",
    "ростов",
    "сочи",
    "европа",
    "азия",
    "америка",
];

/// Markers that promote the following capitalized token to a location
static LOCATION_MARKERS: &[&str] = &[
    "г",
    "гор",
    "город",
    "ул",
    "улица",
    "пр",
    "просп",
    "проспект",
    "пер",
    "переулок",
    "наб",
    "набережная",
    "обл",
    "область",
    "пос",
    "посёлок",
    "поселок",
    "дер",
    "деревня",
    "село",
    "река",
    "озеро",
];

static MARKER_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LOCATION_MARKERS.iter().copied().collect());

static FIRST_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| FIRST_NAME_LEMMAS.iter().copied().collect());

/// Built-in first-name lemma gazetteer, shared with the fact extractors
pub(crate) fn first_name_lemmas() -> &'static HashSet<&'static str> {
    &FIRST_NAME_SET
}

/// Gazetteer-driven NER tagger producing non-overlapping spans in document
/// order
#[derive(Debug, Clone)]
pub struct RuleNerTagger {
    first_names: HashSet<String>,
    locations: HashSet<String>,
}

impl Default for RuleNerTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleNerTagger {
    /// Create a tagger with the built-in gazetteer
    pub fn new() -> Self {
        Self {
            first_names: FIRST_NAME_LEMMAS.iter().map(|s| s.to_string()).collect(),
            locations: LOCATION_LEMMAS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Extend the gazetteer with extra lowercase lemmas
    pub fn with_gazetteer<I, J>(mut self, person_names: I, locations: J) -> Self
    where
        I: IntoIterator<Item = String>,
        J: IntoIterator<Item = String>,
    {
        self.first_names
            .extend(person_names.into_iter().map(|s| s.to_lowercase()));
        self.locations
            .extend(locations.into_iter().map(|s| s.to_lowercase()));
        self
    }

    fn starts_uppercase(word: &str) -> bool {
        word.chars().next().is_some_and(|c| c.is_uppercase())
    }

    fn is_location_token(&self, token: &Token, after_marker: bool) -> bool {
        if !Self::starts_uppercase(&token.text) {
            return false;
        }
        let lemma = word_lemma(&token.text.to_lowercase());
        self.locations.contains(&lemma) || after_marker
    }

    fn is_person_token(&self, token: &Token) -> bool {
        if !Self::starts_uppercase(&token.text) {
            return false;
        }
        let lemma = word_lemma(&token.text.to_lowercase());
        if self.locations.contains(&lemma) {
            return false;
        }
        self.first_names.contains(&lemma)
            || has_patronymic_suffix(&lemma)
            || has_surname_suffix(&lemma)
    }

    /// True when nothing but whitespace separates two adjacent tokens
    fn adjacent(text: &str, previous: &Token, next: &Token) -> bool {
        previous.end == next.start
            || text
                .get(previous.end..next.start)
                .is_some_and(|gap| gap.chars().all(char::is_whitespace))
    }

    /// Marker adjacency additionally tolerates the abbreviation dot ("г.")
    fn marker_adjacent(text: &str, previous: &Token, next: &Token) -> bool {
        previous.end == next.start
            || text
                .get(previous.end..next.start)
                .is_some_and(|gap| gap.chars().all(|c| c.is_whitespace() || c == '.'))
    }
}

impl NerTagger for RuleNerTagger {
    fn tag(&self, text: &str, tokens: &[Token]) -> Result<Vec<Span>> {
        let mut spans = Vec::new();
        let mut index = 0;

        while index < tokens.len() {
            let token = &tokens[index];
            let after_marker = index > 0
                && MARKER_SET.contains(tokens[index - 1].text.to_lowercase().as_str())
                && Self::marker_adjacent(text, &tokens[index - 1], token);

            if self.is_location_token(token, after_marker) {
                let start = index;
                let mut end = index;
                while end + 1 < tokens.len()
                    && Self::adjacent(text, &tokens[end], &tokens[end + 1])
                    && self.is_location_token(&tokens[end + 1], false)
                {
                    end += 1;
                }
                spans.push(Span::new(
                    text[tokens[start].start..tokens[end].end].to_string(),
                    tokens[start].start,
                    tokens[end].end,
                    SpanKind::Location,
                ));
                index = end + 1;
                continue;
            }

            if self.is_person_token(token) {
                let start = index;
                let mut end = index;
                while end + 1 < tokens.len()
                    && Self::adjacent(text, &tokens[end], &tokens[end + 1])
                    && self.is_person_token(&tokens[end + 1])
                {
                    end += 1;
                }
                spans.push(Span::new(
                    text[tokens[start].start..tokens[end].end].to_string(),
                    tokens[start].start,
                    tokens[end].end,
                    SpanKind::Person,
                ));
                index = end + 1;
                continue;
            }

            index += 1;
        }

        tracing::debug!(spans = spans.len(), "rule NER tagging finished");
        Ok(spans)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Segmenter;
    use crate::nlp::segmenter::RuleSegmenter;

    fn tag(text: &str) -> Vec<Span> {
        let segmented = RuleSegmenter::new().segment(text).unwrap();
        RuleNerTagger::new().tag(text, &segmented.tokens).unwrap()
    }

    #[test]
    fn test_person_and_location_spans() {
        let spans = tag("Иван Петров поехал в Москву.");
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "Иван Петров");
        assert_eq!(spans[0].kind, SpanKind::Person);
        assert_eq!(spans[1].text, "Москву");
        assert_eq!(spans[1].kind, SpanKind::Location);
    }

    #[test]
    fn test_multi_token_location() {
        let spans = tag("Он живёт в Санкт Петербурге давно.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Санкт Петербурге");
        assert_eq!(spans[0].kind, SpanKind::Location);
    }

    #[test]
    fn test_location_wins_over_surname_suffix() {
        let spans = tag("Поезд прибыл в Ростов утром.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].kind, SpanKind::Location);
    }

    #[test]
    fn test_marker_promotes_unknown_token() {
        let spans = tag("Совещание прошло в г. Зеленоград вчера.");
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "Зеленоград");
        assert_eq!(spans[0].kind, SpanKind::Location);
    }

    #[test]
    fn test_plain_text_has_no_spans() {
        assert!(tag("обычный текст без имён и адресов").is_empty());
    }

    #[test]
    fn test_gazetteer_extension() {
        let text = "Зухра уехала в Бугульму.";
        let segmented = RuleSegmenter::new().segment(text).unwrap();
        let tagger = RuleNerTagger::new().with_gazetteer(
            vec!["зухра".to_string()],
            vec!["бугульма".to_string(), "бугульму".to_string()],
        );
        let spans = tagger.tag(text, &segmented.tokens).unwrap();
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].kind, SpanKind::Person);
        assert_eq!(spans[1].kind, SpanKind::Location);
    }
}
