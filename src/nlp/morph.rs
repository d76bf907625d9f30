//! Dictionary-backed Russian morphology
//!
//! A small built-in table of inflected name/city forms plus case-suffix
//! stripping rules. This is not a full morphological analyzer (a non-goal);
//! it covers the proper-noun vocabulary the rule NER tagger recognizes and
//! passes everything else through unchanged.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::core::{MorphNormalizer, MorphTag, MorphTagger, Pos, Result, Span, Token};

/// Inflected form -> lemma, all lowercase. Covers the oblique cases of the
/// first names, surnames, and toponyms in the built-in gazetteer.
static FORMS: &[(&str, &str)] = &[
    // First names
    ("ивана", "иван"),
    ("ивану", "иван"),
    ("иваном", "иван"),
    ("иване", "иван"),
    ("петра", "пётр"),
    ("петру", "пётр"),
    ("петром", "пётр"),
    ("петре", "пётр"),
    ("марии", "мария"),
    ("марию", "мария"),
    ("марией", "мария"),
    ("анны", "анна"),
    ("анне", "анна"),
    ("анну", "анна"),
    ("анной", "анна"),
    ("алексея", "алексей"),
    ("алексею", "алексей"),
    ("сергея", "сергей"),
    ("сергею", "сергей"),
    ("ольги", "ольга"),
    ("ольге", "ольга"),
    ("ольгу", "ольга"),
    ("ольгой", "ольга"),
    ("елены", "елена"),
    ("елене", "елена"),
    ("елену", "елена"),
    ("еленой", "елена"),
    ("владимира", "владимир"),
    ("владимиру", "владимир"),
    ("андрея", "андрей"),
    ("андрею", "андрей"),
    ("михаила", "михаил"),
    ("михаилу", "михаил"),
    ("николая", "николай"),
    ("николаю", "николай"),
    ("павла", "павел"),
    ("павлу", "павел"),
    ("дмитрия", "дмитрий"),
    ("дмитрию", "дмитрий"),
    ("александра", "александр"),
    ("александру", "александр"),
    ("екатерины", "екатерина"),
    ("екатерине", "екатерина"),
    ("екатерину", "екатерина"),
    ("татьяны", "татьяна"),
    ("татьяне", "татьяна"),
    ("татьяну", "татьяна"),
    // Surnames
    ("петрова", "петров"),
    ("петрову", "петров"),
    ("петровым", "петров"),
    ("петрове", "петров"),
    ("иванова", "иванов"),
    ("иванову", "иванов"),
    ("ивановым", "иванов"),
    ("иванове", "иванов"),
    ("сидорова", "сидоров"),
    ("сидорову", "сидоров"),
    ("пушкина", "пушкин"),
    ("пушкину", "пушкин"),
    ("пушкиным", "пушкин"),
    ("пушкине", "пушкин"),
    ("чехова", "чехов"),
    ("чехову", "чехов"),
    ("толстого", "толстой"),
    ("толстому", "толстой"),
    ("толстым", "толстой"),
    ("толстом", "толстой"),
    // Toponyms
    ("москвы", "москва"),
    ("москве", "москва"),
    ("москву", "москва"),
    ("москвой", "москва"),
    ("петербурга", "петербург"),
    ("петербурге", "петербург"),
    ("петербургу", "петербург"),
    ("петербургом", "петербург"),
    ("россии", "россия"),
    ("россию", "россия"),
    ("россией", "россия"),
    ("твери", "тверь"),
    ("тверью", "тверь"),
    ("казани", "казань"),
    ("казанью", "казань"),
    ("новосибирска", "новосибирск"),
    ("новосибирске", "новосибирск"),
    ("екатеринбурга", "екатеринбург"),
    ("екатеринбурге", "екатеринбург"),
    ("сибири", "сибирь"),
    ("сибирью", "сибирь"),
    ("урала", "урал"),
    ("урале", "урал"),
    ("волги", "волга"),
    ("волге", "волга"),
    ("волгу", "волга"),
    ("невы", "нева"),
    ("неве", "нева"),
    ("неву", "нева"),
    ("крыма", "крым"),
    ("крыму", "крым"),
    ("крыме", "крым"),
    ("киева", "киев"),
    ("киеве", "киев"),
    ("минска", "минск"),
    ("минске", "минск"),
    ("лондона", "лондон"),
    ("лондоне", "лондон"),
    ("парижа", "париж"),
    ("париже", "париж"),
    ("берлина", "берлин"),
    ("берлине", "берлин"),
    ("ростова", "ростов"),
    ("ростове", "ростов"),
    ("ростову", "ростов"),
];

static FORMS_MAP: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FORMS.iter().copied().collect());

/// Look up the lemma of a lowercase word in the built-in form table
pub(crate) fn lemma_of(word: &str) -> Option<&'static str> {
    FORMS_MAP.get(word).copied()
}

/// Surname suffixes used for person-name evidence, longest first
pub(crate) static SURNAME_SUFFIXES: &[&str] = &[
    "ская", "цкая", "ский", "цкий", "енко", "чук", "ова", "ева", "ёва", "ина", "ына", "ов", "ев",
    "ёв", "ин", "ын", "ук", "юк",
];

/// Patronymic suffixes, longest first
pub(crate) static PATRONYMIC_SUFFIXES: &[&str] =
    &["инична", "овна", "евна", "ович", "евич", "ична"];

/// True when the lowercase word carries a Russian surname suffix
pub(crate) fn has_surname_suffix(word: &str) -> bool {
    word.chars().count() > 4 && SURNAME_SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
}

/// True when the lowercase word carries a Russian patronymic suffix
pub(crate) fn has_patronymic_suffix(word: &str) -> bool {
    word.chars().count() > 5
        && PATRONYMIC_SUFFIXES
            .iter()
            .any(|suffix| word.ends_with(suffix))
}

/// Strip a case ending from a surname-like lowercase word
///
/// Only applies where the remaining stem still looks like a surname, so
/// ordinary nouns are left alone.
pub(crate) fn strip_case_suffix(word: &str) -> Option<String> {
    for ending in ["ым", "ом", "ем", "ой", "ою"] {
        if let Some(stem) = word.strip_suffix(ending) {
            if stem.chars().count() >= 6 && SURNAME_SUFFIXES.iter().any(|s| stem.ends_with(s)) {
                return Some(stem.to_string());
            }
        }
    }
    for ending in ["а", "у", "е", "ы", "и"] {
        if let Some(stem) = word.strip_suffix(ending) {
            if stem.chars().count() >= 6
                && ["ов", "ев", "ёв", "ин", "ын"].iter().any(|s| stem.ends_with(s))
            {
                return Some(stem.to_string());
            }
        }
    }
    // Patronymics: "Сергеевича" -> "Сергеевич"
    for ending in ["ем", "а", "у", "е"] {
        if let Some(stem) = word.strip_suffix(ending) {
            if stem.chars().count() >= 6 && ["ович", "евич"].iter().any(|s| stem.ends_with(s)) {
                return Some(stem.to_string());
            }
        }
    }
    None
}

/// Lemma of a single lowercase word: table lookup first, suffix rules second,
/// identity last
pub(crate) fn word_lemma(word: &str) -> String {
    if let Some(lemma) = lemma_of(word) {
        return lemma.to_string();
    }
    strip_case_suffix(word).unwrap_or_else(|| word.to_string())
}

/// Uppercase the first character, keeping the rest as-is
pub(crate) fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Morphological tagger driven by suffix heuristics and the form table
#[derive(Debug, Clone, Copy, Default)]
pub struct SuffixMorphTagger;

impl SuffixMorphTagger {
    /// Create a new tagger
    pub fn new() -> Self {
        Self
    }

    fn pos_of(token: &Token, lower: &str) -> Pos {
        if lower.chars().all(|c| c.is_ascii_digit()) && !lower.is_empty() {
            return Pos::Numeral;
        }
        if starts_uppercase(&token.text) {
            return Pos::ProperNoun;
        }
        if lower.chars().count() <= 2 {
            return Pos::Other;
        }
        if ["ый", "ий", "ая", "яя", "ое", "ее", "ые", "ие"]
            .iter()
            .any(|s| lower.ends_with(s))
        {
            return Pos::Adjective;
        }
        if ["ть", "ться", "ет", "ют", "ит", "ат", "ял", "ил", "ли", "ла", "ло"]
            .iter()
            .any(|s| lower.ends_with(s))
        {
            return Pos::Verb;
        }
        Pos::Noun
    }
}

impl MorphTagger for SuffixMorphTagger {
    fn tag(&self, tokens: &[Token]) -> Result<Vec<MorphTag>> {
        Ok(tokens
            .iter()
            .map(|token| {
                let lower = token.text.to_lowercase();
                MorphTag {
                    pos: Self::pos_of(token, &lower),
                    normal: word_lemma(&lower),
                }
            })
            .collect())
    }
}

/// Normalizer that assembles a span's canonical form from its tokens' lemmas
///
/// Tokens covered by the span contribute their tagged lemma; capitalization
/// of the original surface is restored on each contributed lemma. When the
/// span does not align with any token (offsets from a foreign tagger), the
/// span's own words are normalized directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct DictionaryNormalizer;

impl DictionaryNormalizer {
    /// Create a new normalizer
    pub fn new() -> Self {
        Self
    }
}

impl MorphNormalizer for DictionaryNormalizer {
    fn normalize_span(&self, span: &Span, tokens: &[Token], tags: &[MorphTag]) -> Result<String> {
        let mut parts = Vec::new();
        for (index, token) in tokens.iter().enumerate() {
            if token.start >= span.start && token.end <= span.end {
                let lemma = tags
                    .get(index)
                    .map(|tag| tag.normal.clone())
                    .unwrap_or_else(|| word_lemma(&token.text.to_lowercase()));
                if starts_uppercase(&token.text) {
                    parts.push(title_case(&lemma));
                } else {
                    parts.push(lemma);
                }
            }
        }

        if parts.is_empty() {
            for word in span.text.split_whitespace() {
                let lemma = word_lemma(&word.to_lowercase());
                if starts_uppercase(word) {
                    parts.push(title_case(&lemma));
                } else {
                    parts.push(lemma);
                }
            }
        }

        Ok(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SpanKind;

    #[test]
    fn test_form_table_lookup() {
        assert_eq!(lemma_of("москву"), Some("москва"));
        assert_eq!(lemma_of("ивана"), Some("иван"));
        assert_eq!(lemma_of("собаке"), None);
    }

    #[test]
    fn test_case_suffix_stripping() {
        assert_eq!(strip_case_suffix("смирнова").as_deref(), Some("смирнов"));
        assert_eq!(strip_case_suffix("смирновым").as_deref(), Some("смирнов"));
        // Ordinary nouns are not touched
        assert_eq!(strip_case_suffix("корова"), None);
    }

    #[test]
    fn test_suffix_tagger_pos_and_lemma() {
        let tokens = vec![
            Token {
                text: "Ивана".to_string(),
                start: 0,
                end: 10,
            },
            Token {
                text: "видели".to_string(),
                start: 11,
                end: 23,
            },
            Token {
                text: "42".to_string(),
                start: 24,
                end: 26,
            },
        ];

        let tags = SuffixMorphTagger::new().tag(&tokens).unwrap();
        assert_eq!(tags[0].pos, Pos::ProperNoun);
        assert_eq!(tags[0].normal, "иван");
        assert_eq!(tags[1].pos, Pos::Verb);
        assert_eq!(tags[2].pos, Pos::Numeral);
    }

    #[test]
    fn test_normalizer_restores_capitalization() {
        let tokens = vec![
            Token {
                text: "Ивана".to_string(),
                start: 0,
                end: 10,
            },
            Token {
                text: "Петрова".to_string(),
                start: 11,
                end: 25,
            },
        ];
        let tags = SuffixMorphTagger::new().tag(&tokens).unwrap();
        let span = Span::new("Ивана Петрова", 0, 25, SpanKind::Person);

        let normal = DictionaryNormalizer::new()
            .normalize_span(&span, &tokens, &tags)
            .unwrap();
        assert_eq!(normal, "Иван Петров");
    }

    #[test]
    fn test_normalizer_falls_back_without_token_alignment() {
        let span = Span::new("Москву", 500, 512, SpanKind::Location);
        let normal = DictionaryNormalizer::new()
            .normalize_span(&span, &[], &[])
            .unwrap();
        assert_eq!(normal, "Москва");
    }
}
