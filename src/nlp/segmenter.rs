//! Unicode-aware text segmentation

use unicode_segmentation::UnicodeSegmentation;

use crate::core::{PreprocessError, Result, Segmented, Segmenter, Sentence, Token};

/// Segmenter built on Unicode word and sentence boundaries
///
/// Tokens are word-boundary segments containing at least one alphanumeric
/// character, so punctuation-only segments are dropped. Text carrying NUL
/// bytes is rejected: downstream offset and replace machinery must never
/// see them.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// Create a new segmenter
    pub fn new() -> Self {
        Self
    }
}

impl Segmenter for RuleSegmenter {
    fn segment(&self, text: &str) -> Result<Segmented> {
        if text.contains('\u{0}') {
            return Err(PreprocessError::Input {
                message: "text contains NUL bytes".to_string(),
            });
        }

        let tokens = text
            .split_word_bound_indices()
            .filter(|(_, word)| word.chars().any(|c| c.is_alphanumeric()))
            .map(|(start, word)| Token {
                text: word.to_string(),
                start,
                end: start + word.len(),
            })
            .collect();

        let sentences = text
            .split_sentence_bound_indices()
            .filter(|(_, sentence)| !sentence.trim().is_empty())
            .map(|(start, sentence)| Sentence {
                text: sentence.to_string(),
                start,
                end: start + sentence.len(),
            })
            .collect();

        Ok(Segmented { tokens, sentences })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_carry_byte_offsets() {
        let text = "Иван поехал в Москву.";
        let segmented = RuleSegmenter::new().segment(text).unwrap();

        let words: Vec<&str> = segmented.tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, vec!["Иван", "поехал", "в", "Москву"]);

        for token in &segmented.tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_sentences_are_split() {
        let text = "Первое предложение. Второе предложение!";
        let segmented = RuleSegmenter::new().segment(text).unwrap();
        assert_eq!(segmented.sentences.len(), 2);
        assert!(segmented.sentences[0].text.starts_with("Первое"));
    }

    #[test]
    fn test_empty_text_yields_empty_segments() {
        let segmented = RuleSegmenter::new().segment("").unwrap();
        assert!(segmented.tokens.is_empty());
        assert!(segmented.sentences.is_empty());
    }

    #[test]
    fn test_nul_bytes_are_rejected() {
        let error = RuleSegmenter::new().segment("пло\u{0}хо").unwrap_err();
        assert!(matches!(error, PreprocessError::Input { .. }));
    }
}
