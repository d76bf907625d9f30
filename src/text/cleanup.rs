//! Early text cleanup: markup, punctuation, and whitespace normalization

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());
static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Which cleanup passes [`early_preproc`] applies
///
/// Digits are kept by default because number-to-word conversion runs after
/// cleanup and needs them intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupOptions {
    /// Replace HTML tags with spaces and decode the common entities
    pub strip_html: bool,
    /// Remove punctuation and symbol characters
    pub strip_punctuation: bool,
    /// Remove underscores (kept by the punctuation class)
    pub strip_underscores: bool,
    /// Remove digit runs
    pub strip_digits: bool,
}

impl Default for CleanupOptions {
    fn default() -> Self {
        Self {
            strip_html: true,
            strip_punctuation: true,
            strip_underscores: true,
            strip_digits: false,
        }
    }
}

/// Clean raw text according to the options
///
/// Passes run in a fixed order regardless of the options: markup first, so
/// tag contents never leak punctuation back in, then character classes, then
/// a final whitespace collapse that also trims the ends.
pub fn early_preproc(text: &str, options: &CleanupOptions) -> String {
    let mut out = text.to_string();
    if options.strip_html {
        out = HTML_TAG.replace_all(&out, " ").into_owned();
        out = decode_entities(&out);
    }
    if options.strip_punctuation {
        out = PUNCTUATION.replace_all(&out, "").into_owned();
    }
    if options.strip_underscores {
        out = out.replace('_', "");
    }
    if options.strip_digits {
        out = remove_digits(&out);
    }
    WHITESPACE.replace_all(&out, " ").trim().to_string()
}

/// Remove every digit run from the text
pub fn remove_digits(text: &str) -> String {
    DIGITS.replace_all(text, "").into_owned()
}

// `&amp;` goes last so a double-escaped entity decodes exactly one level
fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&amp;", "&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_html_tags() {
        let out = early_preproc("<p>Привет, <b>мир</b>!</p>", &CleanupOptions::default());
        assert_eq!(out, "Привет мир");
    }

    #[test]
    fn test_collapses_whitespace_and_trims() {
        let out = early_preproc("  много \n пробелов \r\n тут  ", &CleanupOptions::default());
        assert_eq!(out, "много пробелов тут");
    }

    #[test]
    fn test_digits_kept_by_default() {
        let out = early_preproc("заказ 42 оформлен", &CleanupOptions::default());
        assert_eq!(out, "заказ 42 оформлен");
    }

    #[test]
    fn test_strip_digits_option() {
        let options = CleanupOptions {
            strip_digits: true,
            ..CleanupOptions::default()
        };
        assert_eq!(early_preproc("заказ 42 оформлен", &options), "заказ оформлен");
    }

    #[test]
    fn test_underscores_removed() {
        let out = early_preproc("иван_петров пришёл", &CleanupOptions::default());
        assert_eq!(out, "иванпетров пришёл");
    }

    #[test]
    fn test_punctuation_removed_cyrillic_kept() {
        let out = early_preproc("ну, что-же... это?!", &CleanupOptions::default());
        assert_eq!(out, "ну чтоже это");
    }

    #[test]
    fn test_entities_decoded() {
        let out = early_preproc("цена&nbsp;высока &amp; растёт", &CleanupOptions::default());
        assert_eq!(out, "цена высока растёт");
    }

    #[test]
    fn test_double_escaped_entity_decodes_one_level() {
        let options = CleanupOptions {
            strip_punctuation: false,
            ..CleanupOptions::default()
        };
        assert_eq!(early_preproc("a &amp;lt; b", &options), "a &lt; b");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(early_preproc("", &CleanupOptions::default()), "");
    }
}
