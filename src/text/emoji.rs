//! Emoji-to-word substitution
//!
//! Replaces literal emoji sequences with words from a caller-supplied table
//! before any other cleanup runs, so the substituted words survive the
//! punctuation and symbol stripping that follows.

/// Replace every occurrence of each emoji with its word, padded with spaces
///
/// Padding keeps a substituted word from fusing with adjacent text when the
/// emoji sat flush against a word. The collapse of the resulting double
/// spaces is left to the later cleanup pass.
///
/// Pairs are applied in order; an emoji listed twice is rewritten by its
/// first entry only, since the second no longer finds a match.
pub fn replace_emoji<S: AsRef<str>>(text: &str, replacements: &[(S, S)]) -> String {
    let mut out = text.to_string();
    for (emoji, word) in replacements {
        let emoji = emoji.as_ref();
        if emoji.is_empty() {
            continue;
        }
        out = out.replace(emoji, &format!(" {} ", word.as_ref()));
    }
    out
}
