//! Russian stopword removal

use std::collections::HashSet;
use std::sync::LazyLock;

/// The built-in Russian stopword list, all lowercase
///
/// Numerals ("один", "два", "три") are deliberately absent: the stopword
/// pass runs after number spelling and must not eat its output.
pub static RUSSIAN_STOPWORDS: &[&str] = &[
    "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то",
    "все", "она", "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за",
    "бы", "по", "только", "ее", "мне", "было", "вот", "от", "меня", "еще",
    "нет", "о", "из", "ему", "теперь", "когда", "даже", "ну", "вдруг", "ли",
    "если", "уже", "или", "ни", "быть", "был", "него", "до", "вас", "нибудь",
    "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
    "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя",
    "их", "чем", "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже",
    "себе", "под", "будет", "ж", "тогда", "кто", "этот", "того", "потому",
    "этого", "какой", "совсем", "ним", "здесь", "этом", "это", "почти",
    "мой", "тем", "чтобы", "нее", "сейчас", "были", "куда", "зачем", "всех",
    "никогда", "можно", "при", "наконец", "об", "другой", "хоть",
    "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего",
    "них", "какая", "много", "разве", "эту", "моя", "впрочем",
    "хорошо", "свою", "этой", "перед", "иногда", "лучше", "чуть", "том",
    "нельзя", "такой", "им", "более", "всегда", "конечно", "всю", "между",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| RUSSIAN_STOPWORDS.iter().copied().collect());

/// Remove built-in stopwords from the text, rejoining with single spaces
///
/// Matching is case-insensitive; surviving tokens keep their original form.
pub fn remove_stopwords(text: &str) -> String {
    filter_tokens(text, |lower| STOPWORD_SET.contains(lower))
}

/// Remove built-in stopwords plus the caller's extras (compared lowercase)
pub fn remove_stopwords_with(text: &str, extra: &HashSet<String>) -> String {
    filter_tokens(text, |lower| {
        STOPWORD_SET.contains(lower) || extra.contains(lower)
    })
}

fn filter_tokens(text: &str, is_stopword: impl Fn(&str) -> bool) -> String {
    let kept: Vec<&str> = text
        .split_whitespace()
        .filter(|word| !is_stopword(&word.to_lowercase()))
        .collect();
    kept.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_stopwords() {
        let out = remove_stopwords("я пошёл в магазин за хлебом");
        assert_eq!(out, "пошёл магазин хлебом");
    }

    #[test]
    fn test_case_insensitive_match() {
        let out = remove_stopwords("Я пошёл В магазин");
        assert_eq!(out, "пошёл магазин");
    }

    #[test]
    fn test_all_stopwords_gives_empty() {
        assert_eq!(remove_stopwords("и вот не что"), "");
    }

    #[test]
    fn test_spelled_numerals_survive() {
        // Number spelling runs first; its output passes through untouched
        let out = remove_stopwords("это один два три кота");
        assert_eq!(out, "один два три кота");
    }

    #[test]
    fn test_extra_stopwords() {
        let extra: HashSet<String> = ["магазин".to_string()].into_iter().collect();
        let out = remove_stopwords_with("я пошёл в магазин", &extra);
        assert_eq!(out, "пошёл");
    }
}
