//! Russian cardinal number spelling

static UNITS: &[&str] = &[
    "", "один", "два", "три", "четыре", "пять", "шесть", "семь", "восемь",
    "девять",
];

// Thousands agree in the feminine
static UNITS_FEMININE: &[&str] = &[
    "", "одна", "две", "три", "четыре", "пять", "шесть", "семь", "восемь",
    "девять",
];

static TEENS: &[&str] = &[
    "десять", "одиннадцать", "двенадцать", "тринадцать", "четырнадцать",
    "пятнадцать", "шестнадцать", "семнадцать", "восемнадцать",
    "девятнадцать",
];

static TENS: &[&str] = &[
    "", "", "двадцать", "тридцать", "сорок", "пятьдесят", "шестьдесят",
    "семьдесят", "восемьдесят", "девяносто",
];

static HUNDREDS: &[&str] = &[
    "", "сто", "двести", "триста", "четыреста", "пятьсот", "шестьсот",
    "семьсот", "восемьсот", "девятьсот",
];

/// Scale words in (one, few, many) agreement forms, lowest scale first.
/// Goes up to 10^18, enough for every `u64` (seven three-digit groups).
static SCALES: &[(&str, &str, &str, bool)] = &[
    ("тысяча", "тысячи", "тысяч", true),
    ("миллион", "миллиона", "миллионов", false),
    ("миллиард", "миллиарда", "миллиардов", false),
    ("триллион", "триллиона", "триллионов", false),
    ("квадриллион", "квадриллиона", "квадриллионов", false),
    ("квинтиллион", "квинтиллиона", "квинтиллионов", false),
];

/// Spell a cardinal number in Russian
pub fn number_to_words(n: u64) -> String {
    if n == 0 {
        return "ноль".to_string();
    }

    // Split into groups of three digits, lowest first
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as usize);
        rest /= 1000;
    }

    let mut words = Vec::new();
    for (index, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if index == 0 {
            words.extend(triple(group, false));
        } else {
            let (one, few, many, feminine) = SCALES[index - 1];
            words.extend(triple(group, feminine));
            words.push(agreement_form(group as u64, one, few, many).to_string());
        }
    }
    words.join(" ")
}

/// Replace each digit-only whitespace token with its spelled-out form
///
/// Tokens that are not pure ASCII digits, or that overflow `u64`, pass
/// through unchanged. Output tokens are rejoined with single spaces.
pub fn numbers_to_words(text: &str) -> String {
    let converted: Vec<String> = text
        .split_whitespace()
        .map(|token| {
            if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) {
                match token.parse::<u64>() {
                    Ok(n) => number_to_words(n),
                    Err(_) => token.to_string(),
                }
            } else {
                token.to_string()
            }
        })
        .collect();
    converted.join(" ")
}

fn triple(n: usize, feminine: bool) -> Vec<String> {
    let mut words = Vec::new();
    if n >= 100 {
        words.push(HUNDREDS[n / 100].to_string());
    }
    let below_hundred = n % 100;
    if (10..20).contains(&below_hundred) {
        words.push(TEENS[below_hundred - 10].to_string());
    } else {
        if below_hundred >= 20 {
            words.push(TENS[below_hundred / 10].to_string());
        }
        let unit = below_hundred % 10;
        if unit > 0 {
            let table = if feminine { UNITS_FEMININE } else { UNITS };
            words.push(table[unit].to_string());
        }
    }
    words
}

fn agreement_form<'a>(n: u64, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    if (11..=14).contains(&(n % 100)) {
        return many;
    }
    match n % 10 {
        1 => one,
        2..=4 => few,
        _ => many,
    }
}
