use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MAIL_REGEX: Regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    )
    .unwrap();
}

/// Strip line breaks, separators and the replacement character that break
/// single-line rendering.
pub fn filter_unicode_symbol(s: &str) -> String {
    s.chars()
        .filter(|c| {
            !matches!(
                c,
                '\u{000A}'
                    | '\u{000B}'
                    | '\u{000C}'
                    | '\u{000D}'
                    | '\u{0085}'
                    | '\u{2028}'
                    | '\u{2029}'
                    | '\u{FFFD}'
            )
        })
        .collect()
}

pub fn is_valid_string(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Remove a single trailing `suffix`, if present.
pub fn trim_suffix<'a>(s: &'a str, suffix: &str) -> &'a str {
    s.strip_suffix(suffix).unwrap_or(s)
}

pub fn is_valid_email(s: &str) -> bool {
    MAIL_REGEX.is_match(s)
}
