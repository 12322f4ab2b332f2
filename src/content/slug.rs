use lazy_static::lazy_static;
use regex::Regex;

/// Turns display text into a lowercase, hyphen separated anchor id.
///
/// Non-ASCII letters are transliterated first, so `Ábaco` and `Abaco` share a
/// slug. The same text always gives the same slug, no de-duplication is done.
pub fn slugify(text: &str) -> String {
    lazy_static! {
        static ref WHITESPACE_REGEX: Regex = Regex::new(r"\s+").unwrap();
        static ref INVALID_CHARS_REGEX: Regex = Regex::new(r"[^a-z0-9_\-]+").unwrap();
        static ref HYPHEN_RUN_REGEX: Regex = Regex::new(r"-{2,}").unwrap();
    }

    let ascii = unidecode::unidecode(text).to_lowercase();
    let slug = WHITESPACE_REGEX.replace_all(ascii.trim(), "-");
    let slug = slug.replace('&', "-and-");
    let slug = INVALID_CHARS_REGEX.replace_all(&slug, "");
    let slug = HYPHEN_RUN_REGEX.replace_all(&slug, "-");

    slug.trim_matches('-').to_string()
}
