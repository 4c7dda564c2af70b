//! Key normalization shared by the lookup tables and their consumers.

/// Normalize a raw CSV header into an alias key.
///
/// Strips a byte-order mark, lowercases, turns punctuation into spaces and
/// collapses whitespace: `" E-mail 1 - Value "` becomes `"e mail 1 value"`.
pub fn normalize_header_key(raw: &str) -> String {
    let cleaned: String = raw
        .trim()
        .trim_matches('\u{feff}')
        .to_lowercase()
        .chars()
        .map(|ch| if ch.is_alphanumeric() { ch } else { ' ' })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalize a name token or token phrase for lexicon comparison.
///
/// Lowercases, drops periods and collapses whitespace, so `"Dr."` and `"dr"`
/// compare equal and `"Ph.D."` compares equal to `"phd"`.
pub fn normalize_token(raw: &str) -> String {
    raw.to_lowercase()
        .replace('.', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
