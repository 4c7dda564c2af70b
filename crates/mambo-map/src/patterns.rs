//! Fallback rules applied when the alias table has no entry.

use mambo_model::CanonicalField;

/// Words that make an email-looking header describe something other than
/// the address itself (`"E-mail 1 - Type"`, `"Email Opt Out"`).
const EMAIL_QUALIFIERS: &[&str] = &[
    "type",
    "label",
    "kind",
    "status",
    "verified",
    "format",
    "opt",
    "subscribed",
    "subscription",
    "preference",
    "preferences",
];

/// Canonical field whose name, with `_` read as a space, equals `key`.
///
/// `source` never matches.
pub fn canonical_name_match(key: &str) -> Option<CanonicalField> {
    CanonicalField::ALL
        .iter()
        .copied()
        .filter(CanonicalField::is_assignable)
        .find(|field| field.as_str().replace('_', " ") == key)
}

/// True if a normalized header names an email address column.
///
/// Only the word `email` (or `e mail`) counts. Other spellings belong in the
/// alias table.
pub fn is_email_header(key: &str) -> bool {
    let tokens: Vec<&str> = key.split(' ').collect();
    let mentions_email = tokens.contains(&"email")
        || tokens.windows(2).any(|pair| *pair == ["e", "mail"]);
    mentions_email && !tokens.iter().any(|token| EMAIL_QUALIFIERS.contains(token))
}
