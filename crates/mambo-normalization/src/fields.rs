//! Per-field value cleaning.
//!
//! Every function here is total. Values that cannot be cleaned are returned
//! trimmed but otherwise unchanged.

use mambo_model::FieldKind;

/// A cleaned email and whether it looks like an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedEmail {
    pub value: String,
    /// Exactly one `@` with a non-empty local part and domain, and no
    /// whitespace.
    pub is_valid: bool,
}

/// Trim, lowercase and strip a `mailto:` scheme.
///
/// Values that do not look like an address are passed through trimmed and
/// flagged invalid, so they are never used as a dedupe key.
pub fn normalize_email(raw: &str) -> NormalizedEmail {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();
    let candidate = lowered.strip_prefix("mailto:").unwrap_or(&lowered).trim();
    if looks_like_email(candidate) {
        NormalizedEmail {
            value: candidate.to_string(),
            is_valid: true,
        }
    } else {
        NormalizedEmail {
            value: trimmed.to_string(),
            is_valid: false,
        }
    }
}

/// The dedupe key for `raw`, or `None` when it is empty or invalid.
pub fn email_key(raw: &str) -> Option<String> {
    let email = normalize_email(raw);
    email.is_valid.then_some(email.value)
}

fn looks_like_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

/// Keep digits and a leading `+`.
///
/// `"+1 (555) 010-2000"` becomes `"+15550102000"`. Input without any digit is
/// returned trimmed.
pub fn normalize_phone(raw: &str) -> String {
    let trimmed = raw.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return trimmed.to_string();
    }
    if trimmed.starts_with('+') {
        format!("+{digits}")
    } else {
        digits
    }
}

/// Trim and collapse internal whitespace; casing is preserved.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean `raw` with the normalizer for `kind`.
pub fn normalize_for_kind(kind: FieldKind, raw: &str) -> String {
    match kind {
        FieldKind::Email => normalize_email(raw).value,
        FieldKind::Phone => normalize_phone(raw),
        FieldKind::Source | FieldKind::Name | FieldKind::Text => normalize_text(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_is_lowercased_and_trimmed() {
        let email = normalize_email("  Jane.Doe@Example.COM ");
        assert_eq!(email.value, "jane.doe@example.com");
        assert!(email.is_valid);
        assert_eq!(normalize_email("MAILTO:a@b.org").value, "a@b.org");
    }

    #[test]
    fn invalid_email_passes_through() {
        for raw in ["not an email", "a@b@c", "@example.com", "jane@", "Jane Doe@x.com"] {
            let email = normalize_email(raw);
            assert!(!email.is_valid, "{raw}");
            assert_eq!(email.value, raw);
        }
        assert_eq!(email_key(""), None);
        assert_eq!(email_key("x"), None);
        assert_eq!(email_key(" A@B.C "), Some("a@b.c".to_string()));
    }

    #[test]
    fn phone_keeps_digits_and_leading_plus() {
        assert_eq!(normalize_phone("+1 (555) 010-2000"), "+15550102000");
        assert_eq!(normalize_phone("(555) 010.2000 ext+1"), "55501020001");
        assert_eq!(normalize_phone("  n/a "), "n/a");
        assert_eq!(normalize_phone(""), "");
    }

    #[test]
    fn text_collapses_whitespace() {
        assert_eq!(normalize_text("  Acme \t  Corp\n"), "Acme Corp");
        assert_eq!(normalize_for_kind(FieldKind::Text, " McDONALD "), "McDONALD");
    }
}
