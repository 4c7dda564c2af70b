use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One of the fixed output columns of the canonical contact schema.
///
/// Declaration order is the output column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Source,
    FullName,
    Prefix,
    FirstName,
    MiddleName,
    LastName,
    Suffix,
    Email,
    Email2,
    PhoneMobile,
    PhoneWork,
    PhoneHome,
    Company,
    Title,
    Street,
    Street2,
    City,
    State,
    PostalCode,
    Country,
    Website,
    LinkedinProfile,
    Notes,
}

/// Number of canonical fields.
pub const FIELD_COUNT: usize = 23;

/// Which normalizer a field's values go through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Caller-supplied label, never taken from row content.
    Source,
    /// Name components and the display name.
    Name,
    Email,
    Phone,
    /// Free text: whitespace cleanup only, casing preserved.
    Text,
}

impl CanonicalField {
    /// All fields in output column order.
    pub const ALL: [CanonicalField; FIELD_COUNT] = [
        CanonicalField::Source,
        CanonicalField::FullName,
        CanonicalField::Prefix,
        CanonicalField::FirstName,
        CanonicalField::MiddleName,
        CanonicalField::LastName,
        CanonicalField::Suffix,
        CanonicalField::Email,
        CanonicalField::Email2,
        CanonicalField::PhoneMobile,
        CanonicalField::PhoneWork,
        CanonicalField::PhoneHome,
        CanonicalField::Company,
        CanonicalField::Title,
        CanonicalField::Street,
        CanonicalField::Street2,
        CanonicalField::City,
        CanonicalField::State,
        CanonicalField::PostalCode,
        CanonicalField::Country,
        CanonicalField::Website,
        CanonicalField::LinkedinProfile,
        CanonicalField::Notes,
    ];

    /// The name parts, in the order they are joined into a display name.
    pub const NAME_PARTS: [CanonicalField; 5] = [
        CanonicalField::Prefix,
        CanonicalField::FirstName,
        CanonicalField::MiddleName,
        CanonicalField::LastName,
        CanonicalField::Suffix,
    ];

    /// Output column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Source => "source",
            CanonicalField::FullName => "full_name",
            CanonicalField::Prefix => "prefix",
            CanonicalField::FirstName => "first_name",
            CanonicalField::MiddleName => "middle_name",
            CanonicalField::LastName => "last_name",
            CanonicalField::Suffix => "suffix",
            CanonicalField::Email => "email",
            CanonicalField::Email2 => "email_2",
            CanonicalField::PhoneMobile => "phone_mobile",
            CanonicalField::PhoneWork => "phone_work",
            CanonicalField::PhoneHome => "phone_home",
            CanonicalField::Company => "company",
            CanonicalField::Title => "title",
            CanonicalField::Street => "street",
            CanonicalField::Street2 => "street2",
            CanonicalField::City => "city",
            CanonicalField::State => "state",
            CanonicalField::PostalCode => "postal_code",
            CanonicalField::Country => "country",
            CanonicalField::Website => "website",
            CanonicalField::LinkedinProfile => "linkedin_profile",
            CanonicalField::Notes => "notes",
        }
    }

    /// Position of this field in the output row.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            CanonicalField::Source => FieldKind::Source,
            CanonicalField::FullName
            | CanonicalField::Prefix
            | CanonicalField::FirstName
            | CanonicalField::MiddleName
            | CanonicalField::LastName
            | CanonicalField::Suffix => FieldKind::Name,
            CanonicalField::Email | CanonicalField::Email2 => FieldKind::Email,
            CanonicalField::PhoneMobile | CanonicalField::PhoneWork | CanonicalField::PhoneHome => {
                FieldKind::Phone
            }
            _ => FieldKind::Text,
        }
    }

    /// True for fields a lookup table or header may target.
    ///
    /// `source` is always set from the caller's label.
    pub fn is_assignable(&self) -> bool {
        !matches!(self, CanonicalField::Source)
    }

    /// Output column names in order.
    pub fn header_row() -> [&'static str; FIELD_COUNT] {
        Self::ALL.map(|field| field.as_str())
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CanonicalField {
    type Err = ModelError;

    /// Parse an output column name, case-insensitive; spaces and hyphens
    /// are accepted in place of underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .to_lowercase()
            .split(|ch: char| ch.is_whitespace() || ch == '-' || ch == '_')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("_");
        CanonicalField::ALL
            .iter()
            .find(|field| field.as_str() == normalized)
            .copied()
            .ok_or_else(|| ModelError::UnknownField(s.trim().to_string()))
    }
}
