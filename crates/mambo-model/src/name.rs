use serde::{Deserialize, Serialize};

/// A full name split into its five components.
///
/// Empty strings mark absent parts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub prefix: String,
    pub first: String,
    pub middle: String,
    pub last: String,
    pub suffix: String,
}

impl ParsedName {
    pub fn is_empty(&self) -> bool {
        self.parts().iter().all(|part| part.is_empty())
    }

    /// Parts in display order: prefix, first, middle, last, suffix.
    pub fn parts(&self) -> [&str; 5] {
        [
            &self.prefix,
            &self.first,
            &self.middle,
            &self.last,
            &self.suffix,
        ]
    }

    /// Non-empty parts joined by single spaces.
    pub fn display_name(&self) -> String {
        self.parts()
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
