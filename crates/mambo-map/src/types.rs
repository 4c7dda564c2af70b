//! Header resolution results.

use serde::Serialize;

use mambo_model::CanonicalField;

/// How a header was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// Exact match in the alias table.
    Alias,
    /// The header already is a canonical field name.
    CanonicalName,
    /// Matched by the email heuristic.
    Heuristic,
    /// No match; the column is dropped.
    Unmapped,
}

/// Resolution of one input column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMapping {
    /// Position of the column in the input.
    pub index: usize,
    /// Header exactly as it appeared in the input.
    pub raw_header: String,
    /// Normalized lookup key.
    pub normalized: String,
    pub target: Option<CanonicalField>,
    pub resolution: Resolution,
}

/// Resolution of every input column, in input order.
///
/// Several columns may share a target; all of their positions are kept so
/// the record builder can apply its precedence rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeaderMap {
    pub columns: Vec<ColumnMapping>,
}

impl HeaderMap {
    /// Target of the column at `index`, if it is mapped.
    pub fn target(&self, index: usize) -> Option<CanonicalField> {
        self.columns.get(index).and_then(|column| column.target)
    }

    /// Column positions resolved to `field`, in input order.
    pub fn positions(&self, field: CanonicalField) -> Vec<usize> {
        self.columns
            .iter()
            .filter(|column| column.target == Some(field))
            .map(|column| column.index)
            .collect()
    }

    pub fn mapped(&self) -> impl Iterator<Item = &ColumnMapping> {
        self.columns.iter().filter(|column| column.target.is_some())
    }

    /// Raw headers of dropped columns.
    pub fn unmapped_headers(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.target.is_none())
            .map(|column| column.raw_header.as_str())
            .collect()
    }

    pub fn is_mapped(&self, field: CanonicalField) -> bool {
        self.columns.iter().any(|column| column.target == Some(field))
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
