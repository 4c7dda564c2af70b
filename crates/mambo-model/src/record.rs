//! The canonical contact record.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::field::{CanonicalField, FIELD_COUNT};
use crate::name::ParsedName;

/// One contact in the fixed output schema.
///
/// Every field is always present; an empty string means "no value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CanonicalRecord {
    values: [String; FIELD_COUNT],
}

impl CanonicalRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty record carrying the given source label.
    pub fn with_source(label: &str) -> Self {
        let mut record = Self::new();
        record.set(CanonicalField::Source, label.trim());
        record
    }

    pub fn get(&self, field: CanonicalField) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: CanonicalField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    pub fn is_blank(&self, field: CanonicalField) -> bool {
        self.get(field).trim().is_empty()
    }

    /// Set `field` only if it is currently blank and `value` is not.
    ///
    /// Returns true if the value was taken.
    pub fn fill(&mut self, field: CanonicalField, value: &str) -> bool {
        fill_first_non_empty(&mut self.values[field.index()], value)
    }

    /// Fill every blank field from `other`. Returns the number of fields filled.
    pub fn fill_blanks_from(&mut self, other: &CanonicalRecord) -> usize {
        let mut filled = 0;
        for (slot, value) in self.values.iter_mut().zip(other.values.iter()) {
            if fill_first_non_empty(slot, value) {
                filled += 1;
            }
        }
        filled
    }

    /// Append a line to `notes`, separated by `"; "`.
    pub fn append_note(&mut self, note: &str) {
        let note = note.trim();
        if note.is_empty() {
            return;
        }
        let notes = &mut self.values[CanonicalField::Notes.index()];
        if !notes.is_empty() {
            notes.push_str("; ");
        }
        notes.push_str(note);
    }

    /// The five name parts as a `ParsedName`.
    pub fn name(&self) -> ParsedName {
        ParsedName {
            prefix: self.get(CanonicalField::Prefix).to_string(),
            first: self.get(CanonicalField::FirstName).to_string(),
            middle: self.get(CanonicalField::MiddleName).to_string(),
            last: self.get(CanonicalField::LastName).to_string(),
            suffix: self.get(CanonicalField::Suffix).to_string(),
        }
    }

    /// Values in output column order.
    pub fn values(&self) -> &[String; FIELD_COUNT] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        CanonicalField::ALL
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }
}

impl Serialize for CanonicalRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FIELD_COUNT))?;
        for (field, value) in self.iter() {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

/// First-non-empty-wins: write `candidate` into `slot` only when `slot` is
/// blank and `candidate` is not. Returns true if `slot` changed.
///
/// The record builder (column collisions within a row) and the deduplicator
/// (field fill across a group) both go through this function.
pub fn fill_first_non_empty(slot: &mut String, candidate: &str) -> bool {
    if !slot.trim().is_empty() || candidate.trim().is_empty() {
        return false;
    }
    *slot = candidate.to_string();
    true
}
