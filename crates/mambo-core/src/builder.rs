//! Record Builder: one input row to one canonical record.

use tracing::trace;

use mambo_map::HeaderMap;
use mambo_model::{CanonicalField, CanonicalRecord, redact_value};
use mambo_normalization::{NameParser, apply_name_casing, normalize_for_kind};
use mambo_standards::NameLexicon;

use crate::options::PipelineOptions;

/// Builds canonical records from positional rows.
///
/// Pure: the same row, header map, lexicon and options always give the
/// same record.
#[derive(Debug, Clone, Copy)]
pub struct RecordBuilder<'a> {
    header_map: &'a HeaderMap,
    lexicon: &'a NameLexicon,
    options: &'a PipelineOptions,
}

impl<'a> RecordBuilder<'a> {
    pub fn new(
        header_map: &'a HeaderMap,
        lexicon: &'a NameLexicon,
        options: &'a PipelineOptions,
    ) -> Self {
        Self {
            header_map,
            lexicon,
            options,
        }
    }

    /// Build the record for `row`. Cells past the end of `row` read as empty.
    pub fn build<S: AsRef<str>>(&self, row: &[S]) -> CanonicalRecord {
        let mut record = CanonicalRecord::with_source(&self.options.source_label);
        let mut collisions: Vec<String> = Vec::new();

        for column in self.header_map.mapped() {
            let Some(field) = column.target else {
                continue;
            };
            let raw = row.get(column.index).map(|cell| cell.as_ref()).unwrap_or("");
            let value = normalize_for_kind(field.kind(), raw);
            if value.is_empty() || record.fill(field, &value) {
                continue;
            }
            if record.get(field) != value {
                trace!(
                    field = %field,
                    header = %column.raw_header,
                    value = redact_value(&value),
                    "column collision, first value kept"
                );
                if self.options.collision_notes {
                    collisions.push(format!("{}: {}", column.raw_header.trim(), value));
                }
            }
        }

        self.complete_name(&mut record);
        for note in &collisions {
            record.append_note(note);
        }
        record
    }

    /// Fill name parts from `full_name`, apply casing and rebuild the
    /// display name.
    fn complete_name(&self, record: &mut CanonicalRecord) {
        let full_name = record.get(CanonicalField::FullName).to_string();
        if !full_name.is_empty() {
            let parsed = NameParser::new(self.lexicon).parse(&full_name);
            for (field, part) in CanonicalField::NAME_PARTS.iter().zip(parsed.parts()) {
                record.fill(*field, part);
            }
        }

        let mut name = record.name();
        apply_name_casing(&mut name, self.options.name_casing, self.lexicon);
        for (field, part) in CanonicalField::NAME_PARTS.iter().zip(name.parts()) {
            record.set(*field, part);
        }

        let display = name.display_name();
        if !display.is_empty() {
            record.set(CanonicalField::FullName, display);
        }
    }
}

/// Build one record; see [`RecordBuilder::build`].
pub fn build_record<S: AsRef<str>>(
    row: &[S],
    header_map: &HeaderMap,
    lexicon: &NameLexicon,
    options: &PipelineOptions,
) -> CanonicalRecord {
    RecordBuilder::new(header_map, lexicon, options).build(row)
}

#[cfg(test)]
mod tests {
    use mambo_map::resolve_headers;
    use mambo_standards::{AliasConflictPolicy, AliasMap};

    use super::*;

    fn lexicon() -> NameLexicon {
        NameLexicon::new(["dr"], ["jr"], ["de la", "van"]).unwrap()
    }

    fn aliases() -> AliasMap {
        AliasMap::from_pairs(
            [
                ("Name", CanonicalField::FullName),
                ("Given Name", CanonicalField::FirstName),
                ("Organization", CanonicalField::Company),
                ("Mobile", CanonicalField::PhoneMobile),
            ],
            AliasConflictPolicy::LastWins,
        )
        .unwrap()
    }

    #[test]
    fn row_is_normalized_into_fixed_fields() {
        let headers = ["Name", "E-mail Address", "Mobile", "Organization", "Hobby"];
        let map = resolve_headers(&headers, &aliases());
        let options = PipelineOptions::new("Gmail");
        let record = build_record(
            &[
                " Dr.  Maria de la Cruz ",
                " Maria@Example.com",
                "+1 (555) 010-2000",
                "  Acme   Corp ",
                "chess",
            ],
            &map,
            &lexicon(),
            &options,
        );

        assert_eq!(record.get(CanonicalField::Source), "Gmail");
        assert_eq!(record.get(CanonicalField::FullName), "Dr. Maria de la Cruz");
        assert_eq!(record.get(CanonicalField::Prefix), "Dr.");
        assert_eq!(record.get(CanonicalField::FirstName), "Maria");
        assert_eq!(record.get(CanonicalField::LastName), "de la Cruz");
        assert_eq!(record.get(CanonicalField::Email), "maria@example.com");
        assert_eq!(record.get(CanonicalField::PhoneMobile), "+15550102000");
        assert_eq!(record.get(CanonicalField::Company), "Acme Corp");
        assert!(record.values().iter().all(|value| value != "chess"));
    }

    #[test]
    fn explicit_name_parts_win_over_parsed_ones() {
        let map = resolve_headers(&["Name", "Given Name"], &aliases());
        let options = PipelineOptions::default();
        let record = build_record(&["Bob Jones", "Robert"], &map, &lexicon(), &options);
        assert_eq!(record.get(CanonicalField::FirstName), "Robert");
        assert_eq!(record.get(CanonicalField::LastName), "Jones");
        assert_eq!(record.get(CanonicalField::FullName), "Robert Jones");
    }

    #[test]
    fn collision_keeps_first_and_notes_the_rest() {
        let map = resolve_headers(&["Company", "Organization", "Notes"], &aliases());
        let options = PipelineOptions::default();
        let record = build_record(&["", "Acme", "met at expo"], &map, &lexicon(), &options);
        assert_eq!(record.get(CanonicalField::Company), "Acme");
        assert_eq!(record.get(CanonicalField::Notes), "met at expo");

        let record = build_record(&["Globex", "Acme", ""], &map, &lexicon(), &options);
        assert_eq!(record.get(CanonicalField::Company), "Globex");
        assert_eq!(record.get(CanonicalField::Notes), "Organization: Acme");

        let quiet = PipelineOptions::default().with_collision_notes(false);
        let record = build_record(&["Globex", "Acme", ""], &map, &lexicon(), &quiet);
        assert_eq!(record.get(CanonicalField::Notes), "");
    }

    #[test]
    fn short_row_degrades_gracefully() {
        let map = resolve_headers(&["Name", "Email", "Mobile"], &aliases());
        let options = PipelineOptions::new("iPhone");
        let record = build_record(&["Madonna"], &map, &lexicon(), &options);
        assert_eq!(record.get(CanonicalField::FirstName), "Madonna");
        assert_eq!(record.get(CanonicalField::FullName), "Madonna");
        assert!(record.is_blank(CanonicalField::Email));
        assert!(record.is_blank(CanonicalField::PhoneMobile));
    }

    #[test]
    fn unparseable_full_name_is_passed_through() {
        let map = resolve_headers(&["Name"], &aliases());
        let options = PipelineOptions::default();
        let record = build_record(&["  Dr.  "], &map, &lexicon(), &options);
        assert_eq!(record.get(CanonicalField::Prefix), "Dr.");
        assert_eq!(record.get(CanonicalField::FullName), "Dr.");

        let record = build_record(&[" ,, "], &map, &lexicon(), &options);
        assert_eq!(record.get(CanonicalField::FullName), ",,");
        assert!(record.name().is_empty());
    }
}
