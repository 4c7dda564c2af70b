//! Deduplicator: collapse records that share a primary email.

use std::collections::HashMap;

use tracing::{debug, info, info_span};

use mambo_model::{CanonicalField, CanonicalRecord, redact_value};
use mambo_normalization::email_key;

/// Result of a dedupe pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DedupeOutcome {
    /// One record per group, in order of each group's first occurrence.
    pub records: Vec<CanonicalRecord>,
    /// Number of input records folded into an earlier one.
    pub merged: usize,
}

/// Group `records` by normalized primary email and merge each group.
///
/// The first record of a group is the base; every field blank in the base
/// is filled from later members in encounter order. Records whose email is
/// empty or does not look like an address are never merged. Running the
/// pass on its own output changes nothing.
pub fn dedupe_records(records: Vec<CanonicalRecord>) -> DedupeOutcome {
    let span = info_span!("dedupe", records = records.len());
    let _guard = span.enter();

    let mut output: Vec<CanonicalRecord> = Vec::with_capacity(records.len());
    let mut groups: HashMap<String, usize> = HashMap::new();
    let mut merged = 0usize;

    for record in records {
        let Some(key) = email_key(record.get(CanonicalField::Email)) else {
            output.push(record);
            continue;
        };
        match groups.get(&key) {
            Some(&base_idx) => {
                let filled = output[base_idx].fill_blanks_from(&record);
                merged += 1;
                debug!(email = redact_value(&key), filled, "merged duplicate record");
            }
            None => {
                groups.insert(key, output.len());
                output.push(record);
            }
        }
    }

    info!(output = output.len(), merged, "deduplicated records by email");
    DedupeOutcome {
        records: output,
        merged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(email: &str, company: &str) -> CanonicalRecord {
        let mut record = CanonicalRecord::with_source("test");
        record.set(CanonicalField::Email, email);
        record.set(CanonicalField::Company, company);
        record
    }

    #[test]
    fn later_record_fills_blank_fields() {
        let outcome = dedupe_records(vec![
            record("ann@example.com", ""),
            record("ANN@example.com ", "Acme"),
        ]);
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.merged, 1);
        assert_eq!(outcome.records[0].get(CanonicalField::Company), "Acme");
        assert_eq!(
            outcome.records[0].get(CanonicalField::Email),
            "ann@example.com"
        );
    }

    #[test]
    fn first_non_empty_wins_across_group() {
        let mut third = record("a@x.io", "Initech");
        third.set(CanonicalField::City, "Austin");
        let outcome = dedupe_records(vec![
            record("a@x.io", ""),
            record("b@x.io", "Globex"),
            record("a@x.io", "Acme"),
            third,
        ]);
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.records[0].get(CanonicalField::Company), "Acme");
        assert_eq!(outcome.records[0].get(CanonicalField::City), "Austin");
        assert_eq!(outcome.records[1].get(CanonicalField::Company), "Globex");
    }

    #[test]
    fn blank_and_invalid_emails_stay_separate() {
        let outcome = dedupe_records(vec![
            record("", "A"),
            record("", "B"),
            record("n/a", "C"),
            record("n/a", "D"),
        ]);
        assert_eq!(outcome.records.len(), 4);
        assert_eq!(outcome.merged, 0);
    }
}
