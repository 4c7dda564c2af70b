use std::fs;
use std::path::Path;

use mambo_core::{
    NameCasing, PipelineError, PipelineOptions, dedupe_records, run, run_with_lookups,
};
use mambo_model::{CanonicalField, CanonicalRecord, RawTable};
use mambo_normalization::email_key;
use mambo_standards::{
    AliasConflictPolicy, AliasMap, LookupLoadError, Lookups, NameLexicon, default_lookups_root,
    load_lookups,
};
use proptest::prelude::*;

fn table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    let mut table = RawTable::new(headers.iter().map(|h| h.to_string()).collect());
    for row in rows {
        table.push_row(row.iter().map(|cell| cell.to_string()).collect());
    }
    table
}

fn shipped() -> Lookups {
    load_lookups(&default_lookups_root()).expect("load shipped lookups")
}

fn small_lookups() -> Lookups {
    let aliases = AliasMap::from_pairs(
        [
            ("Name", CanonicalField::FullName),
            ("Organization", CanonicalField::Company),
        ],
        AliasConflictPolicy::LastWins,
    )
    .unwrap();
    let lexicon = NameLexicon::new(["dr"], ["jr"], ["van"]).unwrap();
    Lookups::from_parts(aliases, lexicon)
}

#[test]
fn google_export_end_to_end() {
    let input = table(
        &[
            "Name",
            "Given Name",
            "Family Name",
            "E-mail 1 - Type",
            "E-mail 1 - Value",
            "Phone 1 - Value",
            "Organization 1 - Name",
            "Group Membership",
        ],
        &[
            &[
                "Maria de la Cruz",
                "",
                "",
                "* Home",
                "Maria@Example.com",
                "(555) 010-2000",
                "Acme",
                "* myContacts",
            ],
            &["Smith, John", "", "", "", "", "555.010.3000", "", ""],
        ],
    );
    let options = PipelineOptions::new("Gmail");
    let output = run(&input, &default_lookups_root(), &options).expect("run pipeline");

    assert_eq!(output.records.len(), 2);
    let maria = &output.records[0];
    assert_eq!(maria.get(CanonicalField::Source), "Gmail");
    assert_eq!(maria.get(CanonicalField::FirstName), "Maria");
    assert_eq!(maria.get(CanonicalField::LastName), "de la Cruz");
    assert_eq!(maria.get(CanonicalField::Email), "maria@example.com");
    assert_eq!(maria.get(CanonicalField::Company), "Acme");

    let john = &output.records[1];
    assert_eq!(john.get(CanonicalField::FirstName), "John");
    assert_eq!(john.get(CanonicalField::LastName), "Smith");
    assert_eq!(john.get(CanonicalField::FullName), "John Smith");

    let report = &output.report;
    assert_eq!(report.input_rows, 2);
    assert_eq!(report.output_rows, 2);
    assert_eq!(report.rows_without_valid_email, 1);
    assert_eq!(report.rows_without_name, 0);
    assert!(report.unmapped_headers().contains(&"E-mail 1 - Type"));
    assert!(report.unmapped_headers().contains(&"Group Membership"));
}

#[test]
fn duplicate_emails_are_merged() {
    let input = table(
        &["Name", "Email", "Company"],
        &[
            &["Ann Lee", "ann@example.com", ""],
            &["Bo Chen", "bo@example.com", "Globex"],
            &["Ann Lee", " ANN@example.com", "Acme"],
        ],
    );
    let output = run_with_lookups(&input, &small_lookups(), &PipelineOptions::default());
    assert_eq!(output.records.len(), 2);
    assert_eq!(output.records[0].get(CanonicalField::Company), "Acme");
    assert_eq!(output.report.merged_rows, 1);

    let options = PipelineOptions::default().with_dedupe(false);
    let output = run_with_lookups(&input, &small_lookups(), &options);
    assert_eq!(output.records.len(), 3);
    assert_eq!(output.records[0].get(CanonicalField::Company), "");
}

#[test]
fn title_casing_option_applies() {
    let input = table(&["Name"], &[&["ANNA VAN DYKE"]]);
    let options = PipelineOptions::default().with_name_casing(NameCasing::Title);
    let output = run_with_lookups(&input, &small_lookups(), &options);
    let record = &output.records[0];
    assert_eq!(record.get(CanonicalField::FirstName), "Anna");
    assert_eq!(record.get(CanonicalField::LastName), "van Dyke");
    assert_eq!(record.get(CanonicalField::FullName), "Anna van Dyke");
}

#[test]
fn unmapped_columns_do_not_widen_output() {
    let input = table(&["Favorite Color", "Name"], &[&["blue", "Cher"]]);
    let output = run_with_lookups(&input, &small_lookups(), &PipelineOptions::default());
    let record = &output.records[0];
    assert_eq!(record.values().len(), 23);
    assert!(record.values().iter().all(|value| value != "blue"));
    assert_eq!(record.get(CanonicalField::FirstName), "Cher");
}

#[test]
fn lookup_errors_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("column_map_lookup.csv"), "alias,target\n").unwrap();
    let input = table(&["Name"], &[&["Ann"]]);

    let err = run(&input, dir.path(), &PipelineOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Lookups(LookupLoadError::MissingFile { .. })
    ));

    let missing = Path::new("/definitely/not/a/lookups/dir");
    let err = run(&input, missing, &PipelineOptions::default()).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Lookups(LookupLoadError::DirectoryNotFound { .. })
    ));
}

#[test]
fn reruns_with_alternate_lookups_are_independent() {
    let input = table(&["Organization"], &[&["Acme"]]);
    let with_alias = run_with_lookups(&input, &small_lookups(), &PipelineOptions::default());
    let without = run_with_lookups(
        &input,
        &Lookups::from_parts(AliasMap::default(), NameLexicon::default()),
        &PipelineOptions::default(),
    );
    assert_eq!(with_alias.records[0].get(CanonicalField::Company), "Acme");
    assert_eq!(without.records[0].get(CanonicalField::Company), "");
    assert_eq!(shipped().aliases.resolve("Organization"), Some(CanonicalField::Company));
}

fn email_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("not-an-email".to_string()),
        "[a-c]@x\\.io",
        "[A-C]@X\\.io",
    ]
}

fn record_strategy() -> impl Strategy<Value = (String, String, String)> {
    (email_strategy(), "[a-z]{0,3}", "[A-Za-z ]{0,12}")
}

fn build_records(specs: &[(String, String, String)]) -> Vec<CanonicalRecord> {
    specs
        .iter()
        .map(|(email, company, name)| {
            let mut record = CanonicalRecord::with_source("prop");
            record.set(CanonicalField::Email, email.as_str());
            record.set(CanonicalField::Company, company.as_str());
            record.set(CanonicalField::FullName, name.as_str());
            record
        })
        .collect()
}

proptest! {
    #[test]
    fn no_dedupe_keeps_row_count(rows in prop::collection::vec(
        prop::collection::vec("[ -~]{0,10}", 0..5),
        0..20,
    )) {
        let mut input = RawTable::new(vec![
            "Name".to_string(),
            "Email".to_string(),
            "Organization".to_string(),
        ]);
        for row in &rows {
            input.push_row(row.clone());
        }
        let options = PipelineOptions::default().with_dedupe(false);
        let output = run_with_lookups(&input, &small_lookups(), &options);
        prop_assert_eq!(output.records.len(), rows.len());
        prop_assert_eq!(output.report.output_rows, rows.len());
    }

    #[test]
    fn dedupe_never_grows_and_never_mixes_emails(specs in prop::collection::vec(record_strategy(), 0..30)) {
        let records = build_records(&specs);
        let outcome = dedupe_records(records.clone());
        prop_assert!(outcome.records.len() <= records.len());
        prop_assert_eq!(outcome.records.len() + outcome.merged, records.len());

        let keys: Vec<Option<String>> = outcome
            .records
            .iter()
            .map(|record| email_key(record.get(CanonicalField::Email)))
            .collect();
        let valid: Vec<&String> = keys.iter().flatten().collect();
        let mut unique = valid.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), valid.len());

        let singletons_in = records
            .iter()
            .filter(|record| email_key(record.get(CanonicalField::Email)).is_none())
            .count();
        let singletons_out = keys.iter().filter(|key| key.is_none()).count();
        prop_assert_eq!(singletons_in, singletons_out);
    }

    #[test]
    fn dedupe_is_idempotent(specs in prop::collection::vec(record_strategy(), 0..30)) {
        let once = dedupe_records(build_records(&specs));
        let twice = dedupe_records(once.records.clone());
        prop_assert_eq!(twice.merged, 0);
        prop_assert_eq!(twice.records, once.records);
    }
}
