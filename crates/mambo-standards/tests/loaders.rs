use std::fs;
use std::path::Path;

use mambo_model::CanonicalField;
use mambo_standards::{
    AliasConflictPolicy, LexiconSet, LookupLoadError, LookupReport, default_lookups_root,
    load_lookups, load_lookups_with_policy,
};

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn write_minimal_lookups(dir: &Path) {
    write(
        &dir.join("column_map_lookup.csv"),
        "Alias,Target\nGiven Name,first_name\nFamily Name,last_name\nE-mail 1 - Value,email\n",
    );
    write(&dir.join("prefixes.csv"), "Prefix\nDr\nMr\n");
    write(&dir.join("suffixes.csv"), "Suffix\nJr\nIII\n");
    write(&dir.join("compound_names.csv"), "Compound_Name\nvan\nde la\n");
}

#[test]
fn loads_shipped_lookups() {
    let lookups = load_lookups(&default_lookups_root()).expect("load default lookups");
    assert!(!lookups.aliases.is_empty());
    assert_eq!(
        lookups.aliases.resolve("E-mail 1 - Value"),
        Some(CanonicalField::Email)
    );
    assert_eq!(
        lookups.aliases.resolve("Given Name"),
        Some(CanonicalField::FirstName)
    );
    assert!(lookups.lexicon.is_prefix("Dr."));
    assert!(lookups.lexicon.is_suffix("Jr."));
    assert!(lookups.lexicon.is_particle("van"));
    assert!(lookups.aliases.conflicts().is_empty());
}

#[test]
fn loads_minimal_directory_without_manifest() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());

    let lookups = load_lookups(dir.path()).expect("load lookups");
    assert_eq!(lookups.aliases.len(), 3);
    assert_eq!(
        lookups.aliases.resolve("family name"),
        Some(CanonicalField::LastName)
    );
    assert_eq!(lookups.lexicon.particle_phrases().len(), 1);
    assert_eq!(lookups.aliases.policy(), AliasConflictPolicy::LastWins);
}

#[test]
fn missing_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope");
    let err = load_lookups(&missing).unwrap_err();
    assert!(matches!(err, LookupLoadError::DirectoryNotFound { .. }));
}

#[test]
fn missing_table_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    fs::remove_file(dir.path().join("suffixes.csv")).unwrap();

    let err = load_lookups(dir.path()).unwrap_err();
    match err {
        LookupLoadError::MissingFile { path } => assert!(path.ends_with("suffixes.csv")),
        other => panic!("expected missing file, got {other:?}"),
    }
}

#[test]
fn alias_table_without_target_column_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    write(
        &dir.path().join("column_map_lookup.csv"),
        "alias,field\nName,full_name\n",
    );

    let err = load_lookups(dir.path()).unwrap_err();
    assert!(matches!(err, LookupLoadError::MissingColumn { ref column, .. } if column == "target"));
}

#[test]
fn unknown_target_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    write(
        &dir.path().join("column_map_lookup.csv"),
        "alias,target\nName,full_name\nNickname,nick_name\n",
    );

    let err = load_lookups(dir.path()).unwrap_err();
    match err {
        LookupLoadError::UnknownTarget { line, target, .. } => {
            assert_eq!(line, 3);
            assert_eq!(target, "nick_name");
        }
        other => panic!("expected unknown target, got {other:?}"),
    }
}

#[test]
fn source_cannot_be_aliased() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    write(
        &dir.path().join("column_map_lookup.csv"),
        "alias,target\nOrigin,source\n",
    );

    let err = load_lookups(dir.path()).unwrap_err();
    assert!(matches!(err, LookupLoadError::ReservedTarget { .. }));
}

#[test]
fn half_filled_alias_row_is_malformed() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    write(
        &dir.path().join("column_map_lookup.csv"),
        "alias,target\nName,full_name\n,\nCompany,\n",
    );

    let err = load_lookups(dir.path()).unwrap_err();
    assert!(matches!(err, LookupLoadError::MalformedRow { line: 4, .. }));
}

#[test]
fn ambiguous_token_across_tables_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    write(&dir.path().join("prefixes.csv"), "Prefix\nDr\nSr.\n");
    write(&dir.path().join("suffixes.csv"), "Suffix\nJr\nSr\n");

    let err = load_lookups(dir.path()).unwrap_err();
    match err {
        LookupLoadError::AmbiguousToken {
            token,
            first,
            second,
            path,
        } => {
            assert_eq!(token, "sr");
            assert_eq!(first, LexiconSet::Prefix);
            assert_eq!(second, LexiconSet::Suffix);
            assert_eq!(path, Some(dir.path().join("suffixes.csv")));
        }
        other => panic!("expected ambiguous token, got {other:?}"),
    }
}

#[test]
fn manifest_policy_and_file_names_apply() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    fs::rename(
        dir.path().join("column_map_lookup.csv"),
        dir.path().join("aliases.csv"),
    )
    .unwrap();
    write(
        &dir.path().join("aliases.csv"),
        "alias,target\nPhone,phone_home\nphone,phone_mobile\n",
    );
    write(
        &dir.path().join("manifest.toml"),
        r#"[manifest]
schema = "mambo.lookups"
schema_version = 1

[files]
aliases = "aliases.csv"

[policy]
alias_conflicts = "first_wins"
"#,
    );

    let lookups = load_lookups(dir.path()).expect("load lookups");
    assert_eq!(
        lookups.aliases.resolve("PHONE"),
        Some(CanonicalField::PhoneHome)
    );

    let err = load_lookups_with_policy(dir.path(), Some(AliasConflictPolicy::Reject)).unwrap_err();
    assert!(matches!(err, LookupLoadError::AliasConflict { line: 3, .. }));
}

#[test]
fn manifest_with_wrong_schema_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    write(
        &dir.path().join("manifest.toml"),
        "[manifest]\nschema = \"something.else\"\nschema_version = 1\n",
    );

    let err = load_lookups(dir.path()).unwrap_err();
    assert!(matches!(err, LookupLoadError::InvalidManifest { .. }));
}

#[test]
fn windows_1252_tables_are_decoded() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    // "Straße" in Windows-1252 (0xDF for ß).
    let mut bytes = b"alias,target\nStra".to_vec();
    bytes.push(0xDF);
    bytes.extend_from_slice(b"e,street\n");
    fs::write(dir.path().join("column_map_lookup.csv"), bytes).unwrap();

    let lookups = load_lookups(dir.path()).expect("load lookups");
    assert_eq!(
        lookups.aliases.resolve("straße"),
        Some(CanonicalField::Street)
    );
}

#[test]
fn report_snapshot_is_stable() {
    let dir = tempfile::tempdir().unwrap();
    write_minimal_lookups(dir.path());
    write(
        &dir.path().join("column_map_lookup.csv"),
        "alias,target\nName,full_name\nPhone,phone_home\nphone,phone_mobile\n",
    );

    let lookups = load_lookups(dir.path()).expect("load lookups");
    let report = LookupReport::from_lookups(&lookups);

    insta::assert_json_snapshot!(report, @r#"
    {
      "schema": "mambo.lookups-report",
      "schema_version": 1,
      "files": {
        "aliases": "column_map_lookup.csv",
        "prefixes": "prefixes.csv",
        "suffixes": "suffixes.csv",
        "particles": "compound_names.csv"
      },
      "alias_conflicts": "last_wins",
      "counts": {
        "aliases": 2,
        "prefixes": 2,
        "suffixes": 2,
        "particles": 2,
        "particle_phrases": 1
      },
      "conflicts": [
        {
          "alias": "phone",
          "line": 4,
          "previous": "phone_home",
          "replacement": "phone_mobile",
          "kept": "phone_mobile"
        }
      ]
    }
    "#);
}
