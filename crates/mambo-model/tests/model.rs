use mambo_model::{CanonicalField, CanonicalRecord, FIELD_COUNT};

#[test]
fn header_row_is_fixed() {
    let header = CanonicalField::header_row();
    assert_eq!(header.len(), FIELD_COUNT);
    assert_eq!(header[0], "source");
    assert_eq!(header[1], "full_name");
    assert_eq!(header[7], "email");
    assert_eq!(header[8], "email_2");
    assert_eq!(header[FIELD_COUNT - 1], "notes");
}

#[test]
fn record_serializes_in_column_order() {
    let mut record = CanonicalRecord::with_source("Gmail");
    record.set(CanonicalField::Email, "jane@example.com");
    let json = serde_json::to_string(&record).expect("serialize record");
    assert!(json.starts_with(r#"{"source":"Gmail","full_name":"""#));
    let source_pos = json.find("\"source\"").unwrap();
    let email_pos = json.find("\"email\"").unwrap();
    let notes_pos = json.find("\"notes\"").unwrap();
    assert!(source_pos < email_pos && email_pos < notes_pos);
}

#[test]
fn name_reflects_record_parts() {
    let mut record = CanonicalRecord::new();
    record.set(CanonicalField::FirstName, "Maria");
    record.set(CanonicalField::LastName, "de la Cruz");
    let name = record.name();
    assert_eq!(name.first, "Maria");
    assert_eq!(name.display_name(), "Maria de la Cruz");
}
