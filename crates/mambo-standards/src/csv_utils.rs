//! Shared CSV utilities for loading lookup files.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{LookupLoadError, Result};

/// A lookup CSV: trimmed header names plus data rows tagged with their
/// 1-based line number.
#[derive(Debug, Clone)]
pub(crate) struct LookupCsv {
    pub headers: Vec<String>,
    pub rows: Vec<(u64, Vec<String>)>,
}

impl LookupCsv {
    /// Index of a column by case-insensitive header name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }
}

/// Read a lookup CSV file.
///
/// Tolerates UTF-8 (with or without BOM) and Windows-1252 input. Rows whose
/// cells are all blank are skipped.
pub(crate) fn read_lookup_csv(path: &Path) -> Result<LookupCsv> {
    if !path.is_file() {
        return Err(LookupLoadError::MissingFile {
            path: path.to_path_buf(),
        });
    }
    let bytes = std::fs::read(path).map_err(|e| LookupLoadError::io(path, e))?;
    let decoded = mambo_ingest::decode_bytes(&bytes);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(decoded.text.as_bytes());
    let headers = reader
        .headers()
        .map_err(|e| LookupLoadError::csv(path, &e))?
        .iter()
        .map(|value| value.trim().trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| LookupLoadError::csv(path, &e))?;
        let line = record.position().map_or(0, csv::Position::line);
        let row: Vec<String> = record.iter().map(|value| value.trim().to_string()).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        rows.push((line, row));
    }
    Ok(LookupCsv { headers, rows })
}
