//! Contact CSV reading: first non-blank row is the header.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use mambo_model::RawTable;

use crate::decode::{SourceEncoding, decode_bytes, utf16_bom};
use crate::error::{IngestError, Result};

/// A decoded input file.
#[derive(Debug, Clone)]
pub struct CsvFile {
    pub table: RawTable,
    pub encoding: SourceEncoding,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

/// Read a contact export from disk.
///
/// # Errors
///
/// Returns [`IngestError`] if the file is missing, unreadable, UTF-16
/// encoded, or not parseable as CSV. An empty file yields an empty table.
pub fn read_csv_table(path: &Path) -> Result<CsvFile> {
    let bytes = std::fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if let Some(encoding) = utf16_bom(&bytes) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding,
        });
    }
    let decoded = decode_bytes(&bytes);
    if decoded.encoding == SourceEncoding::Windows1252 {
        warn!(
            path = %path.display(),
            "input is not valid UTF-8; decoded as Windows-1252"
        );
    }
    let table = read_csv_str(&decoded.text).map_err(|e| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    debug!(
        path = %path.display(),
        encoding = decoded.encoding.as_str(),
        columns = table.headers.len(),
        rows = table.len(),
        "read contact CSV"
    );
    Ok(CsvFile {
        table,
        encoding: decoded.encoding,
    })
}

/// Parse already-decoded CSV text.
///
/// Fully blank rows are skipped. The first remaining row is the header;
/// ragged rows are accepted as-is.
pub fn read_csv_str(text: &str) -> std::result::Result<RawTable, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());
    let mut table: Option<RawTable> = None;
    for record in reader.records() {
        let record = record?;
        let row: Vec<String> = record.iter().map(normalize_cell).collect();
        if row.iter().all(String::is_empty) {
            continue;
        }
        match table.as_mut() {
            Some(table) => table.push_row(row),
            None => table = Some(RawTable::new(row)),
        }
    }
    Ok(table.unwrap_or_default())
}
