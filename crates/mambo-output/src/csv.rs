//! Canonical CSV writer.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::{debug, info};

use mambo_model::{CanonicalField, CanonicalRecord};

use crate::error::{OutputError, Result};

/// Write the header row and one row per record to `writer`.
///
/// Columns always follow [`CanonicalField::ALL`]; quoting is minimal.
pub fn write_records_to<W: Write>(writer: W, records: &[CanonicalRecord]) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);
    csv_writer.write_record(CanonicalField::header_row())?;
    for record in records {
        csv_writer.write_record(record.values())?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write `records` to the CSV file at `path`, creating parent directories.
pub fn write_records(path: &Path, records: &[CanonicalRecord]) -> Result<()> {
    ensure_parent_dir(path)?;
    let mut csv_writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path)
        .map_err(|source| OutputError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    let write_err = |source: csv::Error| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    csv_writer
        .write_record(CanonicalField::header_row())
        .map_err(write_err)?;
    for record in records {
        csv_writer.write_record(record.values()).map_err(write_err)?;
    }
    csv_writer
        .flush()
        .map_err(|source| write_err(csv::Error::from(source)))?;
    info!(path = %path.display(), records = records.len(), "wrote contacts CSV");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        debug!(dir = %parent.display(), "creating output directory");
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}
