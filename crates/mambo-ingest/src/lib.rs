//! Contact CSV ingestion.
//!
//! Reads an export file into a [`RawTable`](mambo_model::RawTable), decoding
//! UTF-8 (with or without BOM) and falling back to Windows-1252 for legacy
//! exports.

mod csv;
mod decode;
mod error;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoding ===
pub use decode::{DecodedText, SourceEncoding, decode_bytes};

// === CSV Reading ===
pub use csv::{CsvFile, read_csv_str, read_csv_table};
