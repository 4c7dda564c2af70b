//! CSV reading.

mod reader;

pub use reader::{CsvFile, read_csv_str, read_csv_table};
