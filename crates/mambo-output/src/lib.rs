//! Output of canonical contact records.

#![deny(unsafe_code)]

mod csv;
pub mod error;

pub use crate::csv::{write_records, write_records_to};
pub use crate::error::{OutputError, Result};
