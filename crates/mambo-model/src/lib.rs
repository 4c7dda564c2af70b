//! Canonical contact schema shared by every stage of the pipeline.

#![deny(unsafe_code)]

pub mod error;
pub mod field;
pub mod name;
pub mod record;
pub mod redaction;
pub mod table;

pub use error::{ModelError, Result};
pub use field::{CanonicalField, FIELD_COUNT, FieldKind};
pub use name::ParsedName;
pub use record::{CanonicalRecord, fill_first_non_empty};
pub use redaction::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
pub use table::RawTable;
