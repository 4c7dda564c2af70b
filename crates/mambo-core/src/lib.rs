//! Contact normalization pipeline.
//!
//! Orchestrates the stages in order: header resolution, record building
//! (name parsing and field cleaning per row), then optional deduplication
//! by primary email.
//!
//! ```ignore
//! use mambo_core::{PipelineOptions, run};
//!
//! let options = PipelineOptions::new("Gmail");
//! let output = run(&table, Path::new("lookups"), &options)?;
//! println!("{} contacts", output.records.len());
//! ```
//!
//! Lookup tables are the only fallible input. Rows are never rejected: a
//! row that cannot be fully understood becomes a partially empty record.

#![deny(unsafe_code)]

pub mod builder;
pub mod dedupe;
pub mod error;
pub mod options;
pub mod pipeline;
pub mod report;

pub use builder::{RecordBuilder, build_record};
pub use dedupe::{DedupeOutcome, dedupe_records};
pub use error::{PipelineError, Result};
pub use mambo_normalization::NameCasing;
pub use options::PipelineOptions;
pub use pipeline::{PipelineOutput, run, run_with_lookups};
pub use report::RunReport;
