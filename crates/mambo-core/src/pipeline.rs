//! Pipeline Driver: resolve, build, dedupe.

use std::path::Path;

use tracing::{info, info_span, warn};

use mambo_map::resolve_headers;
use mambo_model::{CanonicalField, CanonicalRecord, RawTable};
use mambo_normalization::email_key;
use mambo_standards::{Lookups, load_lookups};

use crate::builder::RecordBuilder;
use crate::dedupe::dedupe_records;
use crate::error::Result;
use crate::options::PipelineOptions;
use crate::report::RunReport;

/// Records in output order plus the run summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOutput {
    pub records: Vec<CanonicalRecord>,
    pub report: RunReport,
}

/// Load the lookup tables from `lookups_dir` and run the pipeline.
///
/// # Errors
///
/// Fails only if the lookup tables cannot be loaded; no row is processed in
/// that case.
pub fn run(
    table: &RawTable,
    lookups_dir: &Path,
    options: &PipelineOptions,
) -> Result<PipelineOutput> {
    let lookups = load_lookups(lookups_dir)?;
    Ok(run_with_lookups(table, &lookups, options))
}

/// Run the pipeline against already loaded lookups.
///
/// Never fails: every input row yields a record, possibly degraded.
pub fn run_with_lookups(
    table: &RawTable,
    lookups: &Lookups,
    options: &PipelineOptions,
) -> PipelineOutput {
    let span = info_span!("pipeline", rows = table.len(), source = %options.source_label);
    let _guard = span.enter();

    let header_map = resolve_headers(&table.headers, &lookups.aliases);
    let unmapped = header_map.unmapped_headers();
    if !unmapped.is_empty() {
        warn!(count = unmapped.len(), headers = ?unmapped, "dropping unmapped columns");
    }

    let builder = RecordBuilder::new(&header_map, &lookups.lexicon, options);
    let records: Vec<CanonicalRecord> = table.rows.iter().map(|row| builder.build(row)).collect();

    let rows_without_valid_email = records
        .iter()
        .filter(|record| email_key(record.get(CanonicalField::Email)).is_none())
        .count();
    let rows_without_name = records
        .iter()
        .filter(|record| record.is_blank(CanonicalField::FullName))
        .count();

    let (records, merged_rows) = if options.dedupe {
        let outcome = dedupe_records(records);
        (outcome.records, outcome.merged)
    } else {
        (records, 0)
    };

    info!(
        input = table.len(),
        output = records.len(),
        merged = merged_rows,
        without_email = rows_without_valid_email,
        without_name = rows_without_name,
        "pipeline finished"
    );

    let report = RunReport {
        input_rows: table.len(),
        output_rows: records.len(),
        merged_rows,
        rows_without_valid_email,
        rows_without_name,
        header_map,
    };
    PipelineOutput { records, report }
}
