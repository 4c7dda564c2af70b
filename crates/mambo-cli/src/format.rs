//! The `format` command: read a contact export, normalize it, write the
//! canonical CSV.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use mambo_core::{PipelineOptions, RunReport, run_with_lookups};
use mambo_ingest::{SourceEncoding, read_csv_table};
use mambo_output::write_records;
use mambo_standards::{AliasConflictPolicy, load_lookups_with_policy};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "formatted_contacts.csv";

/// Everything one `format` invocation needs.
#[derive(Debug, Clone)]
pub struct FormatRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub lookups_dir: PathBuf,
    /// Overrides the manifest's alias conflict policy.
    pub alias_conflicts: Option<AliasConflictPolicy>,
    pub options: PipelineOptions,
    /// Run the pipeline but write nothing.
    pub dry_run: bool,
}

#[derive(Debug, Clone)]
pub struct FormatResult {
    pub input: PathBuf,
    /// `None` on a dry run.
    pub output: Option<PathBuf>,
    pub lookups_dir: PathBuf,
    pub encoding: SourceEncoding,
    pub source_label: String,
    pub report: RunReport,
}

/// Source label used when none is given: the input file stem.
pub fn default_source_label(input: &Path) -> String {
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Run the full pipeline for `request`.
///
/// Lookup tables are loaded before the input is read, so a broken lookups
/// directory fails without touching the input.
pub fn format_contacts(request: &FormatRequest) -> Result<FormatResult> {
    let span = info_span!("format", input = %request.input.display());
    let _guard = span.enter();

    let lookups = load_lookups_with_policy(&request.lookups_dir, request.alias_conflicts)
        .with_context(|| format!("load lookups from {}", request.lookups_dir.display()))?;
    let csv = read_csv_table(&request.input)
        .with_context(|| format!("read {}", request.input.display()))?;
    info!(
        rows = csv.table.len(),
        columns = csv.table.headers.len(),
        encoding = csv.encoding.as_str(),
        "input loaded"
    );

    let output = run_with_lookups(&csv.table, &lookups, &request.options);

    let written = if request.dry_run {
        info!("dry run, output not written");
        None
    } else {
        write_records(&request.output, &output.records)
            .with_context(|| format!("write {}", request.output.display()))?;
        Some(request.output.clone())
    };

    Ok(FormatResult {
        input: request.input.clone(),
        output: written,
        lookups_dir: request.lookups_dir.clone(),
        encoding: csv.encoding,
        source_label: request.options.source_label.clone(),
        report: output.report,
    })
}
