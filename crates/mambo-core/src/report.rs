//! Per-run counts for callers that report degraded rows.

use serde::Serialize;

use mambo_map::HeaderMap;

/// Summary of one pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub input_rows: usize,
    pub output_rows: usize,
    /// Rows folded into an earlier record by the deduplicator.
    pub merged_rows: usize,
    /// Built records whose primary email is empty or invalid.
    pub rows_without_valid_email: usize,
    /// Built records with no name at all.
    pub rows_without_name: usize,
    pub header_map: HeaderMap,
}

impl RunReport {
    /// Raw headers that mapped to no canonical field.
    pub fn unmapped_headers(&self) -> Vec<&str> {
        self.header_map.unmapped_headers()
    }

    pub fn mapped_columns(&self) -> usize {
        self.header_map.mapped().count()
    }
}
