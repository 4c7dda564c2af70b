use serde::{Deserialize, Serialize};

use mambo_normalization::NameCasing;

/// Caller-supplied options for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Written to the `source` field of every record.
    pub source_label: String,
    /// Collapse records sharing a primary email.
    pub dedupe: bool,
    pub name_casing: NameCasing,
    /// Append losing values of a per-row field collision to `notes`.
    pub collision_notes: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            source_label: String::new(),
            dedupe: true,
            name_casing: NameCasing::Preserve,
            collision_notes: true,
        }
    }
}

impl PipelineOptions {
    pub fn new(source_label: impl Into<String>) -> Self {
        Self {
            source_label: source_label.into(),
            ..Self::default()
        }
    }

    pub fn with_dedupe(mut self, enable: bool) -> Self {
        self.dedupe = enable;
        self
    }

    pub fn with_name_casing(mut self, casing: NameCasing) -> Self {
        self.name_casing = casing;
        self
    }

    pub fn with_collision_notes(mut self, enable: bool) -> Self {
        self.collision_notes = enable;
        self
    }
}
