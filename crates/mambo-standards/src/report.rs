#![deny(unsafe_code)]

use serde::Serialize;

use crate::alias::AliasConflict;
use crate::loader::Lookups;
use crate::manifest::{AliasConflictPolicy, LookupFiles};

/// Serializable summary of a loaded lookups directory.
#[derive(Debug, Clone, Serialize)]
pub struct LookupReport {
    pub schema: String,
    pub schema_version: u32,
    pub files: LookupFiles,
    pub alias_conflicts: AliasConflictPolicy,
    pub counts: LookupCounts,
    pub conflicts: Vec<AliasConflict>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LookupCounts {
    pub aliases: usize,
    pub prefixes: usize,
    pub suffixes: usize,
    pub particles: usize,
    pub particle_phrases: usize,
}

impl LookupReport {
    pub fn from_lookups(lookups: &Lookups) -> Self {
        Self {
            schema: "mambo.lookups-report".to_string(),
            schema_version: 1,
            files: lookups.manifest.files.clone(),
            alias_conflicts: lookups.aliases.policy(),
            counts: LookupCounts {
                aliases: lookups.aliases.len(),
                prefixes: lookups.lexicon.prefixes().len(),
                suffixes: lookups.lexicon.suffixes().len(),
                particles: lookups.lexicon.particles().len(),
                particle_phrases: lookups.lexicon.particle_phrases().len(),
            },
            conflicts: lookups.aliases.conflicts().to_vec(),
        }
    }
}
