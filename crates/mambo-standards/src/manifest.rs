#![deny(unsafe_code)]

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LookupLoadError, Result};

pub const MANIFEST_FILE: &str = "manifest.toml";
pub const MANIFEST_SCHEMA: &str = "mambo.lookups";
pub const MANIFEST_SCHEMA_VERSION: u32 = 1;

/// Optional `manifest.toml` in the lookups directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupManifest {
    pub manifest: ManifestHeader,
    #[serde(default)]
    pub files: LookupFiles,
    #[serde(default)]
    pub policy: LookupPolicy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestHeader {
    pub schema: String,
    pub schema_version: u32,
}

impl Default for ManifestHeader {
    fn default() -> Self {
        Self {
            schema: MANIFEST_SCHEMA.to_string(),
            schema_version: MANIFEST_SCHEMA_VERSION,
        }
    }
}

/// File names of the four tables, relative to the lookups directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupFiles {
    pub aliases: String,
    pub prefixes: String,
    pub suffixes: String,
    pub particles: String,
}

impl Default for LookupFiles {
    fn default() -> Self {
        Self {
            aliases: "column_map_lookup.csv".to_string(),
            prefixes: "prefixes.csv".to_string(),
            suffixes: "suffixes.csv".to_string(),
            particles: "compound_names.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LookupPolicy {
    #[serde(default)]
    pub alias_conflicts: AliasConflictPolicy,
}

/// What to do when one alias is mapped to two different canonical fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasConflictPolicy {
    /// The later row replaces the earlier one.
    #[default]
    LastWins,
    /// The earlier row is kept.
    FirstWins,
    /// The table fails to load.
    Reject,
}

impl AliasConflictPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LastWins => "last_wins",
            Self::FirstWins => "first_wins",
            Self::Reject => "reject",
        }
    }
}

/// Load `manifest.toml` from `dir`, or the defaults when there is none.
pub fn load_manifest(dir: &Path) -> Result<LookupManifest> {
    let path = dir.join(MANIFEST_FILE);
    if !path.is_file() {
        return Ok(LookupManifest::default());
    }
    let text = std::fs::read_to_string(&path).map_err(|e| LookupLoadError::io(&path, e))?;
    let manifest: LookupManifest = toml::from_str(&text).map_err(|source| LookupLoadError::Toml {
        path: path.clone(),
        source,
    })?;
    if manifest.manifest.schema != MANIFEST_SCHEMA {
        return Err(LookupLoadError::InvalidManifest {
            path,
            message: format!(
                "expected schema '{MANIFEST_SCHEMA}', found '{}'",
                manifest.manifest.schema
            ),
        });
    }
    if manifest.manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        return Err(LookupLoadError::InvalidManifest {
            path,
            message: format!(
                "unsupported schema_version {}",
                manifest.manifest.schema_version
            ),
        });
    }
    Ok(manifest)
}
