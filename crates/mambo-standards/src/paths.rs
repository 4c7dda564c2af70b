//! Lookups directory resolution.

use std::path::PathBuf;

/// Environment variable for overriding the lookups directory.
pub const LOOKUPS_ENV_VAR: &str = "MAMBO_LOOKUPS_DIR";

/// Get the default lookups directory.
///
/// Resolution order:
/// 1. `MAMBO_LOOKUPS_DIR` environment variable
/// 2. `lookups/` directory relative to the workspace root
pub fn default_lookups_root() -> PathBuf {
    if let Ok(root) = std::env::var(LOOKUPS_ENV_VAR) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../lookups")
}
