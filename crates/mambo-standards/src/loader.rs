//! Loading the full set of lookup tables from a directory.

use std::path::{Path, PathBuf};

use tracing::{debug, info, info_span};

use crate::alias::{AliasMap, parse_alias_csv};
use crate::error::{LookupLoadError, Result};
use crate::lexicon::{LexiconSet, NameLexicon, parse_token_csv};
use crate::manifest::{AliasConflictPolicy, LookupManifest, load_manifest};

/// Everything the pipeline needs from the lookups directory.
///
/// Built once per run and passed by reference; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Lookups {
    pub dir: PathBuf,
    pub manifest: LookupManifest,
    pub aliases: AliasMap,
    pub lexicon: NameLexicon,
}

impl Lookups {
    /// Assemble lookups from in-memory tables (no directory behind them).
    pub fn from_parts(aliases: AliasMap, lexicon: NameLexicon) -> Self {
        let mut manifest = LookupManifest::default();
        manifest.policy.alias_conflicts = aliases.policy();
        Self {
            dir: PathBuf::new(),
            manifest,
            aliases,
            lexicon,
        }
    }
}

/// Load the lookup tables from `dir` using the manifest's conflict policy.
///
/// # Errors
///
/// Returns [`LookupLoadError`] if the directory or a table is missing or
/// malformed, or if a token appears in more than one lexicon table.
pub fn load_lookups(dir: &Path) -> Result<Lookups> {
    load_lookups_with_policy(dir, None)
}

/// Load the lookup tables, overriding the alias conflict policy when given.
pub fn load_lookups_with_policy(
    dir: &Path,
    policy_override: Option<AliasConflictPolicy>,
) -> Result<Lookups> {
    let span = info_span!("lookups", dir = %dir.display());
    let _guard = span.enter();

    if !dir.is_dir() {
        return Err(LookupLoadError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }
    let mut manifest = load_manifest(dir)?;
    if let Some(policy) = policy_override {
        manifest.policy.alias_conflicts = policy;
    }
    let files = &manifest.files;

    let aliases = parse_alias_csv(
        &dir.join(&files.aliases),
        manifest.policy.alias_conflicts,
    )?;
    debug!(
        file = %files.aliases,
        aliases = aliases.len(),
        conflicts = aliases.conflicts().len(),
        "loaded alias table"
    );

    let prefixes = parse_token_csv(&dir.join(&files.prefixes))?;
    let suffixes = parse_token_csv(&dir.join(&files.suffixes))?;
    let particles = parse_token_csv(&dir.join(&files.particles))?;
    let lexicon = NameLexicon::new(prefixes, suffixes, particles).map_err(|error| match error {
        LookupLoadError::AmbiguousToken {
            token,
            first,
            second,
            path: None,
        } => {
            let table = match second {
                LexiconSet::Prefix => &files.prefixes,
                LexiconSet::Suffix => &files.suffixes,
                LexiconSet::Particle => &files.particles,
            };
            LookupLoadError::AmbiguousToken {
                token,
                first,
                second,
                path: Some(dir.join(table)),
            }
        }
        other => other,
    })?;

    info!(
        aliases = aliases.len(),
        prefixes = lexicon.prefixes().len(),
        suffixes = lexicon.suffixes().len(),
        particles = lexicon.particles().len(),
        "lookup tables loaded"
    );

    Ok(Lookups {
        dir: dir.to_path_buf(),
        manifest,
        aliases,
        lexicon,
    })
}
