//! Header alias table: vendor column names to canonical fields.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use mambo_model::CanonicalField;

use crate::csv_utils::read_lookup_csv;
use crate::error::{LookupLoadError, Result};
use crate::keys::normalize_header_key;
use crate::manifest::AliasConflictPolicy;

/// An alias that was mapped to two different fields in the same table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasConflict {
    /// Normalized alias key.
    pub alias: String,
    /// Line of the row that introduced the conflict.
    pub line: u64,
    pub previous: CanonicalField,
    pub replacement: CanonicalField,
    /// The field the alias resolves to after applying the policy.
    pub kept: CanonicalField,
}

/// Normalized header string to canonical field.
///
/// Keys are normalized with [`normalize_header_key`], so lookups are case,
/// whitespace and punctuation insensitive. Absence is `None`, never an empty
/// target.
#[derive(Debug, Clone, Default)]
pub struct AliasMap {
    entries: BTreeMap<String, CanonicalField>,
    conflicts: Vec<AliasConflict>,
    policy: AliasConflictPolicy,
}

impl AliasMap {
    pub fn new(policy: AliasConflictPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Build a map from `(alias, field)` pairs, applying `policy` to repeats.
    ///
    /// # Errors
    ///
    /// Fails only under [`AliasConflictPolicy::Reject`].
    pub fn from_pairs<I, S>(pairs: I, policy: AliasConflictPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (S, CanonicalField)>,
        S: AsRef<str>,
    {
        let mut map = Self::new(policy);
        for (idx, (alias, field)) in pairs.into_iter().enumerate() {
            map.insert(Path::new("<memory>"), idx as u64 + 1, alias.as_ref(), field)?;
        }
        Ok(map)
    }

    fn insert(
        &mut self,
        path: &Path,
        line: u64,
        alias: &str,
        field: CanonicalField,
    ) -> Result<()> {
        let key = normalize_header_key(alias);
        if key.is_empty() {
            return Err(LookupLoadError::MalformedRow {
                path: path.to_path_buf(),
                line,
                message: format!("alias '{alias}' is empty after normalization"),
            });
        }
        let Some(&previous) = self.entries.get(&key) else {
            self.entries.insert(key, field);
            return Ok(());
        };
        if previous == field {
            return Ok(());
        }
        let kept = match self.policy {
            AliasConflictPolicy::LastWins => field,
            AliasConflictPolicy::FirstWins => previous,
            AliasConflictPolicy::Reject => {
                return Err(LookupLoadError::AliasConflict {
                    path: path.to_path_buf(),
                    line,
                    alias: key,
                    first: previous,
                    second: field,
                });
            }
        };
        warn!(
            alias = %key,
            line,
            previous = %previous,
            replacement = %field,
            kept = %kept,
            policy = self.policy.as_str(),
            "alias mapped to two fields"
        );
        self.conflicts.push(AliasConflict {
            alias: key.clone(),
            line,
            previous,
            replacement: field,
            kept,
        });
        self.entries.insert(key, kept);
        Ok(())
    }

    /// Look up an already-normalized key.
    pub fn get(&self, key: &str) -> Option<CanonicalField> {
        self.entries.get(key).copied()
    }

    /// Normalize a raw header and look it up.
    pub fn resolve(&self, raw_header: &str) -> Option<CanonicalField> {
        self.get(&normalize_header_key(raw_header))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn conflicts(&self) -> &[AliasConflict] {
        &self.conflicts
    }

    pub fn policy(&self) -> AliasConflictPolicy {
        self.policy
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, CanonicalField)> {
        self.entries.iter().map(|(key, field)| (key.as_str(), *field))
    }
}

/// Parse the alias table: a CSV with `alias` and `target` columns.
pub fn parse_alias_csv(path: &Path, policy: AliasConflictPolicy) -> Result<AliasMap> {
    let table = read_lookup_csv(path)?;
    let column = |name: &str| {
        table
            .column(name)
            .ok_or_else(|| LookupLoadError::MissingColumn {
                path: path.to_path_buf(),
                column: name.to_string(),
            })
    };
    let alias_idx = column("alias")?;
    let target_idx = column("target")?;

    let mut map = AliasMap::new(policy);
    for (line, row) in &table.rows {
        let alias = row.get(alias_idx).map(String::as_str).unwrap_or("");
        let target = row.get(target_idx).map(String::as_str).unwrap_or("");
        match (alias.is_empty(), target.is_empty()) {
            (true, true) => continue,
            (false, true) | (true, false) => {
                return Err(LookupLoadError::MalformedRow {
                    path: path.to_path_buf(),
                    line: *line,
                    message: "alias and target must both be set".to_string(),
                });
            }
            (false, false) => {}
        }
        let field: CanonicalField =
            target
                .parse()
                .map_err(|_| LookupLoadError::UnknownTarget {
                    path: path.to_path_buf(),
                    line: *line,
                    target: target.to_string(),
                })?;
        if !field.is_assignable() {
            return Err(LookupLoadError::ReservedTarget {
                path: path.to_path_buf(),
                line: *line,
                target: field,
            });
        }
        map.insert(path, *line, alias, field)?;
    }
    Ok(map)
}
