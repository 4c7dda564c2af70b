//! Name lexicon: prefixes, suffixes and surname particles.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::csv_utils::read_lookup_csv;
use crate::error::{LookupLoadError, Result};
use crate::keys::normalize_token;

/// Which lexicon table a token belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LexiconSet {
    Prefix,
    Suffix,
    Particle,
}

impl fmt::Display for LexiconSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LexiconSet::Prefix => "prefix",
            LexiconSet::Suffix => "suffix",
            LexiconSet::Particle => "particle",
        })
    }
}

/// Three disjoint sets of normalized tokens.
///
/// Entries are normalized with [`normalize_token`]. Particles may be
/// multi-token phrases such as `"de la"`.
#[derive(Debug, Clone, Default)]
pub struct NameLexicon {
    prefixes: BTreeSet<String>,
    suffixes: BTreeSet<String>,
    particles: BTreeSet<String>,
    /// Multi-token particle phrases, longest first.
    phrases: Vec<Vec<String>>,
}

impl NameLexicon {
    /// Build a lexicon, rejecting any token that appears in more than one set.
    pub fn new<P, S, Q>(prefixes: P, suffixes: S, particles: Q) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
        Q: IntoIterator,
        Q::Item: AsRef<str>,
    {
        let prefixes = normalize_set(prefixes);
        let suffixes = normalize_set(suffixes);
        let particles = normalize_set(particles);

        let mut owner: BTreeMap<&str, LexiconSet> = BTreeMap::new();
        for (set, tokens) in [
            (LexiconSet::Prefix, &prefixes),
            (LexiconSet::Suffix, &suffixes),
            (LexiconSet::Particle, &particles),
        ] {
            for token in tokens {
                if let Some(first) = owner.insert(token.as_str(), set) {
                    return Err(LookupLoadError::AmbiguousToken {
                        token: token.clone(),
                        first,
                        second: set,
                        path: None,
                    });
                }
            }
        }

        let mut phrases: Vec<Vec<String>> = particles
            .iter()
            .filter(|entry| entry.contains(' '))
            .map(|entry| entry.split(' ').map(str::to_string).collect())
            .collect();
        phrases.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        Ok(Self {
            prefixes,
            suffixes,
            particles,
            phrases,
        })
    }

    pub fn is_prefix(&self, token: &str) -> bool {
        self.prefixes.contains(&normalize_token(token))
    }

    pub fn is_suffix(&self, token: &str) -> bool {
        self.suffixes.contains(&normalize_token(token))
    }

    /// True if `token` is a single-token particle.
    pub fn is_particle(&self, token: &str) -> bool {
        self.particles.contains(&normalize_token(token))
    }

    /// Multi-token particle phrases, longest first.
    pub fn particle_phrases(&self) -> &[Vec<String>] {
        &self.phrases
    }

    pub fn prefixes(&self) -> &BTreeSet<String> {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &BTreeSet<String> {
        &self.suffixes
    }

    pub fn particles(&self) -> &BTreeSet<String> {
        &self.particles
    }
}

fn normalize_set<I>(tokens: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| normalize_token(token.as_ref()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Read a one-column token table; the first column of each data row is used.
pub fn parse_token_csv(path: &Path) -> Result<Vec<String>> {
    let table = read_lookup_csv(path)?;
    if table.headers.is_empty() {
        return Err(LookupLoadError::MissingColumn {
            path: path.to_path_buf(),
            column: "token".to_string(),
        });
    }
    Ok(table
        .rows
        .into_iter()
        .filter_map(|(_, row)| row.into_iter().next())
        .filter(|token| !token.is_empty())
        .collect())
}
