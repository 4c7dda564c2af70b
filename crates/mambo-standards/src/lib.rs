//! Editable lookup tables for contact normalization.
//!
//! A lookups directory holds four CSV tables, loaded once per run:
//!
//! - `column_map_lookup.csv`: `alias,target` rows mapping vendor headers to
//!   canonical fields
//! - `prefixes.csv`, `suffixes.csv`: honorifics and generational suffixes
//! - `compound_names.csv`: surname particles such as `van` or `de la`
//!
//! An optional `manifest.toml` renames the files and sets the policy for an
//! alias mapped to two different fields.

#![deny(unsafe_code)]

pub mod alias;
mod csv_utils;
pub mod error;
pub mod keys;
pub mod lexicon;
pub mod loader;
pub mod manifest;
pub mod paths;
pub mod report;

pub use crate::alias::{AliasConflict, AliasMap, parse_alias_csv};
pub use crate::error::{LookupLoadError, Result};
pub use crate::keys::{normalize_header_key, normalize_token};
pub use crate::lexicon::{LexiconSet, NameLexicon, parse_token_csv};
pub use crate::loader::{Lookups, load_lookups, load_lookups_with_policy};
pub use crate::manifest::{AliasConflictPolicy, LookupFiles, LookupManifest, load_manifest};
pub use crate::paths::{LOOKUPS_ENV_VAR, default_lookups_root};
pub use crate::report::{LookupCounts, LookupReport};
