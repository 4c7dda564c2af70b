#![deny(unsafe_code)]

use std::path::{Path, PathBuf};

use crate::lexicon::LexiconSet;
use mambo_model::CanonicalField;

/// Setup-time failure while loading the lookup tables.
///
/// Any of these aborts a run before the first row is processed.
#[derive(Debug, thiserror::Error)]
pub enum LookupLoadError {
    #[error("lookups directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("missing lookup file: {path}")]
    MissingFile { path: PathBuf },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse CSV {path}: {message}")]
    Csv { path: PathBuf, message: String },

    #[error("required column '{column}' not found in {path}")]
    MissingColumn { path: PathBuf, column: String },

    #[error("malformed row at {path}:{line}: {message}")]
    MalformedRow {
        path: PathBuf,
        line: u64,
        message: String,
    },

    #[error("unknown target field '{target}' at {path}:{line}")]
    UnknownTarget {
        path: PathBuf,
        line: u64,
        target: String,
    },

    #[error("target field '{target}' at {path}:{line} is set by the caller and cannot be aliased")]
    ReservedTarget {
        path: PathBuf,
        line: u64,
        target: CanonicalField,
    },

    #[error(
        "alias '{alias}' at {path}:{line} maps to '{second}' but was already mapped to '{first}'"
    )]
    AliasConflict {
        path: PathBuf,
        line: u64,
        alias: String,
        first: CanonicalField,
        second: CanonicalField,
    },

    /// `path` is the table holding the second occurrence; `None` for
    /// lexicons built in memory.
    #[error(
        "token '{token}' appears in both the {first} and {second} tables{}",
        located(.path.as_deref())
    )]
    AmbiguousToken {
        token: String,
        first: LexiconSet,
        second: LexiconSet,
        path: Option<PathBuf>,
    },

    #[error("failed to parse TOML manifest {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },
}

impl LookupLoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn csv(path: impl Into<PathBuf>, error: &csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            message: error.to_string(),
        }
    }
}

fn located(path: Option<&Path>) -> String {
    path.map(|path| format!(" ({})", path.display()))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, LookupLoadError>;
