//! Error types for golden-core
//!
//! Everything here is fatal to a run. Per-entry test failures are not
//! errors; they are collected in [`crate::TestReport`].

use std::path::PathBuf;

/// Result type for golden-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that terminate a regen or test run
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The manifest document could not be decoded
    #[error("{source_name}: {source}")]
    ManifestParse {
        source_name: String,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest violates one of its invariants
    #[error("{}: {source}", .manifest.display())]
    Validation {
        manifest: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// The ledger file could not be opened, read, or written
    #[error("{}: {source}", .path.display())]
    Ledger {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Filesystem error from golden-fs
    #[error(transparent)]
    Fs(#[from] golden_fs::Error),

    /// Writing trace output failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn ledger(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Ledger {
            path: path.into(),
            source,
        }
    }
}

/// A manifest invariant violation, naming the offending entry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0}: duplicate golden in manifest")]
    DuplicateGolden(String),

    #[error("{0}: expected .golden extension")]
    MissingGoldenExtension(String),

    #[error("{0}: unexpected .golden extension")]
    UnexpectedGoldenExtension(String),
}
