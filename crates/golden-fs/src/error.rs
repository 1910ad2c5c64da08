//! Error types for golden-fs

use std::path::PathBuf;

/// Result type for golden-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in golden-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("copying {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying I/O error kind.
    pub fn kind(&self) -> std::io::ErrorKind {
        match self {
            Self::Io { source, .. } | Self::Copy { source, .. } => source.kind(),
        }
    }
}
