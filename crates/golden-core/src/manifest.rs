//! Manifest parsing and validation
//!
//! The manifest pairs each golden file with the generated file it tracks,
//! and names the goldens root used by each mode. It is produced by the build
//! system and decoded from JSON.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use golden_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::{Error, Result};

/// Extension every golden path carries, and no generated path may carry
pub const GOLDEN_EXTENSION: &str = "golden";

/// Name used for manifests decoded from bytes rather than from a file
const INLINE_SOURCE: &str = "<manifest>";

/// The information needed to test or regen goldens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Goldens directory used in test mode
    pub test_goldens_dir: PathBuf,
    /// Goldens directory used in regen mode
    pub regen_goldens_dir: PathBuf,
    /// Files to test or regen, in input order
    #[serde(default)]
    pub entries: Vec<Entry>,
}

/// A golden file and the generated file it is compared against
/// (test mode) or overwritten by (regen mode)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Path relative to the goldens directory
    pub golden: String,
    /// Path to the generated file, used as given
    pub generated: PathBuf,
}

impl Entry {
    pub fn new(golden: impl Into<String>, generated: impl Into<PathBuf>) -> Self {
        Self {
            golden: golden.into(),
            generated: generated.into(),
        }
    }
}

impl Manifest {
    /// Decode a manifest from JSON bytes
    ///
    /// # Errors
    ///
    /// Returns [`Error::ManifestParse`] if the bytes are not a valid
    /// manifest document.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        Self::parse_named(bytes, INLINE_SOURCE)
    }

    /// Read and decode a manifest file
    ///
    /// Parse errors are reported against `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = golden_fs::io::read_bytes(path)?;
        Self::parse_named(&bytes, &path.display().to_string())
    }

    fn parse_named(bytes: &[u8], source_name: &str) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|source| Error::ManifestParse {
            source_name: source_name.to_string(),
            source,
        })
    }

    /// Check the manifest invariants, stopping at the first violation
    ///
    /// - no golden path appears twice
    /// - every golden path has the `.golden` extension
    /// - no generated path has the `.golden` extension, which catches the
    ///   two fields being swapped
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.golden.as_str()) {
                return Err(ValidationError::DuplicateGolden(entry.golden.clone()));
            }
            if !NormalizedPath::new(&entry.golden).has_extension(GOLDEN_EXTENSION) {
                return Err(ValidationError::MissingGoldenExtension(
                    entry.golden.clone(),
                ));
            }
            if NormalizedPath::new(&entry.generated).has_extension(GOLDEN_EXTENSION) {
                return Err(ValidationError::UnexpectedGoldenExtension(
                    entry.generated.display().to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Golden paths in manifest order
    pub fn goldens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.golden.as_str())
    }
}
