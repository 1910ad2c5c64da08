//! Normalized path handling for golden and goldens-root paths

use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Golden paths in manifests and ledgers are written with forward slashes
/// regardless of platform; conversion to a native path happens only at the
/// I/O boundary.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a relative segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        if self.inner.is_empty() {
            return Self {
                inner: segment_normalized,
            };
        }
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    ///
    /// Returns `None` for a single-component relative path such as
    /// `a.golden`, which has no directory of its own.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Iterate over the parent directories, nearest first.
    pub fn ancestors(&self) -> impl Iterator<Item = NormalizedPath> {
        std::iter::successors(self.parent(), NormalizedPath::parent)
    }

    /// Whether the path has a directory component.
    pub fn has_directory(&self) -> bool {
        self.parent().is_some()
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next()
    }

    /// Get the text after the last `.` of the file name, if any.
    ///
    /// A leading dot counts, so `.golden` has the extension `golden`.
    pub fn extension(&self) -> Option<&str> {
        self.file_name()
            .and_then(|name| name.rfind('.').map(|idx| &name[idx + 1..]))
    }

    /// Whether the path ends with `.{ext}`.
    pub fn has_extension(&self, ext: &str) -> bool {
        self.extension() == Some(ext)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
