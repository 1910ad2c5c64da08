//! Scoped I/O operations
//!
//! Each operation acquires its file handles and releases them on every
//! return path, including early errors.

use std::fs::{self, File};
use std::path::{Component, Path, PathBuf};

use crate::{Error, NormalizedPath, Result};

/// Read the full contents of a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Stream-copy `from` onto `to`, overwriting `to`.
///
/// The source is opened before the destination is truncated, so a missing
/// source leaves an existing destination untouched. Returns the number of
/// bytes copied.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let mut source = File::open(from).map_err(|e| Error::io(from, e))?;
    let mut dest = File::create(to).map_err(|e| Error::io(to, e))?;
    std::io::copy(&mut source, &mut dest).map_err(|e| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source: e,
    })
}

/// Create `dir` and all of its parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))
}

/// Resolve `path` against the working directory without touching symlinks.
///
/// `.` and `..` components are collapsed lexically, so `out/../goldens`
/// resolves to `<cwd>/goldens` even if `out` does not exist.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(path).map_err(|e| Error::io(path, e))?;
    Ok(clean(dunce::simplified(&abs)))
}

fn clean(path: &Path) -> PathBuf {
    let mut cleaned = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // `..` at the root stays at the root
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    cleaned
}

/// Remove the file at `root/relative`, then every parent directory between
/// it and `root` that is left empty.
///
/// Stops at the first removal that fails. Failures are not errors: a
/// directory may be non-empty or shared for unrelated reasons. Returns the
/// number of entries removed.
pub fn remove_with_empty_parents(root: &NormalizedPath, relative: &NormalizedPath) -> usize {
    let file = root.join(relative.as_str()).to_native();
    if let Err(e) = fs::remove_file(&file) {
        tracing::trace!(path = %file.display(), error = %e, "stale golden not removed");
        return 0;
    }

    let mut removed = 1;
    for dir in relative.ancestors() {
        let native = root.join(dir.as_str()).to_native();
        match fs::remove_dir(&native) {
            Ok(()) => removed += 1,
            Err(e) => {
                tracing::trace!(path = %native.display(), error = %e, "stopped pruning");
                break;
            }
        }
    }
    removed
}
