//! Regen mode: overwrite goldens with freshly generated files
//!
//! The ledger is appended to as each golden is written and rewritten in
//! sorted form at the end. If the run dies partway, the ledger still lists
//! every golden written so far.

use std::io::Write;
use std::path::PathBuf;

use golden_fs::NormalizedPath;

use crate::ledger::{Ledger, LedgerFile};
use crate::{Manifest, Result};

/// What a regen run changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegenReport {
    /// Absolute goldens directory that was regenerated
    pub goldens_dir: PathBuf,
    /// Goldens written, in manifest order
    pub written: Vec<String>,
    /// Stale goldens removed from the ledger, sorted
    pub removed: Vec<String>,
}

/// Copy every generated file onto its golden under `regen_goldens_dir`,
/// delete goldens the manifest no longer declares, and rewrite the ledger.
///
/// The manifest must already be validated.
///
/// # Errors
///
/// Fails if the ledger does not exist or cannot be read or written, or if
/// any copy fails. Goldens written before a failure are left in place.
/// Failing to delete a stale golden or an emptied directory is not an error.
pub fn regen(manifest: &Manifest, out: &mut impl Write) -> Result<RegenReport> {
    // The configured path is usually relative to the build directory.
    let goldens_dir = golden_fs::io::absolute(&manifest.regen_goldens_dir)?;
    writeln!(out, "Regenerating goldens in {}", goldens_dir.display())?;
    tracing::info!(dir = %goldens_dir.display(), entries = manifest.entries.len(), "regen started");

    let root = NormalizedPath::new(&manifest.regen_goldens_dir);
    let mut ledger_file = LedgerFile::open(&Ledger::path_in(&manifest.regen_goldens_dir))?;
    let mut stale = ledger_file.read()?;
    ledger_file.terminate_line()?;

    let mut report = RegenReport {
        goldens_dir,
        ..RegenReport::default()
    };
    let mut current = Ledger::new();

    for entry in &manifest.entries {
        writeln!(out, "Writing {}", entry.golden)?;
        let relative = NormalizedPath::new(&entry.golden);
        let golden_path = root.join(relative.as_str()).to_native();
        if relative.has_directory()
            && let Some(parent) = golden_path.parent()
        {
            golden_fs::io::ensure_dir(parent)?;
        }

        let bytes = golden_fs::io::copy_file(&entry.generated, &golden_path)?;
        tracing::debug!(golden = %entry.golden, bytes, "golden written");

        stale.remove(&entry.golden);
        current.insert(entry.golden.as_str());
        ledger_file.append(&entry.golden)?;
        report.written.push(entry.golden.clone());
    }

    for path in stale.iter() {
        writeln!(out, "Removing {path}")?;
        let removed = golden_fs::io::remove_with_empty_parents(&root, &NormalizedPath::new(path));
        tracing::debug!(golden = %path, removed, "stale golden pruned");
        report.removed.push(path.to_string());
    }

    ledger_file.rewrite(&current)?;
    tracing::info!(
        written = report.written.len(),
        removed = report.removed.len(),
        "regen finished"
    );
    Ok(report)
}
