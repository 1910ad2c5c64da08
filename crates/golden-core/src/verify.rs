//! Test mode: compare goldens with freshly generated files
//!
//! Only goldens listed in the ledger are considered, so stale copies left
//! behind in the build directory cannot make a test pass.

use std::io::Write;

use golden_fs::NormalizedPath;

use crate::diff::LineDiff;
use crate::ledger::Ledger;
use crate::reporter::{FailureReason, TestReport, TestSuite};
use crate::{Entry, Manifest, Result};

/// Compare every entry's golden under `test_goldens_dir` with its generated
/// file, writing one announce/outcome pair per entry and a final verdict.
///
/// Every entry is evaluated even after a failure. The manifest must already
/// be validated.
///
/// # Errors
///
/// Only a missing or unreadable ledger, or a failed write to `out`, is an
/// error. Per-entry problems are recorded as failed cases.
pub fn test(manifest: &Manifest, out: &mut impl Write) -> Result<TestReport> {
    let listed = Ledger::load(&Ledger::path_in(&manifest.test_goldens_dir))?;
    tracing::info!(
        dir = %manifest.test_goldens_dir.display(),
        listed = listed.len(),
        entries = manifest.entries.len(),
        "testing goldens"
    );
    if listed.is_empty() && !manifest.entries.is_empty() {
        tracing::warn!(
            dir = %manifest.test_goldens_dir.display(),
            "ledger lists no goldens; every case will fail until regen"
        );
    }

    let root = NormalizedPath::new(&manifest.test_goldens_dir);
    let mut suite = TestSuite::new(out);
    for entry in &manifest.entries {
        let mut case = suite.case(entry.golden.as_str());
        case.announce()?;
        match check_entry(&root, &listed, entry) {
            Ok(()) => case.pass()?,
            Err(reason) => case.fail(reason)?,
        }
    }
    suite.summarize()
}

fn check_entry(
    root: &NormalizedPath,
    listed: &Ledger,
    entry: &Entry,
) -> std::result::Result<(), FailureReason> {
    if !listed.contains(&entry.golden) {
        return Err(FailureReason::NotInLedger);
    }

    let golden_path = root.join(&entry.golden).to_native();
    let golden = golden_fs::io::read_bytes(&golden_path).map_err(FailureReason::Unreadable)?;
    let generated =
        golden_fs::io::read_bytes(&entry.generated).map_err(FailureReason::Unreadable)?;

    // An empty output almost always means the generator broke, not that
    // the golden was intentionally emptied.
    if !golden.is_empty() && generated.is_empty() {
        return Err(FailureReason::EmptyGenerated {
            generated: entry.generated.clone(),
        });
    }

    let diff = LineDiff::compute(&golden, &generated);
    if !diff.is_equal() {
        tracing::debug!(golden = %entry.golden, changed = diff.changed_lines(), "golden differs");
        return Err(FailureReason::Mismatch {
            golden: golden_path,
            generated: entry.generated.clone(),
            diff: diff.unified(),
        });
    }
    Ok(())
}
