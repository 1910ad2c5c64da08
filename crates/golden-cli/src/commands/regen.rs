//! Regen command reporting

use golden_core::RegenReport;

/// Log the summary of a finished regen
///
/// The per-golden lines are already on stdout; this only records totals.
pub fn finish(report: &RegenReport) {
    tracing::info!(
        dir = %report.goldens_dir.display(),
        written = report.written.len(),
        removed = report.removed.len(),
        "goldens regenerated"
    );
}
