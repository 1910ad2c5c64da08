//! Run configuration
//!
//! A [`RunConfig`] is built once from the command line and passed down by
//! reference; nothing in the engines reads global state.

use std::io::Write;
use std::path::PathBuf;

use crate::regen::{RegenReport, regen};
use crate::reporter::TestReport;
use crate::verify::test;
use crate::{Error, Manifest, Mode, Result};

/// Everything a single invocation needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Path to the JSON manifest
    pub manifest: PathBuf,
    /// Engine to run
    pub mode: Mode,
}

impl RunConfig {
    pub fn new(manifest: impl Into<PathBuf>, mode: Mode) -> Self {
        Self {
            manifest: manifest.into(),
            mode,
        }
    }
}

/// Result of a completed run
#[derive(Debug)]
pub enum Outcome {
    Regenerated(RegenReport),
    Tested(TestReport),
}

impl Outcome {
    /// Whether the process should exit successfully
    pub fn success(&self) -> bool {
        match self {
            Self::Regenerated(_) => true,
            Self::Tested(report) => report.all_passed(),
        }
    }
}

/// Load and validate the manifest, then run the configured engine
///
/// # Errors
///
/// Returns an error for an unreadable or malformed manifest, a violated
/// manifest invariant, or any fatal engine error. Failing test cases are
/// reported through [`Outcome::Tested`], not as errors.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<Outcome> {
    let manifest = Manifest::load(&config.manifest)?;
    manifest.validate().map_err(|source| Error::Validation {
        manifest: config.manifest.clone(),
        source,
    })?;
    tracing::debug!(
        manifest = %config.manifest.display(),
        mode = %config.mode,
        entries = manifest.entries.len(),
        "manifest loaded"
    );

    match config.mode {
        Mode::Regen => regen(&manifest, out).map(Outcome::Regenerated),
        Mode::Test => test(&manifest, out).map(Outcome::Tested),
    }
}
