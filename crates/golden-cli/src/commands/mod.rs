//! Command implementations for golden-cli

pub mod regen;

use std::io::Write;

use golden_core::{Outcome, RunConfig};

use crate::error::Result;

/// Run the engine selected by `config`, writing its trace to stdout.
///
/// Returns whether the process should exit successfully.
pub fn execute(config: &RunConfig) -> Result<bool> {
    let mut stdout = std::io::stdout().lock();
    let outcome = golden_core::run(config, &mut stdout)?;

    match &outcome {
        Outcome::Regenerated(report) => regen::finish(report),
        Outcome::Tested(report) => test::finish(report, &mut stdout)?,
    }
    stdout.flush()?;
    Ok(outcome.success())
}
