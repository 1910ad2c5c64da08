//! Golden file regeneration and verification engine
//!
//! Build steps produce artifacts; checked-in golden copies record what those
//! artifacts are expected to contain. This crate implements:
//!
//! - **Manifest**: golden/generated pairs and the two goldens roots, with
//!   load-time validation
//! - **Ledger**: the `goldens.txt` registry of currently valid goldens
//! - **regen**: overwrite goldens, prune stale ones, rewrite the ledger
//! - **test**: ledger-gated line comparison with per-entry reporting
//!
//! # Architecture
//!
//! ```text
//!              golden-cli
//!                  |
//!             golden-core
//!      +-------+---+---+--------+
//!      |       |       |        |
//!  manifest  ledger  regen   verify -- reporter, diff
//!                  |
//!              golden-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use golden_core::{Mode, RunConfig, run};
//!
//! let config = RunConfig::new("goldens_manifest.json", Mode::Test);
//! let outcome = run(&config, &mut std::io::stdout()).unwrap();
//! assert!(outcome.success());
//! ```

pub mod config;
pub mod diff;
pub mod error;
pub mod ledger;
pub mod manifest;
pub mod mode;
pub mod regen;
pub mod reporter;
pub mod verify;

pub use config::{Outcome, RunConfig, run};
pub use diff::LineDiff;
pub use error::{Error, Result, ValidationError};
pub use ledger::{LEDGER_FILE_NAME, Ledger, LedgerFile};
pub use manifest::{Entry, GOLDEN_EXTENSION, Manifest};
pub use mode::Mode;
pub use regen::{RegenReport, regen};
pub use reporter::{CaseFailure, FailureReason, TestReport, TestSuite};
pub use verify::test;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn validation_error_display_names_manifest_and_entry() {
        let error = Error::Validation {
            manifest: PathBuf::from("/out/goldens.json"),
            source: ValidationError::DuplicateGolden("a.golden".to_string()),
        };

        assert_eq!(
            error.to_string(),
            "/out/goldens.json: a.golden: duplicate golden in manifest"
        );
    }
}
