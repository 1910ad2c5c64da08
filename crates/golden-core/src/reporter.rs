//! Test case reporting
//!
//! Produces one greppable line per event:
//!
//! ```text
//! === TEST: x/a.golden
//! --- PASS: x/a.golden
//! === TEST: x/b.golden
//! --- FAIL: x/b.golden
//! file missing from goldens.txt (forgot to regen?)
//! FAIL
//! ```
//!
//! Besides the trace text, the suite accumulates a structured failure list.
//! A failed case makes the suite fail for the rest of the run.

use std::io::Write;
use std::path::PathBuf;

use crate::Result;

/// Why a single golden entry failed
#[derive(Debug, thiserror::Error)]
pub enum FailureReason {
    #[error("file missing from goldens.txt (forgot to regen?)")]
    NotInLedger,

    #[error("{0}")]
    Unreadable(#[source] golden_fs::Error),

    #[error("{}: generated file was unexpectedly empty", .generated.display())]
    EmptyGenerated { generated: PathBuf },

    #[error(
        "unexpected difference between golden file:\n\t{}\nand generated file:\n\t{}\ndiff -golden +generated:\n{diff}",
        .golden.display(),
        .generated.display()
    )]
    Mismatch {
        golden: PathBuf,
        generated: PathBuf,
        diff: String,
    },
}

/// A failed case, kept for the final report
#[derive(Debug)]
pub struct CaseFailure {
    pub name: String,
    pub reason: FailureReason,
}

/// Outcome of a whole test run
#[derive(Debug, Default)]
pub struct TestReport {
    /// Names of passing cases, in run order
    pub passed: Vec<String>,
    /// Failing cases, in run order
    pub failures: Vec<CaseFailure>,
}

impl TestReport {
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_names(&self) -> impl Iterator<Item = &str> {
        self.failures.iter().map(|f| f.name.as_str())
    }
}

/// A sequence of test cases writing to one output sink
pub struct TestSuite<W: Write> {
    out: W,
    failed: bool,
    report: TestReport,
}

impl<W: Write> TestSuite<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            failed: false,
            report: TestReport::default(),
        }
    }

    /// Start a case. Its outcome must be recorded with
    /// [`TestCase::pass`] or [`TestCase::fail`].
    pub fn case(&mut self, name: impl Into<String>) -> TestCase<'_, W> {
        TestCase {
            name: name.into(),
            suite: self,
        }
    }

    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Print the overall verdict and hand back the report
    pub fn summarize(mut self) -> Result<TestReport> {
        let verdict = if self.failed { "FAIL" } else { "PASS" };
        writeln!(self.out, "{verdict}")?;
        self.out.flush()?;
        Ok(self.report)
    }
}

/// One golden entry under test
pub struct TestCase<'s, W: Write> {
    name: String,
    suite: &'s mut TestSuite<W>,
}

impl<W: Write> TestCase<'_, W> {
    pub fn announce(&mut self) -> Result<()> {
        writeln!(self.suite.out, "=== TEST: {}", self.name)?;
        Ok(())
    }

    pub fn pass(self) -> Result<()> {
        writeln!(self.suite.out, "--- PASS: {}", self.name)?;
        self.suite.report.passed.push(self.name);
        Ok(())
    }

    pub fn fail(self, reason: FailureReason) -> Result<()> {
        writeln!(self.suite.out, "--- FAIL: {}", self.name)?;
        writeln!(self.suite.out, "{reason}")?;
        tracing::debug!(case = %self.name, %reason, "golden case failed");
        self.suite.failed = true;
        self.suite.report.failures.push(CaseFailure {
            name: self.name,
            reason,
        });
        Ok(())
    }
}
