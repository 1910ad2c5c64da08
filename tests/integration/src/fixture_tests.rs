//! Tests against the checked-in `test-fixtures/goldens/basic` tree
//!
//! The fixture manifest uses paths relative to the fixture directory; they
//! are rebased onto wherever the fixture is used from.

use std::fs;
use std::path::{Path, PathBuf};

use golden_core::{FailureReason, Ledger, Manifest, regen, test};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../test-fixtures/goldens/basic")
}

/// Load the fixture manifest with every path rebased onto `base`
fn load_rebased(base: &Path) -> Manifest {
    let mut manifest = Manifest::load(&fixture_dir().join("manifest.json")).unwrap();
    manifest.validate().unwrap();
    manifest.test_goldens_dir = base.join(&manifest.test_goldens_dir);
    manifest.regen_goldens_dir = base.join(&manifest.regen_goldens_dir);
    for entry in &mut manifest.entries {
        entry.generated = base.join(&entry.generated);
    }
    manifest
}

/// Copy the fixture into a scratch directory so it can be mutated
fn scratch_copy() -> TempDir {
    let temp = TempDir::new().unwrap();
    copy_dir(&fixture_dir(), temp.path());
    temp
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let target = to.join(entry.file_name());
        if entry.path().is_dir() {
            copy_dir(&entry.path(), &target);
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

#[test]
fn test_checked_in_fixture_passes() {
    let manifest = load_rebased(&fixture_dir());

    let mut out = Vec::new();
    let report = test(&manifest, &mut out).unwrap();

    assert!(report.all_passed(), "{}", String::from_utf8_lossy(&out));
    assert_eq!(
        report.passed,
        vec!["greeting.golden", "nested/config.json.golden"]
    );
}

#[test]
fn test_fixture_ledger_matches_manifest() {
    let manifest = load_rebased(&fixture_dir());
    let ledger = Ledger::load(&Ledger::path_in(&manifest.test_goldens_dir)).unwrap();

    let declared: Ledger = manifest.goldens().collect();
    assert_eq!(ledger, declared);
}

#[test]
fn test_changed_generator_output_is_reported_then_regenerated() {
    let scratch = scratch_copy();
    let manifest = load_rebased(scratch.path());
    fs::write(
        scratch.path().join("gen/nested/config.json"),
        "{\n  \"name\": \"basic\",\n  \"version\": 2\n}\n",
    )
    .unwrap();

    let report = test(&manifest, &mut Vec::new()).unwrap();
    assert_eq!(
        report.failed_names().collect::<Vec<_>>(),
        vec!["nested/config.json.golden"]
    );
    let FailureReason::Mismatch { diff, .. } = &report.failures[0].reason else {
        panic!("expected a content mismatch");
    };
    assert!(diff.contains("-  \"version\": 1\n+  \"version\": 2\n"), "{}", diff);

    regen(&manifest, &mut Vec::new()).unwrap();
    let report = test(&manifest, &mut Vec::new()).unwrap();
    assert!(report.all_passed());
}

#[test]
fn test_regen_of_unchanged_fixture_is_a_no_op() {
    let scratch = scratch_copy();
    let manifest = load_rebased(scratch.path());
    let goldens = scratch.path().join("goldens");
    let before = fs::read_to_string(goldens.join("goldens.txt")).unwrap();

    let report = regen(&manifest, &mut Vec::new()).unwrap();

    assert!(report.removed.is_empty());
    assert_eq!(fs::read_to_string(goldens.join("goldens.txt")).unwrap(), before);
    assert_eq!(
        fs::read(goldens.join("greeting.golden")).unwrap(),
        fs::read(fixture_dir().join("goldens/greeting.golden")).unwrap()
    );
}
