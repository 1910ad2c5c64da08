//! A regen that stops partway must leave a ledger that lists every golden
//! it wrote, so the next test run never trusts an unlisted file.

use golden_core::{FailureReason, LEDGER_FILE_NAME, Ledger, Manifest, regen, test};
use golden_test_utils::GoldenTree;
use pretty_assertions::assert_eq;

fn load(tree: &GoldenTree) -> Manifest {
    Manifest::load(&tree.write_manifest()).unwrap()
}

/// Goldens on disk that the ledger does not list
fn unlisted_goldens(tree: &GoldenTree) -> Vec<String> {
    let ledger = Ledger::load(&Ledger::path_in(&tree.goldens_dir())).unwrap();
    tree.snapshot()
        .into_keys()
        .filter(|path| path != LEDGER_FILE_NAME && !ledger.contains(path))
        .collect()
}

#[test]
fn test_interrupted_regen_keeps_ledger_a_superset() {
    let mut tree = GoldenTree::new();
    tree.add("a.golden", "a\n");
    tree.add("m/b.golden", "b\n");
    tree.add("z.golden", "z\n");
    regen(&load(&tree), &mut Vec::new()).unwrap();

    // Second run: the generator for m/b stopped producing output.
    tree.set_generated("a.golden", b"a2\n");
    let b_generated = tree.generated_path("m/b.golden");
    std::fs::remove_file(&b_generated).unwrap();
    tree.add("new/c.golden", "c\n");

    assert!(regen(&load(&tree), &mut Vec::new()).is_err());

    assert_eq!(unlisted_goldens(&tree), Vec::<String>::new());
    tree.assert_golden("a.golden", "a2\n");
    tree.assert_not_exists("new");
}

#[test]
fn test_test_mode_after_interrupted_regen() {
    let mut tree = GoldenTree::new();
    tree.add("a.golden", "a\n");
    let missing = tree.root().join("gen/missing.txt");
    tree.add_entry("b.golden", &missing);
    tree.add("c.golden", "c\n");

    assert!(regen(&load(&tree), &mut Vec::new()).is_err());
    let report = test(&load(&tree), &mut Vec::new()).unwrap();

    assert_eq!(report.passed, vec!["a.golden"]);
    assert_eq!(
        report.failed_names().collect::<Vec<_>>(),
        vec!["b.golden", "c.golden"]
    );
    assert!(matches!(report.failures[0].reason, FailureReason::NotInLedger));
    assert!(matches!(report.failures[1].reason, FailureReason::NotInLedger));
}

#[test]
fn test_blank_lines_from_interrupted_regen_are_ignored() {
    let mut tree = GoldenTree::new();
    tree.add("a.golden", "a\n");
    tree.write_golden("a.golden", "a\n");
    tree.write_ledger("\n\na.golden\n\n");

    let report = test(&load(&tree), &mut Vec::new()).unwrap();

    assert!(report.all_passed());
}
