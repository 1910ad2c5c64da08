//! [`GoldenTree`] builder for golden-util test scenarios.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary build directory holding a goldens tree, generated files,
/// and a manifest describing them.
///
/// Layout:
///
/// ```text
/// <root>/goldens/goldens.txt   ledger (created empty)
/// <root>/goldens/...           golden files
/// <root>/gen/...               generated files
/// <root>/manifest.json         written by `write_manifest`
/// ```
///
/// Both the test and regen goldens directories point at `<root>/goldens`,
/// so a regen followed by a test exercises the same files.
///
/// # Example
///
/// ```rust,no_run
/// use golden_test_utils::GoldenTree;
///
/// let mut tree = GoldenTree::new();
/// tree.add("x/a.golden", "hello\n");
/// let manifest = tree.write_manifest();
/// tree.assert_ledger("");
/// ```
pub struct GoldenTree {
    temp_dir: TempDir,
    entries: Vec<(String, PathBuf)>,
}

impl Default for GoldenTree {
    fn default() -> Self {
        Self::new()
    }
}

impl GoldenTree {
    /// Create the directory layout with an empty ledger.
    pub fn new() -> Self {
        let tree = Self {
            temp_dir: TempDir::new().unwrap(),
            entries: Vec::new(),
        };
        fs::create_dir_all(tree.goldens_dir()).unwrap();
        fs::create_dir_all(tree.root().join("gen")).unwrap();
        tree.write_ledger("");
        tree
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Return the goldens directory used by both modes.
    pub fn goldens_dir(&self) -> PathBuf {
        self.root().join("goldens")
    }

    /// Return the path `write_manifest` writes to.
    pub fn manifest_path(&self) -> PathBuf {
        self.root().join("manifest.json")
    }

    /// Path of the generated file paired with `golden`: `gen/<stem>.txt`.
    pub fn generated_path(&self, golden: &str) -> PathBuf {
        let stem = golden.strip_suffix(".golden").unwrap_or(golden);
        self.root().join("gen").join(format!("{stem}.txt"))
    }

    /// Write the generated file for `golden` and declare the entry.
    pub fn add(&mut self, golden: &str, generated_content: &str) -> PathBuf {
        let generated = self.generated_path(golden);
        self.write_file(&generated, generated_content.as_bytes());
        self.add_entry(golden, generated.clone());
        generated
    }

    /// Declare an entry without touching the filesystem.
    pub fn add_entry(&mut self, golden: &str, generated: impl Into<PathBuf>) {
        self.entries.push((golden.to_string(), generated.into()));
    }

    /// Drop the entry for `golden` from the manifest.
    pub fn remove_entry(&mut self, golden: &str) {
        self.entries.retain(|(g, _)| g != golden);
    }

    /// Overwrite the generated file for `golden`.
    pub fn set_generated(&self, golden: &str, content: &[u8]) {
        self.write_file(&self.generated_path(golden), content);
    }

    /// Write `manifest.json` for the current entries and return its path.
    pub fn write_manifest(&self) -> PathBuf {
        let goldens = self.goldens_dir();
        let entries: Vec<_> = self
            .entries
            .iter()
            .map(|(golden, generated)| {
                serde_json::json!({
                    "golden": golden,
                    "generated": generated,
                })
            })
            .collect();
        let manifest = serde_json::json!({
            "test_goldens_dir": goldens,
            "regen_goldens_dir": goldens,
            "entries": entries,
        });
        let path = self.manifest_path();
        fs::write(&path, serde_json::to_vec_pretty(&manifest).unwrap()).unwrap();
        path
    }

    /// Write raw manifest text, bypassing the entry list.
    pub fn write_raw_manifest(&self, content: &str) -> PathBuf {
        let path = self.manifest_path();
        fs::write(&path, content).unwrap();
        path
    }

    /// Write a golden file directly, relative to the goldens directory.
    pub fn write_golden(&self, golden: &str, content: &str) {
        self.write_file(&self.goldens_dir().join(golden), content.as_bytes());
    }

    /// Replace the ledger contents.
    pub fn write_ledger(&self, content: &str) {
        fs::write(self.goldens_dir().join("goldens.txt"), content).unwrap();
    }

    /// Delete the ledger.
    pub fn remove_ledger(&self) {
        fs::remove_file(self.goldens_dir().join("goldens.txt")).unwrap();
    }

    /// Read the ledger contents.
    pub fn read_ledger(&self) -> String {
        fs::read_to_string(self.goldens_dir().join("goldens.txt")).unwrap()
    }

    /// Every file under the goldens directory, keyed by relative path.
    pub fn snapshot(&self) -> BTreeMap<String, Vec<u8>> {
        let mut files = BTreeMap::new();
        collect_files(&self.goldens_dir(), &self.goldens_dir(), &mut files);
        files
    }

    /// Assert that the ledger contains exactly `expected`.
    ///
    /// # Panics
    /// Panics with both contents if they differ.
    pub fn assert_ledger(&self, expected: &str) {
        let actual = self.read_ledger();
        assert_eq!(
            actual, expected,
            "ledger mismatch: expected {:?}, got {:?}",
            expected, actual
        );
    }

    /// Assert that `golden` exists with `expected` content.
    ///
    /// # Panics
    /// Panics with a descriptive message if the file is missing or differs.
    pub fn assert_golden(&self, golden: &str, expected: &str) {
        let path = self.goldens_dir().join(golden);
        let actual = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Expected golden {}: {}", path.display(), e));
        assert_eq!(actual, expected, "golden {} content mismatch", golden);
    }

    /// Assert that `path` (relative to the goldens directory) does **not**
    /// exist.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path exists.
    pub fn assert_not_exists(&self, path: &str) {
        let full_path = self.goldens_dir().join(path);
        assert!(
            !full_path.exists(),
            "Expected path NOT to exist: {}",
            full_path.display()
        );
    }

    fn write_file(&self, path: &Path, content: &[u8]) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
}

fn collect_files(root: &Path, dir: &Path, files: &mut BTreeMap<String, Vec<u8>>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_files(root, &path, files);
        } else {
            let relative = path.strip_prefix(root).unwrap();
            let key = relative.to_string_lossy().replace('\\', "/");
            files.insert(key, fs::read(&path).unwrap());
        }
    }
}
