//! The goldens ledger
//!
//! Each goldens directory carries a `goldens.txt` listing the golden files
//! currently believed valid, one relative path per line. Test mode only
//! trusts goldens listed here; regen mode rewrites it.

use std::collections::BTreeSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// File name of the ledger inside a goldens directory
pub const LEDGER_FILE_NAME: &str = "goldens.txt";

/// Set of golden paths, kept sorted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    paths: BTreeSet<String>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Location of the ledger inside `goldens_dir`
    pub fn path_in(goldens_dir: &Path) -> PathBuf {
        goldens_dir.join(LEDGER_FILE_NAME)
    }

    /// Parse ledger text
    ///
    /// Empty lines are skipped so that a freshly created ledger
    /// (`touch goldens.txt` or `echo > goldens.txt`) reads as empty.
    pub fn read_from(reader: impl Read) -> std::io::Result<Self> {
        let mut paths = BTreeSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            if !line.is_empty() {
                paths.insert(line);
            }
        }
        Ok(Self { paths })
    }

    /// Load the ledger file at `path`
    ///
    /// # Errors
    ///
    /// Returns [`Error::Ledger`] if the file cannot be opened or is not
    /// valid UTF-8 text.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| Error::ledger(path, e))?;
        Self::read_from(file).map_err(|e| Error::ledger(path, e))
    }

    pub fn contains(&self, golden: &str) -> bool {
        self.paths.contains(golden)
    }

    pub fn insert(&mut self, golden: impl Into<String>) -> bool {
        self.paths.insert(golden.into())
    }

    pub fn remove(&mut self, golden: &str) -> bool {
        self.paths.remove(golden)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Paths in ascending order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    /// Serialized form: sorted, one path per line, trailing newline
    pub fn render(&self) -> String {
        let mut out = String::new();
        for path in &self.paths {
            out.push_str(path);
            out.push('\n');
        }
        out
    }
}

impl<S: Into<String>> FromIterator<S> for Ledger {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// A ledger file held open for read and append during a regen
///
/// The handle is released when this value is dropped.
#[derive(Debug)]
pub struct LedgerFile {
    path: PathBuf,
    file: File,
}

impl LedgerFile {
    /// Open an existing ledger file. The file is never created here: regen
    /// requires an existing goldens directory.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::ledger(path, e))?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    /// Read the current contents
    pub fn read(&mut self) -> Result<Ledger> {
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::ledger(&self.path, e))?;
        Ledger::read_from(&self.file).map_err(|e| Error::ledger(&self.path, e))
    }

    /// Append a newline, in case the file does not already end with one
    pub fn terminate_line(&mut self) -> Result<()> {
        self.write(b"\n")
    }

    /// Record `golden` as written. Appending as each golden lands keeps the
    /// ledger a superset of the goldens on disk if the process dies midway.
    pub fn append(&mut self, golden: &str) -> Result<()> {
        let mut line = Vec::with_capacity(golden.len() + 1);
        line.extend_from_slice(golden.as_bytes());
        line.push(b'\n');
        self.write(&line)
    }

    /// Replace the file contents with `ledger`
    pub fn rewrite(&mut self, ledger: &Ledger) -> Result<()> {
        self.file
            .set_len(0)
            .map_err(|e| Error::ledger(&self.path, e))?;
        self.file
            .seek(SeekFrom::Start(0))
            .map_err(|e| Error::ledger(&self.path, e))?;
        self.write(ledger.render().as_bytes())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        self.file
            .write_all(bytes)
            .map_err(|e| Error::ledger(&self.path, e))
    }
}
