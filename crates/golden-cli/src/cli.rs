//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use golden_core::{Mode, RunConfig};

/// Utility used to test/regen golden files.
///
/// Compares each generated file named in the manifest with its golden copy,
/// or with --regen overwrites the goldens and updates goldens.txt.
#[derive(Parser, Debug)]
#[command(name = "golden-util")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// JSON manifest
    #[arg(long, env = "GOLDEN_MANIFEST", value_name = "PATH")]
    pub manifest: PathBuf,

    /// Regen instead of testing
    #[arg(long)]
    pub regen: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Collapse the flags into the configuration passed to the engines.
    pub fn run_config(&self) -> RunConfig {
        RunConfig::new(&self.manifest, Mode::from_regen_flag(self.regen))
    }
}
