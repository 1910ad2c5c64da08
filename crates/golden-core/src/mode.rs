//! Run mode selection

use std::fmt;

/// Which engine a run dispatches to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Compare goldens with generated files
    #[default]
    Test,
    /// Overwrite goldens with generated files
    Regen,
}

impl Mode {
    pub fn from_regen_flag(regen: bool) -> Self {
        if regen { Self::Regen } else { Self::Test }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => f.write_str("test"),
            Self::Regen => f.write_str("regen"),
        }
    }
}
