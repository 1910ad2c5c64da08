//! Filesystem primitives for golden-util
//!
//! Provides normalized relative paths and scoped I/O operations. Every
//! function here opens its handles and closes them before returning.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use path::NormalizedPath;
