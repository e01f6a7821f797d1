//! Filesystem collaborators for the preseed generator
//!
//! Reads the autoinstall source and writes the generated preseed without
//! ever leaving a partially written file behind.

pub mod error;
pub mod io;
pub mod path;

pub use error::{Error, Result};
pub use io::{read_source, write_text};
pub use path::NormalizedPath;
