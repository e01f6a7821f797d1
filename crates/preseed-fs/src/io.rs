//! Source reading and crash-safe output writing

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use fs2::FileExt;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::{Error, NormalizedPath, Result};

/// Read the autoinstall source, or `None` if it does not exist.
///
/// Any other failure (permissions, invalid UTF-8, a directory) is an error.
pub fn read_source(path: &NormalizedPath) -> Result<Option<String>> {
    let native_path = path.to_native();
    match fs::read_to_string(&native_path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::io(&native_path, e)),
    }
}

/// Write text to `path`, replacing any previous content in one step.
///
/// Content goes to a locked temp file next to the destination, which is then
/// renamed over it. The temp file is deleted on every failure, so the
/// destination holds either its old content or the complete new content.
pub fn write_text(path: &NormalizedPath, content: &str) -> Result<()> {
    let native_path = path.to_native();
    let parent = native_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    // Same directory keeps the rename on one filesystem.
    let mut temp = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;

    temp.as_file().lock_exclusive().map_err(|_| Error::LockFailed {
        path: native_path.clone(),
    })?;

    temp.write_all(content.as_bytes())
        .map_err(|e| Error::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| Error::io(temp.path(), e))?;

    // A failed persist hands the temp file back inside the error, and
    // dropping it there removes it from disk.
    temp.persist(&native_path)
        .map_err(|e| Error::io(&native_path, e.error))?;

    debug!(path = %path, bytes = content.len(), "wrote file");
    Ok(())
}
