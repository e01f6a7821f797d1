//! Path handling for the source and output arguments

use std::fs;
use std::path::{Path, PathBuf};

/// A path as given on the command line.
///
/// On Windows, backslashes are rewritten to forward slashes so that paths
/// shown in reports and the preseed header look the same on every platform.
/// Elsewhere a backslash is an ordinary filename character and is kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        #[cfg(windows)]
        let inner = path_str.replace('\\', "/");
        #[cfg(not(windows))]
        let inner = path_str.into_owned();
        Self { inner }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Whether both paths name the same file on disk.
    ///
    /// `.` and `..` segments and symlinks are resolved first. A file that
    /// does not exist yet is located through its parent directory. When
    /// neither form can be resolved the spellings are compared as given.
    pub fn is_same_file(&self, other: &Self) -> bool {
        match (self.resolve(), other.resolve()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }

    fn resolve(&self) -> Option<PathBuf> {
        let native = self.to_native();
        if let Ok(resolved) = fs::canonicalize(&native) {
            return Some(resolved);
        }
        let name = native.file_name()?;
        let parent = native
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        fs::canonicalize(parent).ok().map(|dir| dir.join(name))
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}
