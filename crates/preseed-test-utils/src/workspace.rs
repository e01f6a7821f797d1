//! [`TestWorkspace`] temp directory for generator scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory laid out like a project using the generator.
///
/// # Example
///
/// ```rust,no_run
/// use preseed_test_utils::{TestWorkspace, fixtures};
///
/// let ws = TestWorkspace::new();
/// ws.write_source("autoinstall/ubuntu.yaml", fixtures::LOCALE_ONLY);
/// assert!(ws.path("autoinstall/ubuntu.yaml").exists());
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the workspace.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories.
    ///
    /// # Panics
    /// Panics if the filesystem operations fail.
    pub fn write_source(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap_or_else(|e| {
                panic!("write_source: failed to create {}: {e}", parent.display())
            });
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("write_source: failed to write {}: {e}", path.display()));
        path
    }

    /// Read a generated file.
    ///
    /// # Panics
    /// Panics if the file does not exist or is not UTF-8.
    pub fn read(&self, relative: &str) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("read: failed to read {}: {e}", path.display()))
    }

    /// Assert that `relative` exists.
    pub fn assert_file_exists(&self, relative: &str) {
        assert!(
            self.path(relative).exists(),
            "expected {relative} to exist in {}",
            self.root().display()
        );
    }

    /// Assert that `relative` does not exist.
    pub fn assert_file_missing(&self, relative: &str) {
        assert!(
            !self.path(relative).exists(),
            "expected {relative} to be absent in {}",
            self.root().display()
        );
    }
}
