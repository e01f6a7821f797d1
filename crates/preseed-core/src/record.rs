//! The fixed-shape record recovered from an autoinstall document.

use serde::Serialize;

/// Package that backs the snap runtime on the installed system.
pub const SNAPD_PACKAGE: &str = "snapd";

/// A snap package requested by the `snaps:` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapSpec {
    /// Snap name, never empty once stored in a [`ConfigRecord`].
    pub name: String,
    /// Install with reduced confinement (`--classic`).
    pub classic: bool,
}

impl SnapSpec {
    /// Create a confined snap entry.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classic: false,
        }
    }

    /// Create a classic-confinement snap entry.
    pub fn classic(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            classic: true,
        }
    }
}

/// Installer settings extracted from an autoinstall document.
///
/// Scalar fields hold the last value seen in the source; list fields keep
/// source order. Built once with [`Default`] values and then only
/// overwritten or appended to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigRecord {
    pub locale: String,
    pub keyboard_layout: String,
    pub hostname: String,
    pub username: String,
    pub real_name: String,
    /// Crypted password hash. Excluded from serialized reports.
    #[serde(skip)]
    pub password_hash: String,
    pub packages: Vec<String>,
    pub snaps: Vec<SnapSpec>,
    pub late_commands: Vec<String>,
}

impl Default for ConfigRecord {
    fn default() -> Self {
        Self {
            locale: "en_US.UTF-8".to_string(),
            keyboard_layout: "us".to_string(),
            hostname: "debian-mini".to_string(),
            username: "user".to_string(),
            real_name: "User".to_string(),
            password_hash: String::new(),
            packages: Vec::new(),
            snaps: Vec::new(),
            late_commands: Vec::new(),
        }
    }
}

impl ConfigRecord {
    /// Whether `snapd` is already in the package list.
    pub fn has_snapd(&self) -> bool {
        self.packages.iter().any(|p| p == SNAPD_PACKAGE)
    }

    /// Whether the package list must gain a trailing `snapd` entry.
    pub fn needs_snapd(&self) -> bool {
        !self.snaps.is_empty() && !self.has_snapd()
    }

    /// Packages handed to the installer, in source order.
    ///
    /// Appends `snapd` once when snaps are requested and it is not listed.
    pub fn packages_for_install(&self) -> Vec<&str> {
        let mut packages: Vec<&str> = self.packages.iter().map(String::as_str).collect();
        if self.needs_snapd() {
            packages.push(SNAPD_PACKAGE);
        }
        packages
    }
}
