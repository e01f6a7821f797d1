//! Rendering a [`ConfigRecord`] as a Debian preseed file.
//!
//! Directive names and the constant values around them are what the Debian
//! installer expects; only the interpolated fields vary between runs.

use crate::overrides::{Identity, Overrides};
use crate::record::ConfigRecord;
use crate::script::PostInstallScript;

/// Render the preseed for `record`.
///
/// `source` names the input in the header banner. Output is a pure function
/// of the arguments.
///
/// # Example
/// ```
/// use preseed_core::{emit, ConfigRecord, Overrides};
///
/// let record = ConfigRecord::default();
/// let preseed = emit(&record, &Overrides::new().with_hostname("kiosk"), "ubuntu.yaml");
/// assert!(preseed.contains("d-i netcfg/get_hostname string kiosk\n"));
/// assert!(preseed.contains("# Generated from ubuntu.yaml\n"));
/// ```
pub fn emit(record: &ConfigRecord, overrides: &Overrides, source: &str) -> String {
    let identity = overrides.resolve(record);
    let packages = record.packages_for_install().join(" ");

    let mut script = PostInstallScript::new();
    script
        .add_snaps(&record.snaps)
        .add_late_commands(&record.late_commands);

    let mut preseed = render_directives(record, &identity, &packages, source);
    preseed.push_str(&script.render());
    preseed.push_str("\n# Reboot when done\nd-i finish-install/reboot_in_progress note\n");
    preseed
}

fn render_directives(
    record: &ConfigRecord,
    identity: &Identity<'_>,
    packages: &str,
    source: &str,
) -> String {
    format!(
        "# ==========================================
# AUTO-GENERATED DEBIAN PRESEED
# Generated from {source}
# ==========================================

# --- Localization & Keyboard ---
d-i debian-installer/locale string {locale}
d-i keyboard-configuration/xkb-keymap select {keyboard}

# --- Network & Mirror ---
d-i netcfg/get_hostname string {hostname}
d-i netcfg/get_domain string unassigned-domain
d-i mirror/country string manual
d-i mirror/http/hostname string deb.debian.org
d-i mirror/http/directory string /debian
d-i mirror/http/proxy string

# --- User Creation ---
d-i passwd/root-login boolean false
d-i passwd/user-fullname string {real_name}
d-i passwd/username string {username}
d-i passwd/user-password-crypted password {password}

# --- Clock & Timezone ---
d-i clock-setup/utc boolean true
d-i time/zone string UTC

# --- Storage / Partitioning (Equivalent to direct layout) ---
d-i partman-auto/method string regular
d-i partman-auto/choose_recipe select atomic
d-i partman-partitioning/confirm_write_new_label boolean true
d-i partman/choose_partition select finish
d-i partman/confirm boolean true
d-i partman/confirm_nooverwrite boolean true

# --- Base System & Packages ---
# Install standard utilities and a basic GNOME desktop environment
tasksel tasksel/first multiselect standard, desktop, gnome-desktop
d-i pkgsel/include string {packages}
d-i pkgsel/upgrade select full-upgrade
popularity-contest popularity-contest/participate boolean false

# --- Bootloader ---
d-i grub-installer/only_debian boolean true
d-i grub-installer/with_other_os boolean true
d-i grub-installer/bootdev  string default

# --- Late Commands (Post-Install Scripts) ---
",
        locale = record.locale,
        keyboard = record.keyboard_layout,
        hostname = identity.hostname,
        real_name = identity.real_name,
        username = identity.username,
        password = identity.password_hash,
    )
}
