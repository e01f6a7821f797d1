//! Post-install script embedded in the `preseed/late_command` directive.
//!
//! The installer runs one shell line, so the script is written out with
//! `echo` into the target filesystem, then executed and removed in-target.

use tracing::debug;

use crate::record::SnapSpec;

/// Script location as seen from the installer environment.
const SCRIPT_HOST_PATH: &str = "/target/root/post_install.sh";
/// Script location inside the installed system.
const SCRIPT_TARGET_PATH: &str = "/root/post_install.sh";
/// Wrapper that Ubuntu late commands use to run inside the target.
const IN_TARGET_WRAPPER: &str = "curtin in-target -- ";
/// Late commands mentioning this tool are not carried over.
const DRIVER_TOOL_MARKER: &str = "ubuntu-drivers";

const CONTINUATION: &str = "; \\\n";

/// Builder for the `d-i preseed/late_command` directive.
#[derive(Debug, Clone)]
pub struct PostInstallScript {
    steps: Vec<String>,
}

impl Default for PostInstallScript {
    fn default() -> Self {
        Self::new()
    }
}

impl PostInstallScript {
    /// Start a script containing only the shebang.
    pub fn new() -> Self {
        Self {
            steps: vec![format!("echo '#!/bin/bash' > {SCRIPT_HOST_PATH}")],
        }
    }

    /// Append one line of script text.
    ///
    /// `line` must already be safe inside single quotes.
    fn append_line(&mut self, line: &str) {
        self.steps.push(format!("echo '{line}' >> {SCRIPT_HOST_PATH}"));
    }

    /// Start snapd once, then install each snap in order.
    pub fn add_snaps(&mut self, snaps: &[SnapSpec]) -> &mut Self {
        if snaps.is_empty() {
            return self;
        }
        self.append_line("systemctl start snapd");
        for snap in snaps {
            let flag = if snap.classic { "--classic" } else { "" };
            self.append_line(&format!("snap install {} {}", snap.name, flag));
        }
        self
    }

    /// Translate one Ubuntu late command.
    pub fn add_late_command(&mut self, command: &str) -> &mut Self {
        if command.contains(DRIVER_TOOL_MARKER) {
            debug!(command, "skipping driver command");
            self.append_line(&format!("# Skipped {DRIVER_TOOL_MARKER} (Ubuntu specific)"));
            return self;
        }
        self.append_line(&clean_command(command));
        self
    }

    pub fn add_late_commands<'a>(
        &mut self,
        commands: impl IntoIterator<Item = &'a String>,
    ) -> &mut Self {
        for command in commands {
            self.add_late_command(command);
        }
        self
    }

    /// Render the full directive, ending with a newline.
    pub fn render(&self) -> String {
        let mut out = String::from("d-i preseed/late_command string \\\n");
        for step in &self.steps {
            out.push_str("  ");
            out.push_str(step);
            out.push_str(CONTINUATION);
        }
        out.push_str(&format!("  in-target chmod +x {SCRIPT_TARGET_PATH}{CONTINUATION}"));
        out.push_str(&format!("  in-target /bin/bash {SCRIPT_TARGET_PATH}{CONTINUATION}"));
        out.push_str(&format!("  in-target rm {SCRIPT_TARGET_PATH}\n"));
        out
    }
}

/// Drop the in-target wrapper and escape single quotes for `echo '...'`.
pub fn clean_command(command: &str) -> String {
    command.replace(IN_TARGET_WRAPPER, "").replace('\'', r"'\''")
}
