//! CLI argument parsing using clap derive

use clap::Parser;

/// Generate a Debian preseed from an Ubuntu autoinstall YAML file
///
/// The user password hash is read from the PRESEED_PASSWORD_HASH environment
/// variable, falling back to the identity password in the YAML. There is no
/// flag for it.
///
/// Examples:
///   generate-preseed
///   generate-preseed --yaml ubuntu.yaml --out preseed.cfg
///   generate-preseed --hostname kiosk-01 --stdout
#[derive(Parser, Debug)]
#[command(name = "generate-preseed", version)]
pub struct Cli {
    /// Source autoinstall YAML file
    #[arg(long, default_value = "autoinstall/ubuntu.yaml")]
    pub yaml: String,

    /// Output preseed file
    #[arg(long, default_value = "autoinstall/preseed.cfg")]
    pub out: String,

    /// Override hostname
    #[arg(long)]
    pub hostname: Option<String>,

    /// Override username
    #[arg(long)]
    pub username: Option<String>,

    /// Override real name
    #[arg(long)]
    pub realname: Option<String>,

    /// Print the preseed to stdout instead of writing --out
    #[arg(long)]
    pub stdout: bool,

    /// Print a JSON generation report
    #[arg(long, conflicts_with = "stdout")]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Treat an empty flag value as not given.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
