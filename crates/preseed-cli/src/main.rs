//! Preseed generator CLI
//!
//! Converts an Ubuntu autoinstall YAML file into a Debian preseed.

mod cli;
mod commands;
mod error;
mod logging;
mod secrets;

use clap::Parser;
use colored::Colorize;

use preseed_core::Overrides;
use preseed_fs::NormalizedPath;

use cli::{Cli, non_empty};
use commands::GenerateOptions;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose)?;
    if cli.verbose {
        tracing::debug!("Verbose mode enabled");
    }

    let options = GenerateOptions {
        source: NormalizedPath::new(&cli.yaml),
        output: NormalizedPath::new(&cli.out),
        overrides: build_overrides(&cli),
        to_stdout: cli.stdout,
        json: cli.json,
    };

    commands::run_generate(&options)
}

fn build_overrides(cli: &Cli) -> Overrides {
    Overrides {
        hostname: non_empty(cli.hostname.clone()),
        username: non_empty(cli.username.clone()),
        real_name: non_empty(cli.realname.clone()),
        password: secrets::password_hash_from_env(),
    }
}
