//! Generate command implementation
//!
//! Reads the autoinstall source, extracts the record, renders the preseed
//! and either writes it to disk or prints it.

use colored::Colorize;
use serde::Serialize;
use tracing::{debug, info, warn};

use preseed_core::{ConfigRecord, Overrides, SnapSpec, emit, extract};
use preseed_fs::{NormalizedPath, io};

use crate::error::{CliError, Result};

/// Inputs for a single generator run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub source: NormalizedPath,
    pub output: NormalizedPath,
    pub overrides: Overrides,
    /// Print instead of writing `output`.
    pub to_stdout: bool,
    /// Print a JSON report instead of the human summary.
    pub json: bool,
}

/// Result of [`generate`], before anything is written.
#[derive(Debug, Clone)]
pub struct Generated {
    pub record: ConfigRecord,
    pub preseed: String,
    /// False when the source was missing and defaults were used.
    pub source_found: bool,
}

/// Machine-readable summary. Never carries the password hash.
#[derive(Debug, Serialize)]
struct GenerationReport<'a> {
    source: &'a str,
    source_found: bool,
    output: &'a str,
    hostname: &'a str,
    username: &'a str,
    realname: &'a str,
    locale: &'a str,
    keyboard: &'a str,
    packages: Vec<&'a str>,
    snaps: &'a [SnapSpec],
    late_commands: usize,
    password_set: bool,
}

/// Read the source and render the preseed.
///
/// A missing source yields the default record; other read failures are
/// errors.
pub fn generate(options: &GenerateOptions) -> Result<Generated> {
    let (record, source_found) = match io::read_source(&options.source)? {
        Some(text) => {
            debug!(path = %options.source, bytes = text.len(), "read source");
            (extract(&text, ConfigRecord::default()), true)
        }
        None => {
            warn!(path = %options.source, "source not found, using default values");
            (ConfigRecord::default(), false)
        }
    };

    debug!(
        packages = record.packages.len(),
        snaps = record.snaps.len(),
        late_commands = record.late_commands.len(),
        "extracted record"
    );

    let preseed = emit(&record, &options.overrides, options.source.as_str());
    Ok(Generated {
        record,
        preseed,
        source_found,
    })
}

/// Run the generate command and report the outcome.
pub fn run_generate(options: &GenerateOptions) -> Result<()> {
    if !options.to_stdout && options.source.is_same_file(&options.output) {
        return Err(CliError::user(format!(
            "Refusing to overwrite the source file {}",
            options.source
        )));
    }

    let generated = generate(options)?;

    if options.to_stdout {
        print!("{}", generated.preseed);
        return Ok(());
    }

    io::write_text(&options.output, &generated.preseed)?;
    info!(path = %options.output, "wrote preseed");

    if options.json {
        let report = build_report(options, &generated);
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(options, &generated.record);
    }

    Ok(())
}

fn build_report<'a>(options: &'a GenerateOptions, generated: &'a Generated) -> GenerationReport<'a> {
    let record = &generated.record;
    let identity = options.overrides.resolve(record);
    GenerationReport {
        source: options.source.as_str(),
        source_found: generated.source_found,
        output: options.output.as_str(),
        hostname: identity.hostname,
        username: identity.username,
        realname: identity.real_name,
        locale: &record.locale,
        keyboard: &record.keyboard_layout,
        packages: record.packages_for_install(),
        snaps: &record.snaps,
        late_commands: record.late_commands.len(),
        password_set: !identity.password_hash.is_empty(),
    }
}

fn print_summary(options: &GenerateOptions, record: &ConfigRecord) {
    let identity = options.overrides.resolve(record);
    println!(
        "{} generated {} from {}",
        "Successfully".green().bold(),
        options.output,
        options.source
    );
    println!("  -> Hostname: {}", identity.hostname);
    println!("  -> Username: {}", identity.username);
}
