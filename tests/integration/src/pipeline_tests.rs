//! End-to-end tests for the extract -> emit -> write pipeline
//!
//! Golden files under `test-fixtures/autoinstall/` pin the exact preseed text
//! the installer consumes.

use pretty_assertions::assert_eq;
use preseed_core::{ConfigRecord, Overrides, SnapSpec, emit, extract};
use preseed_fs::{NormalizedPath, io};
use preseed_test_utils::{TestWorkspace, fixtures};

const DESKTOP_YAML: &str = include_str!("../../../test-fixtures/autoinstall/desktop.yaml");
const DESKTOP_PRESEED: &str =
    include_str!("../../../test-fixtures/autoinstall/desktop.preseed.cfg");
const DEFAULTS_PRESEED: &str =
    include_str!("../../../test-fixtures/autoinstall/defaults.preseed.cfg");

const SOURCE_LABEL: &str = "autoinstall/ubuntu.yaml";

/// Run the pipeline the way the binary does, relative to `ws`.
fn run_pipeline(ws: &TestWorkspace, overrides: &Overrides) -> String {
    let source = NormalizedPath::new(ws.path(SOURCE_LABEL));
    let record = match io::read_source(&source).unwrap() {
        Some(text) => extract(&text, ConfigRecord::default()),
        None => ConfigRecord::default(),
    };
    let preseed = emit(&record, overrides, SOURCE_LABEL);

    let output = NormalizedPath::new(ws.path("autoinstall/preseed.cfg"));
    io::write_text(&output, &preseed).unwrap();
    ws.read("autoinstall/preseed.cfg")
}

#[test]
fn test_fixture_file_matches_shared_fixture() {
    assert_eq!(DESKTOP_YAML, fixtures::DESKTOP_AUTOINSTALL);
}

#[test]
fn test_desktop_golden() {
    let ws = TestWorkspace::new();
    ws.write_source(SOURCE_LABEL, DESKTOP_YAML);

    assert_eq!(run_pipeline(&ws, &Overrides::new()), DESKTOP_PRESEED);
}

#[test]
fn test_missing_source_golden() {
    let ws = TestWorkspace::new();

    assert_eq!(run_pipeline(&ws, &Overrides::new()), DEFAULTS_PRESEED);
}

#[test]
fn test_desktop_record() {
    let record = extract(DESKTOP_YAML, ConfigRecord::default());

    assert_eq!(record.locale, "en_GB.UTF-8");
    assert_eq!(record.keyboard_layout, "gb");
    assert_eq!(record.hostname, "studio");
    assert_eq!(record.username, "alice");
    assert_eq!(record.real_name, "Alice Example");
    assert_eq!(record.packages, vec!["build-essential", "git", "curl"]);
    assert_eq!(
        record.snaps,
        vec![SnapSpec::classic("code"), SnapSpec::new("htop")]
    );
    assert_eq!(record.late_commands.len(), 3);
}

#[test]
fn test_overrides_only_touch_identity_lines() {
    let ws = TestWorkspace::new();
    ws.write_source(SOURCE_LABEL, DESKTOP_YAML);

    let overrides = Overrides::new()
        .with_hostname("kiosk")
        .with_password("$6$env$hash");
    let generated = run_pipeline(&ws, &overrides);

    let changed: Vec<(&str, &str)> = DESKTOP_PRESEED
        .lines()
        .zip(generated.lines())
        .filter(|(golden, actual)| golden != actual)
        .collect();
    assert_eq!(
        changed,
        vec![
            (
                "d-i netcfg/get_hostname string studio",
                "d-i netcfg/get_hostname string kiosk"
            ),
            (
                "d-i passwd/user-password-crypted password $6$rounds=4096$saltsalt$hashhash",
                "d-i passwd/user-password-crypted password $6$env$hash"
            ),
        ]
    );
}

#[test]
fn test_unsupported_keys_yield_defaults() {
    let record = extract(fixtures::UNSUPPORTED_KEYS, ConfigRecord::default());
    assert_eq!(record, ConfigRecord::default());
}

#[test]
fn test_rerun_is_byte_identical() {
    let ws = TestWorkspace::new();
    ws.write_source(SOURCE_LABEL, DESKTOP_YAML);

    let first = run_pipeline(&ws, &Overrides::new());
    let second = run_pipeline(&ws, &Overrides::new());
    assert_eq!(first, second);
}
