//! Autoinstall documents shared across test suites.

/// A desktop install exercising every recognized key and block.
pub const DESKTOP_AUTOINSTALL: &str = r#"#cloud-config
autoinstall:
  version: 1
  locale: "en_GB.UTF-8"
  keyboard:
    layout: gb
  identity:
    hostname: studio
    username: alice
    realname: "Alice Example"
    password: "$6$rounds=4096$saltsalt$hashhash"
  ssh:
    install-server: true
    allow-pw: false
  packages:
    - build-essential
    - git
    - 'curl'
  snaps:
    - name: code
      classic: true
    - name: htop
  late-commands:
    - curtin in-target -- apt-get update
    - curtin in-target -- ubuntu-drivers autoinstall
    - echo 'provisioned' > /target/etc/motd
"#;

/// Only a locale; everything else falls back to defaults.
pub const LOCALE_ONLY: &str = "autoinstall:\n  version: 1\n  locale: \"fr_FR.UTF-8\"\n";

/// Keys the extractor does not model, plus deeper nesting it must ignore.
pub const UNSUPPORTED_KEYS: &str = r#"autoinstall:
  version: 1
  storage:
    swap:
      size: 0
  apt:
    primary:
      - arches: [default]
        uri: http://archive.ubuntu.com/ubuntu
  user-data:
    timezone: Europe/Berlin
"#;
