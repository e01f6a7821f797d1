//! Line-oriented extraction of the fixed autoinstall schema.
//!
//! This is not a YAML parser. It recognizes a handful of keys by their exact
//! indentation and tracks which list-valued section it is in:
//!
//! ```text
//! autoinstall:
//!   locale: en_US.UTF-8          # two-space scalar
//!   keyboard:
//!     layout: us                 # four-space scalars
//!   identity:
//!     hostname: box
//!   packages:                    # block start
//!     - vim                      # list item
//!   snaps:
//!     - name: code               # starts a snap entry
//!       classic: true            # modifies the pending entry
//!   late-commands:
//!     - curtin in-target -- apt-get update
//! ```
//!
//! Anything else is ignored. A two-space line that is neither a list item nor
//! a block start closes the current block, which is only correct for the
//! shallow layout above.

use tracing::{debug, trace};

use crate::record::{ConfigRecord, SnapSpec};

/// The list-valued section the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Block {
    #[default]
    None,
    Packages,
    Snaps,
    LateCommands,
}

#[derive(Debug, Clone, Copy)]
enum ScalarField {
    Locale,
    KeyboardLayout,
    Hostname,
    Username,
    RealName,
    Password,
}

/// Scalar keys, matched against the raw line including indentation.
const SCALAR_KEYS: &[(&str, ScalarField)] = &[
    ("  locale:", ScalarField::Locale),
    ("    layout:", ScalarField::KeyboardLayout),
    ("    hostname:", ScalarField::Hostname),
    ("    username:", ScalarField::Username),
    ("    realname:", ScalarField::RealName),
    ("    password:", ScalarField::Password),
];

/// Keys that open a list block.
const BLOCK_KEYS: &[(&str, Block)] = &[
    ("  packages:", Block::Packages),
    ("  snaps:", Block::Snaps),
    ("  late-commands:", Block::LateCommands),
];

const TOP_LEVEL_INDENT: &str = "  ";
const NESTED_INDENT: &str = "    ";

impl ScalarField {
    fn slot(self, record: &mut ConfigRecord) -> &mut String {
        match self {
            Self::Locale => &mut record.locale,
            Self::KeyboardLayout => &mut record.keyboard_layout,
            Self::Hostname => &mut record.hostname,
            Self::Username => &mut record.username,
            Self::RealName => &mut record.real_name,
            Self::Password => &mut record.password_hash,
        }
    }
}

/// Extract a [`ConfigRecord`] from autoinstall text, starting from `defaults`.
///
/// Never fails. Unknown and malformed lines are skipped.
///
/// # Example
/// ```
/// use preseed_core::{extract, ConfigRecord};
///
/// let text = "autoinstall:\n  locale: \"fr_FR.UTF-8\"\n  packages:\n    - vim\n";
/// let record = extract(text, ConfigRecord::default());
/// assert_eq!(record.locale, "fr_FR.UTF-8");
/// assert_eq!(record.packages, vec!["vim"]);
/// assert_eq!(record.keyboard_layout, "us");
/// ```
pub fn extract(text: &str, defaults: ConfigRecord) -> ConfigRecord {
    let mut extractor = Extractor::new(defaults);
    for line in text.lines() {
        extractor.feed_line(line);
    }
    extractor.finish()
}

/// Incremental form of [`extract`], fed one line at a time.
#[derive(Debug)]
struct Extractor {
    record: ConfigRecord,
    block: Block,
    pending_snap: Option<SnapSpec>,
}

impl Extractor {
    fn new(defaults: ConfigRecord) -> Self {
        Self {
            record: defaults,
            block: Block::None,
            pending_snap: None,
        }
    }

    /// The block the next list item would be attributed to.
    #[cfg(test)]
    fn current_block(&self) -> Block {
        self.block
    }

    /// Consume one line of input (without its line terminator).
    fn feed_line(&mut self, line: &str) {
        let stripped = line.trim();
        if stripped.is_empty() || stripped.starts_with('#') {
            return;
        }

        if let Some((_, field)) = SCALAR_KEYS.iter().find(|(key, _)| line.starts_with(key)) {
            *field.slot(&mut self.record) = unquote(value_after_colon(stripped)).to_string();
            return;
        }

        if let Some((key, block)) = BLOCK_KEYS.iter().find(|(key, _)| line.starts_with(key)) {
            debug!(key = key.trim(), "entering block");
            self.block = *block;
            return;
        }

        if line.starts_with(TOP_LEVEL_INDENT)
            && !line.starts_with(NESTED_INDENT)
            && !stripped.starts_with('-')
        {
            if self.block != Block::None {
                debug!(line = stripped, "top-level key closes block");
            }
            self.block = Block::None;
            return;
        }

        match self.block {
            Block::Packages => {
                if let Some(item) = stripped.strip_prefix("- ") {
                    self.record.packages.push(unquote(item).to_string());
                    return;
                }
            }
            Block::LateCommands => {
                if let Some(item) = stripped.strip_prefix("- ") {
                    self.record.late_commands.push(item.trim().to_string());
                    return;
                }
            }
            Block::Snaps => {
                if stripped.starts_with("- name:") {
                    self.flush_snap();
                    let name = unquote(value_after_colon(stripped));
                    self.pending_snap = Some(SnapSpec::new(name));
                    return;
                }
                if stripped.starts_with("classic:") {
                    match self.pending_snap.as_mut() {
                        Some(snap) => snap.classic = parse_flag(value_after_colon(stripped)),
                        None => trace!(line = stripped, "classic without a snap entry"),
                    }
                    return;
                }
            }
            Block::None => {}
        }

        trace!(line = stripped, "ignored");
    }

    /// Flush the pending snap and return the finished record.
    fn finish(mut self) -> ConfigRecord {
        self.flush_snap();
        self.record
    }

    fn flush_snap(&mut self) {
        if let Some(snap) = self.pending_snap.take() {
            if snap.name.is_empty() {
                trace!("dropping snap entry without a name");
            } else {
                debug!(name = %snap.name, classic = snap.classic, "snap entry");
                self.record.snaps.push(snap);
            }
        }
    }
}

/// Text after the first `:`, or empty when there is none.
fn value_after_colon(stripped: &str) -> &str {
    stripped.split_once(':').map_or("", |(_, value)| value)
}

/// Trim whitespace and one layer of matching `"` or `'` quotes.
fn unquote(value: &str) -> &str {
    let value = value.trim();
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// `true`/`yes` in any case, after unquoting.
fn parse_flag(value: &str) -> bool {
    let value = unquote(value);
    value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("plain", "plain")]
    #[case("  padded  ", "padded")]
    #[case("\"double\"", "double")]
    #[case("'single'", "single")]
    #[case("\"mismatched'", "\"mismatched'")]
    #[case("\"\"nested\"\"", "\"nested\"")]
    #[case("\"", "\"")]
    #[case("", "")]
    fn test_unquote(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(unquote(input), expected);
    }

    #[rstest]
    #[case(" true", true)]
    #[case(" TRUE", true)]
    #[case(" Yes", true)]
    #[case(" \"yes\"", true)]
    #[case(" false", false)]
    #[case(" no", false)]
    #[case(" 1", false)]
    #[case("", false)]
    fn test_parse_flag(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(parse_flag(input), expected);
    }

    #[test]
    fn test_value_after_first_colon_only() {
        assert_eq!(value_after_colon("password: $6$a:b"), " $6$a:b");
        assert_eq!(value_after_colon("no colon"), "");
    }

    #[test]
    fn test_block_transitions() {
        let mut extractor = Extractor::new(ConfigRecord::default());
        assert_eq!(extractor.current_block(), Block::None);

        extractor.feed_line("  packages:");
        assert_eq!(extractor.current_block(), Block::Packages);

        extractor.feed_line("    - vim");
        assert_eq!(extractor.current_block(), Block::Packages);

        extractor.feed_line("  snaps:");
        assert_eq!(extractor.current_block(), Block::Snaps);

        extractor.feed_line("  late-commands:");
        assert_eq!(extractor.current_block(), Block::LateCommands);

        extractor.feed_line("  storage:");
        assert_eq!(extractor.current_block(), Block::None);
    }

    #[test]
    fn test_scalar_key_does_not_close_block() {
        let mut extractor = Extractor::new(ConfigRecord::default());
        extractor.feed_line("  packages:");
        extractor.feed_line("  locale: de_DE.UTF-8");
        assert_eq!(extractor.current_block(), Block::Packages);
    }

    #[test]
    fn test_comment_does_not_close_block() {
        let mut extractor = Extractor::new(ConfigRecord::default());
        extractor.feed_line("  packages:");
        extractor.feed_line("  # a comment at top-level indent");
        extractor.feed_line("");
        assert_eq!(extractor.current_block(), Block::Packages);
    }

    #[test]
    fn test_classic_without_pending_snap_is_noop() {
        let mut extractor = Extractor::new(ConfigRecord::default());
        extractor.feed_line("  snaps:");
        extractor.feed_line("      classic: true");
        let record = extractor.finish();
        assert!(record.snaps.is_empty());
    }

    #[test]
    fn test_unnamed_snap_dropped() {
        let mut extractor = Extractor::new(ConfigRecord::default());
        extractor.feed_line("  snaps:");
        extractor.feed_line("    - name:");
        extractor.feed_line("      classic: true");
        extractor.feed_line("    - name: htop");
        let record = extractor.finish();
        assert_eq!(record.snaps, vec![SnapSpec::new("htop")]);
    }
}
