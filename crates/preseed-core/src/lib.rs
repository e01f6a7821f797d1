//! Ubuntu autoinstall to Debian preseed translation.
//!
//! Two stages, used in sequence:
//!
//! - [`extract`] scans autoinstall text line by line and fills a
//!   [`ConfigRecord`]. It understands a fixed schema only and ignores
//!   everything else.
//! - [`emit`] renders the record, with [`Overrides`] applied, as a preseed
//!   file including a generated post-install script.
//!
//! Neither stage performs I/O or can fail.

pub mod emitter;
pub mod extractor;
pub mod overrides;
pub mod record;
pub mod script;

pub use emitter::emit;
pub use extractor::extract;
pub use overrides::{Identity, Overrides};
pub use record::{ConfigRecord, SNAPD_PACKAGE, SnapSpec};
pub use script::PostInstallScript;
