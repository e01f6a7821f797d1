//! Shared test utilities for the preseed generator workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`fixtures`] — autoinstall documents covering the recognized schema
//! - [`workspace`] — [`TestWorkspace`] temp directory with source/output helpers

pub mod fixtures;
pub mod workspace;

pub use workspace::TestWorkspace;
