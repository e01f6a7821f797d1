//! Command implementations for preseed-cli

pub mod generate;

pub use generate::{GenerateOptions, run_generate};
