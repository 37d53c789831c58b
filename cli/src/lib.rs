//! CLI layer for concord
//!
//! This crate contains the command surface behind the `concord` binary:
//! argument parsing, user settings, report formatting and export, and the
//! detect command itself.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod output;

// Re-export commonly used types
pub use cli::{Cli, CliFormat, SeverityArg};
pub use config::{OutputFormat, OutputSettings, Settings};
pub use error::{CliError, Result};
pub use output::ConsoleFormatter;
