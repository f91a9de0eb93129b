//! CLI module for the `flights` binary
//!
//! Provides command-line interface for:
//! - init: Write a default configuration file
//! - start: Serve the airline registry over HTTP

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, start};
pub use errors::{CliError, CliErrorCode, CliResult};
