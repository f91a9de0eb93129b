//! CLI argument definitions using clap
//!
//! Commands:
//! - flights init --config <path>
//! - flights start [--config <path>] [--host <host>] [--port <port>] [-v]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory airline and flight registry served over HTTP
#[derive(Parser, Debug)]
#[command(name = "flights")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./flights.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Start {
        /// Path to configuration file (defaults are used if it is missing)
        #[arg(long, default_value = "./flights.json")]
        config: PathBuf,

        /// Override the configured host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,

        /// Increase log verbosity (-v debug, -vv trace)
        #[arg(short, long, action = clap::ArgAction::Count)]
        verbose: u8,

        /// Only log errors
        #[arg(short, long, conflicts_with = "verbose")]
        quiet: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
