//! CLI command implementations

use std::fs;
use std::path::Path;

use tracing::info;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::logging::{init_logging, Verbosity};

use super::args::Command;
use super::errors::{CliError, CliResult};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start {
            config,
            host,
            port,
            verbose,
            quiet,
        } => {
            init_logging(Verbosity::from_occurrences(quiet, verbose));
            let config = resolve_config(&config, host, port)?;
            start(config)
        }
    }
}

/// Write the default configuration to `config_path`.
///
/// Refuses to overwrite an existing file.
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display()));
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            CliError::io_error(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }

    let content = serde_json::to_string_pretty(&HttpServerConfig::default())?;
    fs::write(config_path, content + "\n")?;

    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

/// Load the config file if present and apply command-line overrides.
pub fn resolve_config(
    config_path: &Path,
    host: Option<String>,
    port: Option<u16>,
) -> CliResult<HttpServerConfig> {
    let mut config = if config_path.exists() {
        HttpServerConfig::load(config_path)?
    } else {
        info!(path = %config_path.display(), "config file not found, using defaults");
        HttpServerConfig::default()
    };

    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    config.validate()?;
    Ok(config)
}

/// Serve the seeded registry until Ctrl-C
pub fn start(config: HttpServerConfig) -> CliResult<()> {
    let server = HttpServer::with_config(config);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}
