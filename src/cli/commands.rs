//! CLI command implementations

use std::io::{self, Write};
use std::path::Path;

use crate::books::BookService;
use crate::http_server::HttpServer;
use crate::observability::{Event, Tracer};

use super::args::Command;
use super::config::Config;
use super::errors::{CliError, CliResult};

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            host,
            port,
            log_level,
        } => {
            let config = Config::resolve(config.as_deref())?.with_overrides(host, port, log_level)?;
            serve(config)
        }
        Command::CheckConfig { config } => check_config(config.as_deref(), &mut io::stdout()),
    }
}

/// Start the server and block until it stops
pub fn serve(config: Config) -> CliResult<()> {
    Tracer::install(&config.log_level)
        .map_err(|e| CliError::config_error(format!("Failed to install logging: {}", e)))?;
    tracing::info!(event = %Event::ConfigLoaded, addr = %config.server.socket_addr());

    let seed_count = config.seed.len();
    let service = BookService::seeded(config.seed)
        .map_err(|e| CliError::config_error(format!("Invalid seed book: {}", e)))?;
    tracing::info!(event = %Event::StoreSeeded, count = seed_count);

    let server = HttpServer::with_config(config.server, service);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.start()).map_err(|e| {
        tracing::error!(event = %Event::ServerFailed, error = %e);
        CliError::serve_failed(e.to_string())
    })
}

/// Load and validate a config, then print the effective configuration
pub fn check_config<W: Write>(path: Option<&Path>, out: &mut W) -> CliResult<()> {
    let config = Config::resolve(path)?;
    let json = serde_json::to_string_pretty(&config)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
