//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf serve [--config <path>] [--host <host>] [--port <port>] [--log-level <filter>]
//! - bookshelf check-config [--config <path>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - an in-memory book catalog over HTTP
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file. Defaults to ./bookshelf.json when present.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Host to bind to, overriding the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to, overriding the config file
        #[arg(long)]
        port: Option<u16>,

        /// Log filter such as `info` or `bookshelf=debug`, overriding the config file
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Validate a configuration file and print the effective configuration
    CheckConfig {
        /// Path to configuration file. Defaults to ./bookshelf.json when present.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from([
            "bookshelf", "serve", "--port", "8080", "--host", "127.0.0.1", "--log-level", "debug",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                config,
                host,
                port,
                log_level,
            } => {
                assert!(config.is_none());
                assert_eq!(host.as_deref(), Some("127.0.0.1"));
                assert_eq!(port, Some(8080));
                assert_eq!(log_level.as_deref(), Some("debug"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_config() {
        let cli = Cli::try_parse_from(["bookshelf", "check-config", "--config", "shelf.json"]).unwrap();
        match cli.command {
            Command::CheckConfig { config } => {
                assert_eq!(config, Some(PathBuf::from("shelf.json")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_bad_port() {
        assert!(Cli::try_parse_from(["bookshelf", "serve", "--port", "nope"]).is_err());
    }
}
