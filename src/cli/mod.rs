//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - serve: Load configuration, seed the shelf and run the HTTP server
//! - check-config: Validate a configuration file and print it

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_config, run_command, serve};
pub use config::{Config, DEFAULT_CONFIG_PATH};
pub use errors::{CliError, CliErrorCode, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parsed_command_dispatches() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "port": 7001 }"#).unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["bookshelf", "check-config", "--config", path.as_str()]).unwrap();
        assert!(run_command(cli.command).is_ok());
    }

    #[test]
    fn test_parsed_command_reports_config_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let path = missing.to_str().unwrap().to_string();

        let cli = Cli::try_parse_from(["bookshelf", "check-config", "--config", path.as_str()]).unwrap();
        let err = run_command(cli.command).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
