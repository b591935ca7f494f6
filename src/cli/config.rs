//! Configuration file handling
//!
//! JSON file, every field optional:
//!
//! ```json
//! {
//!   "host": "0.0.0.0",
//!   "port": 9000,
//!   "cors_origins": [],
//!   "log_level": "info",
//!   "seed": [{ "name": "Dune", "pageCount": 412, "readPage": 0 }]
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};

use crate::books::{Action, BookPayload};
use crate::http_server::HttpServerConfig;
use crate::observability::Tracer;

use super::errors::{CliError, CliResult};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "./bookshelf.json";

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(flatten)]
    pub server: HttpServerConfig,

    /// Log filter (default "info"). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Books loaded into the shelf at startup
    #[serde(default)]
    pub seed: Vec<BookPayload>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: HttpServerConfig::default(),
            log_level: default_log_level(),
            seed: Vec::new(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::config_error(format!("Failed to read config {}: {}", path.display(), e))
        })?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from an explicit path, or from the default path if that file
    /// exists, or fall back to defaults.
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply command line overrides, then re-validate
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        log_level: Option<String>,
    ) -> CliResult<Self> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate configuration
    pub fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("host must not be empty"));
        }

        for origin in &self.server.cors_origins {
            if origin.parse::<HeaderValue>().is_err() {
                return Err(CliError::config_error(format!(
                    "Invalid cors origin '{}'",
                    origin.escape_debug()
                )));
            }
        }

        Tracer::validate_level(&self.log_level).map_err(|e| {
            CliError::config_error(format!("Invalid log_level '{}': {}", self.log_level, e))
        })?;

        for (index, payload) in self.seed.iter().enumerate() {
            payload.validate(Action::Add).map_err(|e| {
                CliError::config_error(format!("Invalid seed book at index {}: {}", index, e))
            })?;
        }

        Ok(())
    }
}
