//! Tracing subscriber installation

use std::error::Error;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Tracing setup for the bookshelf binary.
pub struct Tracer;

impl Tracer {
    /// Installs a stdout fmt subscriber.
    ///
    /// `RUST_LOG` takes precedence over `default_level` when set.
    ///
    /// # Errors
    ///
    /// Returns an error if `default_level` is not a valid filter or a
    /// global subscriber is already installed.
    pub fn install(default_level: &str) -> Result<(), Box<dyn Error + Send + Sync>> {
        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::try_new(default_level)?,
        };

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false).with_filter(filter))
            .try_init()?;

        Ok(())
    }

    /// Check a level/filter string without installing anything
    pub fn validate_level(level: &str) -> Result<(), String> {
        EnvFilter::try_new(level)
            .map(|_| ())
            .map_err(|e| e.to_string())
    }
}
