//! Runtime configuration.
//!
//! Layered: built-in defaults, then an optional `storefront.yaml`, then
//! `STOREFRONT_*` environment variables (e.g. `STOREFRONT_DRAFT_DIR`).

use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "storefront.yaml";
pub const ENV_PREFIX: &str = "STOREFRONT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
    #[error("Invalid configuration: {0} must be greater than zero")]
    NotPositive(&'static str),
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Directory holding the persisted order draft.
    pub draft_dir: PathBuf,
    /// Mailbox size for each service actor.
    pub actor_buffer_size: usize,
    /// Filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// UPI id customers pay to before submitting a UPI order.
    pub merchant_upi_id: String,
    /// How long the readiness probe waits for the catalog service.
    pub connect_timeout_ms: u64,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Some(Path::new(DEFAULT_CONFIG_FILE)))
    }

    /// Missing files are skipped; a present but malformed file is an error.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("draft_dir", ".storefront")?
            .set_default("actor_buffer_size", 32_i64)?
            .set_default("log_filter", "info")?
            .set_default("merchant_upi_id", "viraajdudeja@fam")?
            .set_default("connect_timeout_ms", 5000_i64)?;
        if let Some(path) = file {
            builder = builder.add_source(File::from(path).required(false));
        }
        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Values that would otherwise fail later at startup.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.actor_buffer_size == 0 {
            return Err(ConfigError::NotPositive("actor_buffer_size"));
        }
        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::NotPositive("connect_timeout_ms"));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
