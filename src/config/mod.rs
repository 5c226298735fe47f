//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ADAPTIVE_ASSESSMENT` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use adaptive_assessment::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Pool multiplier: {}", config.selection.candidate_pool_multiplier);
//! ```

mod catalog;
mod error;
mod logging;
mod selection;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use selection::SelectionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Selection engine tunables
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Item bank location
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ADAPTIVE_ASSESSMENT` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ADAPTIVE_ASSESSMENT__SELECTION__SHUFFLE_SEED=42` -> `selection.shuffle_seed = 42`
    /// - `ADAPTIVE_ASSESSMENT__CATALOG__ITEM_BANK_PATH=...` -> `catalog.item_bank_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ADAPTIVE_ASSESSMENT")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.selection.validate()?;
        self.catalog.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
