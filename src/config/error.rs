//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Candidate pool multiplier must be at least 1")]
    InvalidPoolMultiplier,

    #[error("Fallback minimum weight must be within 0-5, got {0}")]
    InvalidFallbackWeight(f64),

    #[error("Unknown default assessment tier: '{0}'")]
    UnknownDefaultTier(String),

    #[error("Item bank path has no supported extension (yaml, yml, json): {0}")]
    UnsupportedBankFormat(String),

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),
}
