//! Error types for the adaptive-assessment binary

use thiserror::Error;

use crate::config::{ConfigError, ValidationError};
use crate::domain::foundation::DomainError;
use crate::ports::CatalogError;
use crate::telemetry::TelemetryError;

/// Binary-level errors
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Configuration loaded but failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationError),

    /// Tracing subscriber setup failed
    #[error("Telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    /// No item bank configured
    #[error("ADAPTIVE_ASSESSMENT__CATALOG__ITEM_BANK_PATH is not set")]
    MissingItemBank,

    /// Item bank could not be loaded or stored
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Selection or diagnostics failed
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Output could not be rendered
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result type for the binary
pub type AppResult<T> = Result<T, AppError>;
