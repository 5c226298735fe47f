//! Item catalog configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::catalog::BankFormat;

/// Item catalog configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML or JSON item bank file
    pub item_bank_path: Option<PathBuf>,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.item_bank_path {
            BankFormat::from_path(path)
                .map_err(|_| ValidationError::UnsupportedBankFormat(path.display().to_string()))?;
        }
        Ok(())
    }
}
