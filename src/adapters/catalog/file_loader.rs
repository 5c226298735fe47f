//! Item bank file loader.
//!
//! Reads a YAML (`.yaml` / `.yml`) or JSON (`.json`) file holding a list of
//! items. Every item is validated and ids must be unique.

use std::collections::HashSet;
use std::path::Path;

use crate::domain::item::Item;
use crate::ports::CatalogError;

/// Supported item bank encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankFormat {
    Yaml,
    Json,
}

impl BankFormat {
    /// Pick the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CatalogError::LoadFailed(format!(
                "unsupported item bank extension: {}",
                path.display()
            ))),
        }
    }
}

/// Load and validate an item bank file
pub async fn load_item_bank(path: &Path) -> Result<Vec<Item>, CatalogError> {
    let format = BankFormat::from_path(path)?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| CatalogError::LoadFailed(format!("{}: {}", path.display(), e)))?;
    let items = parse_item_bank(&content, format)?;
    tracing::info!(path = %path.display(), items = items.len(), "item bank loaded");
    Ok(items)
}

/// Parse and validate an item bank already in memory
pub fn parse_item_bank(content: &str, format: BankFormat) -> Result<Vec<Item>, CatalogError> {
    let items: Vec<Item> = match format {
        BankFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| CatalogError::LoadFailed(format!("invalid YAML: {}", e)))?,
        BankFormat::Json => serde_json::from_str(content)
            .map_err(|e| CatalogError::LoadFailed(format!("invalid JSON: {}", e)))?,
    };

    let mut seen = HashSet::with_capacity(items.len());
    for item in &items {
        item.validate()?;
        if !seen.insert(&item.id) {
            return Err(CatalogError::DuplicateItem(item.id.clone()));
        }
    }
    Ok(items)
}
