//! CatalogDiagnosticsHandler - Query handler for item bank coverage.
//!
//! Reports how much active content the catalog holds per category. Selection
//! never depends on these numbers.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::item::{ItemCategory, ItemFilter};
use crate::ports::ItemCatalog;

/// Active item counts of a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogDiagnostics {
    pub active_items: usize,
    pub baseline_items: usize,
    pub by_category: BTreeMap<ItemCategory, usize>,
}

/// Handler for catalog diagnostics.
pub struct CatalogDiagnosticsHandler {
    catalog: Arc<dyn ItemCatalog>,
}

impl CatalogDiagnosticsHandler {
    pub fn new(catalog: Arc<dyn ItemCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<CatalogDiagnostics, DomainError> {
        let active_items = self.catalog.count_active(&ItemFilter::And(vec![])).await?;
        let baseline_items = self.catalog.count_active(&ItemFilter::Baseline).await?;

        let mut by_category = BTreeMap::new();
        for category in ItemCategory::ALL {
            let count = self
                .catalog
                .count_active(&ItemFilter::ByCategory(category))
                .await?;
            if count > 0 {
                by_category.insert(category, count);
            }
        }

        tracing::debug!(active_items, baseline_items, "catalog diagnostics collected");
        Ok(CatalogDiagnostics {
            active_items,
            baseline_items,
            by_category,
        })
    }
}
