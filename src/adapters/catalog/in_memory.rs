//! In-Memory Item Catalog Adapter
//!
//! Holds the item bank in memory and evaluates filters directly.
//! Used by the binary after loading a bank file, and by tests.

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::item::{Item, ItemFilter, ItemSort};
use crate::ports::{CatalogError, ItemCatalog};

/// In-memory item bank
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemCatalog {
    items: Arc<RwLock<Vec<Item>>>,
}

impl InMemoryItemCatalog {
    /// Create a catalog pre-filled with `items`.
    ///
    /// Every item is validated and ids must be unique.
    pub fn with_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        check_unique(&items)?;
        for item in &items {
            item.validate()?;
        }
        Ok(Self {
            items: Arc::new(RwLock::new(items)),
        })
    }

    /// Number of stored items, active or not
    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

fn check_unique(items: &[Item]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(&item.id) {
            return Err(CatalogError::DuplicateItem(item.id.clone()));
        }
    }
    Ok(())
}

#[async_trait]
impl ItemCatalog for InMemoryItemCatalog {
    async fn find(
        &self,
        filter: &ItemFilter,
        sort: ItemSort,
        limit: Option<usize>,
    ) -> Result<Vec<Item>, CatalogError> {
        let items = self.items.read().await;
        let mut found: Vec<Item> = items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        drop(items);

        found.sort_by(|a, b| sort.compare(a, b));
        if let Some(limit) = limit {
            found.truncate(limit);
        }
        Ok(found)
    }

    async fn count_active(&self, filter: &ItemFilter) -> Result<usize, CatalogError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|item| item.active && filter.matches(item))
            .count())
    }
}
