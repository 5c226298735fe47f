//! In-module catalog fake for selector unit tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::item::{Item, ItemFilter, ItemSort};
use crate::ports::{CatalogError, ItemCatalog};

/// Evaluates filters over a fixed item list and counts queries.
pub(crate) struct StubCatalog {
    items: Vec<Item>,
    queries: AtomicUsize,
    fail: bool,
}

impl StubCatalog {
    pub(crate) fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            queries: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            items: Vec::new(),
            queries: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub(crate) fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ItemCatalog for StubCatalog {
    async fn find(
        &self,
        filter: &ItemFilter,
        sort: ItemSort,
        limit: Option<usize>,
    ) -> Result<Vec<Item>, CatalogError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(CatalogError::Unavailable("stub offline".into()));
        }
        let mut found: Vec<Item> = self
            .items
            .iter()
            .filter(|i| filter.matches(i))
            .cloned()
            .collect();
        found.sort_by(|a, b| sort.compare(a, b));
        if let Some(limit) = limit {
            found.truncate(limit);
        }
        Ok(found)
    }

    async fn count_active(&self, filter: &ItemFilter) -> Result<usize, CatalogError> {
        Ok(self
            .items
            .iter()
            .filter(|i| i.active && filter.matches(i))
            .count())
    }
}
