//! Item Catalog Port - Read access to the item bank.
//!
//! The selection engine treats the bank as an opaque, queryable catalog.
//! Adapters may back it with memory, files or a database.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, ErrorCode, ItemId, ValidationError};
use crate::domain::item::{Item, ItemFilter, ItemSort};

/// Errors that can occur while querying or loading the catalog
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid item: {0}")]
    InvalidItem(#[from] ValidationError),

    #[error("Duplicate item id: {0}")]
    DuplicateItem(ItemId),

    #[error("Failed to load item bank: {0}")]
    LoadFailed(String),
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidItem(e) => e.into(),
            CatalogError::DuplicateItem(id) => {
                DomainError::new(ErrorCode::DuplicateItem, format!("Duplicate item id: {}", id))
                    .with_detail("item_id", id.to_string())
            }
            other => DomainError::new(ErrorCode::CatalogUnavailable, other.to_string()),
        }
    }
}

/// Port for querying the item bank
#[async_trait]
pub trait ItemCatalog: Send + Sync {
    /// Find items matching `filter`, ordered by `sort`
    ///
    /// # Arguments
    /// * `filter` - Predicate every returned item satisfies
    /// * `sort` - Result ordering
    /// * `limit` - Maximum number of items, `None` for all
    ///
    /// # Errors
    /// Returns `CatalogError` if the backing store cannot be queried
    async fn find(
        &self,
        filter: &ItemFilter,
        sort: ItemSort,
        limit: Option<usize>,
    ) -> Result<Vec<Item>, CatalogError>;

    /// Count active items matching `filter`
    ///
    /// Used for diagnostics only; selection never depends on it.
    async fn count_active(&self, filter: &ItemFilter) -> Result<usize, CatalogError>;
}
