//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Catalog Ports
//!
//! - `ItemCatalog` - Filtered, sorted, limited reads of the item bank

mod item_catalog;

pub use item_catalog::{CatalogError, ItemCatalog};
