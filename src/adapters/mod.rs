//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `catalog` - Item bank catalogs (in-memory, file-backed)

pub mod catalog;

pub use catalog::{load_item_bank, InMemoryItemCatalog};
