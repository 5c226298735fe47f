//! Item catalog adapters.

mod file_loader;
mod in_memory;

pub use file_loader::{load_item_bank, parse_item_bank, BankFormat};
pub use in_memory::InMemoryItemCatalog;
