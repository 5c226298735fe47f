//! Application layer - Queries and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Item selection only reads the catalog, so every handler here is a query.

pub mod handlers;

pub use handlers::{
    CatalogDiagnostics, CatalogDiagnosticsHandler, SelectAdaptiveHandler, SelectAdaptiveQuery,
    SelectBaselineHandler, SelectBaselineQuery,
};
