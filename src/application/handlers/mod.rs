//! Application handlers.
//!
//! Query handlers that orchestrate the selection engine over the catalog port.

pub mod selection;

pub use selection::{
    CatalogDiagnostics, CatalogDiagnosticsHandler, SelectAdaptiveHandler, SelectAdaptiveQuery,
    SelectBaselineHandler, SelectBaselineQuery,
};
