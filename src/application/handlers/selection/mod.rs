//! Selection handlers.

mod catalog_diagnostics;
mod rng;
mod select_adaptive;
mod select_baseline;

pub use catalog_diagnostics::{CatalogDiagnostics, CatalogDiagnosticsHandler};
pub use select_adaptive::{SelectAdaptiveHandler, SelectAdaptiveQuery};
pub use select_baseline::{SelectBaselineHandler, SelectBaselineQuery};
