//! Selection module - the adaptive item-selection engine.
//!
//! Components, leaves first:
//!
//! - **IndicatorEstimator** - neurodiversity, sensory and communication indicators
//! - **DiversityAllocator** - per-category item budget from the indicators
//! - **SensitivityGate** - evidence thresholds for sensitive content
//! - **BaselineSelector** - fixed first block, by tier
//! - **AdaptiveSelector** - category passes plus fallback over the catalog
//!
//! # Invariants
//!
//! 1. A selection never exceeds the requested count
//! 2. A selection never repeats an id or returns an excluded id
//! 3. Inactive items are never returned
//! 4. Sensitive items only appear once the session carries enough evidence
//! 5. Budgets always sum to at most the requested count

mod adaptive;
mod allocator;
mod baseline;
mod candidates;
mod indicators;
mod policy;
mod report;
mod sensitivity_gate;
#[cfg(test)]
pub(crate) mod test_support;

pub use adaptive::{
    AdaptiveSelector, COMMUNICATION_TAG, PROCESSING_TAG, SENSORY_TAG, SUPPLEMENTARY_INSTRUMENTS,
};
pub use allocator::{CategoryBudget, DiversityAllocator, INDICATOR_THRESHOLD};
pub use baseline::{
    parse_tier, BaselineSelector, COMPREHENSIVE_COMPOSITION, ITEMS_PER_TRAIT,
    NEURODIVERSITY_SCREENING_QUOTA,
};
pub use indicators::{extreme_response_share, latency_variation, IndicatorEstimator, Indicators};
pub use policy::{SelectionPolicy, DEFAULT_CANDIDATE_POOL_MULTIPLIER, DEFAULT_FALLBACK_MIN_WEIGHT};
pub use report::{PassReport, Selection, SelectionError, SelectionPass, SelectionReport};
pub use sensitivity_gate::SensitivityGate;
