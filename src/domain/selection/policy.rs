//! Tunables shared by the selectors

use serde::{Deserialize, Serialize};

/// Candidates requested per open slot in a pass
pub const DEFAULT_CANDIDATE_POOL_MULTIPLIER: usize = 3;
/// Minimum diagnostic weight for fallback items
pub const DEFAULT_FALLBACK_MIN_WEIGHT: f64 = 2.0;

/// Selection tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SelectionPolicy {
    /// Over-fetch factor so gated or already-chosen candidates do not starve a pass
    pub candidate_pool_multiplier: usize,
    pub fallback_min_weight: f64,
}

impl Default for SelectionPolicy {
    fn default() -> Self {
        Self {
            candidate_pool_multiplier: DEFAULT_CANDIDATE_POOL_MULTIPLIER,
            fallback_min_weight: DEFAULT_FALLBACK_MIN_WEIGHT,
        }
    }
}
