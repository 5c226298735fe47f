//! Selection engine configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::item::{AssessmentTier, MAX_DIAGNOSTIC_WEIGHT};
use crate::domain::selection::{
    SelectionPolicy, DEFAULT_CANDIDATE_POOL_MULTIPLIER, DEFAULT_FALLBACK_MIN_WEIGHT,
};

/// Selection engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    /// Candidates requested per open budget slot
    #[serde(default = "default_pool_multiplier")]
    pub candidate_pool_multiplier: usize,

    /// Minimum diagnostic weight of fallback items
    #[serde(default = "default_fallback_min_weight")]
    pub fallback_min_weight: f64,

    /// Fixed seed for reproducible presentation order
    pub shuffle_seed: Option<u64>,

    /// Tier the binary previews
    #[serde(default = "default_tier")]
    pub default_tier: String,
}

impl SelectionConfig {
    /// Engine tunables
    pub fn policy(&self) -> SelectionPolicy {
        SelectionPolicy {
            candidate_pool_multiplier: self.candidate_pool_multiplier,
            fallback_min_weight: self.fallback_min_weight,
        }
    }

    /// Parsed default tier
    pub fn default_tier(&self) -> Result<AssessmentTier, ValidationError> {
        self.default_tier
            .parse()
            .map_err(|_| ValidationError::UnknownDefaultTier(self.default_tier.clone()))
    }

    /// Validate selection configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.candidate_pool_multiplier == 0 {
            return Err(ValidationError::InvalidPoolMultiplier);
        }
        if !(0.0..=MAX_DIAGNOSTIC_WEIGHT).contains(&self.fallback_min_weight) {
            return Err(ValidationError::InvalidFallbackWeight(self.fallback_min_weight));
        }
        self.default_tier()?;
        Ok(())
    }
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            candidate_pool_multiplier: default_pool_multiplier(),
            fallback_min_weight: default_fallback_min_weight(),
            shuffle_seed: None,
            default_tier: default_tier(),
        }
    }
}

fn default_pool_multiplier() -> usize {
    DEFAULT_CANDIDATE_POOL_MULTIPLIER
}

fn default_fallback_min_weight() -> f64 {
    DEFAULT_FALLBACK_MIN_WEIGHT
}

fn default_tier() -> String {
    "standard".to_string()
}
