//! Questionnaire item entity

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::category::ItemCategory;
use super::sensitivity::{RequiredSignals, SensitivityLevel};
use super::tier::ItemTier;
use crate::domain::foundation::{ItemId, ValidationError};
use crate::domain::profile::BigFiveTrait;

/// Upper bound of the authored diagnostic weight
pub const MAX_DIAGNOSTIC_WEIGHT: f64 = 5.0;

fn default_active() -> bool {
    true
}

/// A single questionnaire entry.
///
/// Items are read-only from the selector's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
    pub category: ItemCategory,
    #[serde(default, rename = "trait")]
    pub big_five_trait: Option<BigFiveTrait>,
    #[serde(default)]
    pub facet: Option<String>,
    /// Trait names this item's response informs
    #[serde(default)]
    pub correlated_traits: BTreeSet<String>,
    /// 0-5, ranks candidates within a category
    #[serde(default)]
    pub diagnostic_weight: f64,
    /// 0-1, tie-breaker after diagnostic weight
    #[serde(default)]
    pub discrimination_index: f64,
    #[serde(default)]
    pub sensitivity: SensitivityLevel,
    #[serde(default)]
    pub required_signals: Option<RequiredSignals>,
    #[serde(default)]
    pub is_baseline: bool,
    #[serde(default)]
    pub baseline_priority: Option<u32>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, deserialize_with = "ItemTier::deserialize_resolved")]
    pub tier: ItemTier,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Supplementary instrument this item belongs to, e.g. `stress`
    #[serde(default)]
    pub instrument: Option<String>,
}

impl Item {
    /// Creates an active, non-baseline, insensitive core item.
    pub fn new(
        id: ItemId,
        text: impl Into<String>,
        category: ItemCategory,
    ) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            id,
            text,
            category,
            big_five_trait: None,
            facet: None,
            correlated_traits: BTreeSet::new(),
            diagnostic_weight: 0.0,
            discrimination_index: 0.0,
            sensitivity: SensitivityLevel::None,
            required_signals: None,
            is_baseline: false,
            baseline_priority: None,
            active: true,
            tier: ItemTier::Core,
            tags: BTreeSet::new(),
            instrument: None,
        })
    }

    pub fn with_trait(mut self, t: BigFiveTrait) -> Self {
        self.big_five_trait = Some(t);
        self
    }

    pub fn with_facet(mut self, facet: impl Into<String>) -> Self {
        self.facet = Some(facet.into());
        self
    }

    pub fn with_correlated_trait(mut self, name: impl Into<String>) -> Self {
        self.correlated_traits.insert(name.into());
        self
    }

    pub fn with_weights(mut self, diagnostic_weight: f64, discrimination_index: f64) -> Self {
        self.diagnostic_weight = diagnostic_weight;
        self.discrimination_index = discrimination_index;
        self
    }

    pub fn with_sensitivity(mut self, level: SensitivityLevel, signals: RequiredSignals) -> Self {
        self.sensitivity = level;
        self.required_signals = Some(signals);
        self
    }

    pub fn as_baseline(mut self, priority: u32) -> Self {
        self.is_baseline = true;
        self.baseline_priority = Some(priority);
        self
    }

    pub fn with_tier(mut self, tier: ItemTier) -> Self {
        self.tier = tier;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn with_instrument(mut self, instrument: impl Into<String>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    pub fn correlates_with(&self, trait_name: &str) -> bool {
        self.correlated_traits
            .iter()
            .any(|t| t.eq_ignore_ascii_case(trait_name))
    }

    pub fn is_instrument(&self, instrument: &str) -> bool {
        self.instrument
            .as_deref()
            .is_some_and(|i| i.eq_ignore_ascii_case(instrument))
    }

    /// Checks the item invariants catalogs rely on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.trim().is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        ValidationError::check_range(
            "diagnostic_weight",
            self.diagnostic_weight,
            0.0,
            MAX_DIAGNOSTIC_WEIGHT,
        )?;
        ValidationError::check_range("discrimination_index", self.discrimination_index, 0.0, 1.0)?;
        if self.is_baseline && self.baseline_priority.is_none() {
            return Err(ValidationError::invalid_format(
                "baseline_priority",
                format!("baseline item '{}' has no baseline priority", self.id),
            ));
        }
        if let Some(facet) = &self.facet {
            if facet.trim().is_empty() {
                return Err(ValidationError::empty_field("facet"));
            }
        }
        Ok(())
    }
}
