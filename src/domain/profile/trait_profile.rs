//! Trait profile computed from accumulated responses

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use super::traits::BigFiveTrait;
use crate::domain::foundation::ValidationError;

/// Scores above this are "extreme high"
pub const EXTREME_HIGH_THRESHOLD: f64 = 70.0;
/// Scores below this are "extreme low"
pub const EXTREME_LOW_THRESHOLD: f64 = 30.0;
/// Inclusive band of scores that still need clarification
pub const UNCERTAIN_BAND: (f64, f64) = (45.0, 55.0);
/// Neutral midpoint of the 0-100 scale
pub const MIDPOINT: f64 = 50.0;

/// Errors raised when a profile cannot be used for selection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("Trait profile is missing scores for: {}", trait_list(.missing))]
    MissingTraits { missing: Vec<BigFiveTrait> },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

fn trait_list(traits: &[BigFiveTrait]) -> String {
    traits
        .iter()
        .map(BigFiveTrait::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read-only trait profile handed to the selection engine.
///
/// Big-Five scores are optional so an empty profile can exist at session
/// start; the adaptive selector requires all five via [`require_complete`].
/// Extra named dimensions (facets, clinical subscales) and qualitative
/// behavioral patterns ride along for sensitivity gating.
///
/// [`require_complete`]: TraitProfile::require_complete
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TraitProfile {
    #[serde(default)]
    scores: BTreeMap<BigFiveTrait, f64>,
    #[serde(default)]
    dimension_scores: BTreeMap<String, f64>,
    #[serde(default)]
    patterns: BTreeSet<String>,
}

impl TraitProfile {
    /// Profile with no scores (start of a session)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a profile from named scores.
    ///
    /// Big-Five names (case-insensitive) become trait scores; any other name
    /// becomes an additional dimension score. Every score must be 0-100.
    pub fn from_scores<I, K>(scores: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut profile = Self::empty();
        for (name, score) in scores {
            let name = name.as_ref();
            profile = match name.parse::<BigFiveTrait>() {
                Ok(t) => profile.with_score(t, score)?,
                Err(_) => profile.with_dimension(name, score)?,
            };
        }
        Ok(profile)
    }

    /// Set a Big-Five score
    pub fn with_score(mut self, t: BigFiveTrait, score: f64) -> Result<Self, ValidationError> {
        ValidationError::check_range(t.as_str(), score, 0.0, 100.0)?;
        self.scores.insert(t, score);
        Ok(self)
    }

    /// Set an additional named dimension score
    pub fn with_dimension(
        mut self,
        name: impl AsRef<str>,
        score: f64,
    ) -> Result<Self, ValidationError> {
        let key = normalize(name.as_ref());
        if key.is_empty() {
            return Err(ValidationError::empty_field("dimension"));
        }
        ValidationError::check_range(&key, score, 0.0, 100.0)?;
        self.dimension_scores.insert(key, score);
        Ok(self)
    }

    /// Add a behavioral pattern tag such as `high_masking`
    pub fn with_pattern(mut self, pattern: impl AsRef<str>) -> Self {
        let key = normalize(pattern.as_ref());
        if !key.is_empty() {
            self.patterns.insert(key);
        }
        self
    }

    pub fn score(&self, t: BigFiveTrait) -> Option<f64> {
        self.scores.get(&t).copied()
    }

    /// Resolve any named dimension: Big-Five trait first, then extra dimensions
    pub fn dimension_score(&self, name: &str) -> Option<f64> {
        match name.parse::<BigFiveTrait>() {
            Ok(t) => self.score(t),
            Err(_) => self.dimension_scores.get(&normalize(name)).copied(),
        }
    }

    pub fn has_pattern(&self, pattern: &str) -> bool {
        self.patterns.contains(&normalize(pattern))
    }

    /// Names of the Big-Five traits this profile has scores for
    pub fn trait_names(&self) -> BTreeSet<String> {
        self.scores.keys().map(|t| t.as_str().to_string()).collect()
    }

    /// Fail fast unless all five traits are scored and in range
    pub fn require_complete(&self) -> Result<(), ProfileError> {
        let missing: Vec<BigFiveTrait> = BigFiveTrait::ALL
            .into_iter()
            .filter(|t| !self.scores.contains_key(t))
            .collect();
        if !missing.is_empty() {
            return Err(ProfileError::MissingTraits { missing });
        }
        for (t, score) in &self.scores {
            ValidationError::check_range(t.as_str(), *score, 0.0, 100.0)?;
        }
        for (name, score) in &self.dimension_scores {
            ValidationError::check_range(name, *score, 0.0, 100.0)?;
        }
        Ok(())
    }

    /// Traits scored above 70 or below 30, most extreme first
    pub fn extreme_traits(&self) -> Vec<BigFiveTrait> {
        let mut extreme: Vec<(BigFiveTrait, f64)> = self
            .scores
            .iter()
            .filter(|(_, s)| **s > EXTREME_HIGH_THRESHOLD || **s < EXTREME_LOW_THRESHOLD)
            .map(|(t, s)| (*t, (s - MIDPOINT).abs()))
            .collect();
        extreme.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        extreme.into_iter().map(|(t, _)| t).collect()
    }

    /// Traits scored inside the 45-55 band
    pub fn uncertain_traits(&self) -> Vec<BigFiveTrait> {
        self.scores
            .iter()
            .filter(|(_, s)| **s >= UNCERTAIN_BAND.0 && **s <= UNCERTAIN_BAND.1)
            .map(|(t, _)| *t)
            .collect()
    }

    /// Highest-scored trait (first in canonical order on ties)
    pub fn strongest_trait(&self) -> Option<BigFiveTrait> {
        self.scores
            .iter()
            .fold(None, |best: Option<(BigFiveTrait, f64)>, (t, s)| match best {
                Some((_, b)) if b >= *s => best,
                _ => Some((*t, *s)),
            })
            .map(|(t, _)| t)
    }

    /// Lowest-scored trait (first in canonical order on ties)
    pub fn weakest_trait(&self) -> Option<BigFiveTrait> {
        self.scores
            .iter()
            .fold(None, |worst: Option<(BigFiveTrait, f64)>, (t, s)| match worst {
                Some((_, w)) if w <= *s => worst,
                _ => Some((*t, *s)),
            })
            .map(|(t, _)| t)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase()
}
