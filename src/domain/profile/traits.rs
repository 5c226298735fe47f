//! Big-Five trait dimensions and score severity bands

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the five canonical personality trait dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BigFiveTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl BigFiveTrait {
    /// All traits in canonical order
    pub const ALL: [BigFiveTrait; 5] = [
        Self::Openness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Agreeableness,
        Self::Neuroticism,
    ];

    /// Canonical lowercase name used in item tags and profiles
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Openness => "openness",
            Self::Conscientiousness => "conscientiousness",
            Self::Extraversion => "extraversion",
            Self::Agreeableness => "agreeableness",
            Self::Neuroticism => "neuroticism",
        }
    }
}

impl std::fmt::Display for BigFiveTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BigFiveTrait {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                ValidationError::invalid_format("trait", format!("unknown trait '{}'", s))
            })
    }
}

/// Severity band of a 0-100 dimension score
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityLevel {
    Minimal,
    Mild,
    Moderate,
    Severe,
}

impl SeverityLevel {
    /// Classify a 0-100 score
    /// - Minimal: < 30
    /// - Mild: 30-50
    /// - Moderate: 50-70
    /// - Severe: >= 70
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            Self::Minimal
        } else if score < 50.0 {
            Self::Mild
        } else if score < 70.0 {
            Self::Moderate
        } else {
            Self::Severe
        }
    }
}

impl Default for SeverityLevel {
    fn default() -> Self {
        Self::Minimal
    }
}
