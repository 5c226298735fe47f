//! Item content tiers and assessment tiers.
//!
//! Every item belongs to a content tier; every assessment is run at an
//! assessment tier which decides how many baseline items are asked and which
//! content tiers they may be drawn from.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Content tier of an item in the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemTier {
    /// Essential items, asked in every assessment.
    Core,
    /// Items added in standard-length assessments.
    Standard,
    /// Items reserved for comprehensive assessments.
    Extended,
}

impl ItemTier {
    /// Resolves a raw tier tag to a tier.
    ///
    /// Fallback table:
    ///
    /// | raw value                 | resolved   |
    /// |---------------------------|------------|
    /// | missing / blank           | `Core`     |
    /// | `core`                    | `Core`     |
    /// | `standard`                | `Standard` |
    /// | `extended`, `comprehensive` | `Extended` |
    /// | anything else             | error      |
    pub fn resolve(raw: Option<&str>) -> Result<Self, ValidationError> {
        let value = match raw.map(str::trim) {
            None | Some("") => return Ok(Self::Core),
            Some(v) => v.to_ascii_lowercase(),
        };
        match value.as_str() {
            "core" => Ok(Self::Core),
            "standard" => Ok(Self::Standard),
            "extended" | "comprehensive" => Ok(Self::Extended),
            other => Err(ValidationError::invalid_format(
                "tier",
                format!("unknown item tier '{}'", other),
            )),
        }
    }

    /// Serde hook routing item deserialization through [`ItemTier::resolve`].
    pub(crate) fn deserialize_resolved<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Self::resolve(raw.as_deref()).map_err(serde::de::Error::custom)
    }
}

impl Default for ItemTier {
    fn default() -> Self {
        Self::Core
    }
}

/// Length tier of an assessment, chosen by the respondent or operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssessmentTier {
    /// 10 baseline items, core content only.
    Quick,
    /// 20 baseline items, core and standard content.
    Standard,
    /// 25 baseline slots, trait-balanced with neurodiversity screening.
    Comprehensive,
}

impl AssessmentTier {
    /// Number of baseline items this tier asks for.
    pub fn baseline_target(&self) -> usize {
        match self {
            Self::Quick => 10,
            Self::Standard => 20,
            Self::Comprehensive => 25,
        }
    }

    /// Item content tiers this assessment tier may draw from.
    pub fn allowed_item_tiers(&self) -> &'static [ItemTier] {
        match self {
            Self::Quick => &[ItemTier::Core],
            Self::Standard => &[ItemTier::Core, ItemTier::Standard],
            Self::Comprehensive => &[ItemTier::Core, ItemTier::Standard, ItemTier::Extended],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Standard => "standard",
            Self::Comprehensive => "comprehensive",
        }
    }
}

impl std::fmt::Display for AssessmentTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AssessmentTier {
    type Err = ValidationError;

    /// Unknown tiers are rejected; there is no default tier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "quick" => Ok(Self::Quick),
            "standard" => Ok(Self::Standard),
            "comprehensive" => Ok(Self::Comprehensive),
            _ => Err(ValidationError::invalid_format(
                "tier",
                format!("unknown assessment tier '{}'", s),
            )),
        }
    }
}
