//! Sensitivity levels and gating rules attached to items

use serde::{Deserialize, Serialize};

use crate::domain::profile::{AssessmentPhase, SeverityLevel};

/// Ordinal sensitivity classification of an item's content
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityLevel {
    None,
    Low,
    Moderate,
    High,
    Extreme,
}

impl SensitivityLevel {
    /// Whether items at this level need gating at all
    pub fn is_gated(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl Default for SensitivityLevel {
    fn default() -> Self {
        Self::None
    }
}

impl std::fmt::Display for SensitivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
            Self::Extreme => write!(f, "extreme"),
        }
    }
}

/// One condition on a named profile dimension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriggerCondition {
    /// Trait, extra dimension or behavioral pattern name
    pub dimension: String,
    #[serde(default)]
    pub min_score: Option<f64>,
    #[serde(default)]
    pub max_score: Option<f64>,
    #[serde(default)]
    pub min_level: Option<SeverityLevel>,
}

impl TriggerCondition {
    pub fn new(dimension: impl Into<String>) -> Self {
        Self {
            dimension: dimension.into(),
            min_score: None,
            max_score: None,
            min_level: None,
        }
    }

    pub fn with_min_score(mut self, score: f64) -> Self {
        self.min_score = Some(score);
        self
    }

    pub fn with_max_score(mut self, score: f64) -> Self {
        self.max_score = Some(score);
        self
    }

    pub fn with_min_level(mut self, level: SeverityLevel) -> Self {
        self.min_level = Some(level);
        self
    }

    /// True if any numeric bound is set
    pub fn has_bounds(&self) -> bool {
        self.min_score.is_some() || self.max_score.is_some() || self.min_level.is_some()
    }
}

/// Minimum evidence an item needs before it may be shown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredSignals {
    #[serde(default)]
    pub min_question_count: Option<u32>,
    #[serde(default)]
    pub required_phase: Option<AssessmentPhase>,
    #[serde(default)]
    pub conditions: Vec<TriggerCondition>,
    /// Combine conditions with OR instead of AND
    #[serde(default)]
    pub any_of: bool,
}

impl RequiredSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_question_count(mut self, count: u32) -> Self {
        self.min_question_count = Some(count);
        self
    }

    pub fn with_required_phase(mut self, phase: AssessmentPhase) -> Self {
        self.required_phase = Some(phase);
        self
    }

    pub fn with_condition(mut self, condition: TriggerCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn any_of(mut self) -> Self {
        self.any_of = true;
        self
    }
}
