//! Item category enumeration

use serde::{Deserialize, Serialize};

/// Closed set of item categories in the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Personality,
    Neurodiversity,
    Cognitive,
    Attachment,
    Clinical,
    TraumaScreening,
    Validity,
    Stress,
    DecisionMaking,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 9] = [
        Self::Personality,
        Self::Neurodiversity,
        Self::Cognitive,
        Self::Attachment,
        Self::Clinical,
        Self::TraumaScreening,
        Self::Validity,
        Self::Stress,
        Self::DecisionMaking,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personality => "personality",
            Self::Neurodiversity => "neurodiversity",
            Self::Cognitive => "cognitive",
            Self::Attachment => "attachment",
            Self::Clinical => "clinical",
            Self::TraumaScreening => "trauma_screening",
            Self::Validity => "validity",
            Self::Stress => "stress",
            Self::DecisionMaking => "decision_making",
        }
    }
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
