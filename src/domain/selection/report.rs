//! Selection results, per-pass statistics and errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::allocator::CategoryBudget;
use super::indicators::Indicators;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::item::Item;
use crate::domain::profile::ProfileError;
use crate::ports::CatalogError;

/// Errors that stop a selection run.
///
/// A short result is not an error; see [`SelectionReport::shortfall`].
#[derive(Debug, Clone, Error)]
pub enum SelectionError {
    #[error("Unknown assessment tier: '{0}'")]
    UnknownTier(String),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl From<SelectionError> for DomainError {
    fn from(err: SelectionError) -> Self {
        match err {
            SelectionError::UnknownTier(tier) => {
                DomainError::new(ErrorCode::UnknownTier, format!("Unknown assessment tier: '{}'", tier))
                    .with_detail("tier", tier)
            }
            SelectionError::Profile(ProfileError::MissingTraits { missing }) => {
                let names: Vec<&str> = missing.iter().map(|t| t.as_str()).collect();
                DomainError::new(
                    ErrorCode::IncompleteProfile,
                    "Trait profile is missing required trait scores",
                )
                .with_detail("missing", names.join(","))
            }
            SelectionError::Profile(ProfileError::Invalid(e)) => e.into(),
            SelectionError::Catalog(e) => e.into(),
        }
    }
}

/// Retrieval pass that produced candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPass {
    BaselinePriority,
    TraitBalance,
    NeurodiversityScreening,
    Facet,
    Communication,
    Processing,
    GeneralPersonality,
    Neurodiversity,
    Sensory,
    Other,
    Fallback,
}

/// Outcome of one retrieval pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassReport {
    pub pass: SelectionPass,
    /// Slots the pass tried to fill
    pub requested: usize,
    pub accepted: usize,
    /// Candidates skipped by the sensitivity gate
    pub gated: usize,
}

/// Diagnostics returned alongside every selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionReport {
    pub requested: usize,
    pub returned: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indicators: Option<Indicators>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<CategoryBudget>,
    pub passes: Vec<PassReport>,
}

impl SelectionReport {
    /// Items the catalog could not supply
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.returned)
    }

    /// Whether the catalog ran short of eligible content
    pub fn is_short(&self) -> bool {
        self.shortfall() > 0
    }

    pub fn pass(&self, pass: SelectionPass) -> Option<&PassReport> {
        self.passes.iter().find(|p| p.pass == pass)
    }

    pub fn total_gated(&self) -> usize {
        self.passes.iter().map(|p| p.gated).sum()
    }
}

/// Selected items with their report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub items: Vec<Item>,
    pub report: SelectionReport,
}
