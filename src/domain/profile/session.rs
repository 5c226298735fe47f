//! Caller-owned selection session state

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::response::ResponseRecord;
use crate::domain::foundation::{ItemId, SessionId, ValidationError};
use crate::domain::item::Item;

/// Phase of the assessment; only moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentPhase {
    Baseline,
    Adaptive,
    Clinical,
}

impl Default for AssessmentPhase {
    fn default() -> Self {
        Self::Baseline
    }
}

impl std::fmt::Display for AssessmentPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Baseline => write!(f, "baseline"),
            Self::Adaptive => write!(f, "adaptive"),
            Self::Clinical => write!(f, "clinical"),
        }
    }
}

/// Running state of one respondent's assessment.
///
/// The engine only reads it. The exclusion set only grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionSession {
    id: SessionId,
    exclude_ids: BTreeSet<ItemId>,
    items_answered: u32,
    phase: AssessmentPhase,
    responses: Vec<ResponseRecord>,
}

impl SelectionSession {
    /// Fresh session in the baseline phase
    pub fn new() -> Self {
        Self::with_id(SessionId::new())
    }

    pub fn with_id(id: SessionId) -> Self {
        Self {
            id,
            exclude_ids: BTreeSet::new(),
            items_answered: 0,
            phase: AssessmentPhase::Baseline,
            responses: Vec::new(),
        }
    }

    /// Rebuild a session from persisted state
    pub fn restore(
        id: SessionId,
        exclude_ids: BTreeSet<ItemId>,
        items_answered: u32,
        phase: AssessmentPhase,
        responses: Vec<ResponseRecord>,
    ) -> Self {
        Self {
            id,
            exclude_ids,
            items_answered,
            phase,
            responses,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn exclude_ids(&self) -> &BTreeSet<ItemId> {
        &self.exclude_ids
    }

    pub fn items_answered(&self) -> u32 {
        self.items_answered
    }

    pub fn phase(&self) -> AssessmentPhase {
        self.phase
    }

    pub fn responses(&self) -> &[ResponseRecord] {
        &self.responses
    }

    /// Mark a batch of items as presented
    pub fn record_presented<'a>(&mut self, items: impl IntoIterator<Item = &'a Item>) {
        self.exclude_ids
            .extend(items.into_iter().map(|item| item.id.clone()));
    }

    pub fn exclude(&mut self, id: ItemId) {
        self.exclude_ids.insert(id);
    }

    /// Record an answer; its item is excluded from later batches
    pub fn record_response(&mut self, response: ResponseRecord) {
        self.exclude_ids.insert(response.item_id.clone());
        self.items_answered += 1;
        self.responses.push(response);
    }

    /// Move to a later phase
    pub fn advance_to(&mut self, phase: AssessmentPhase) -> Result<(), ValidationError> {
        if phase < self.phase {
            return Err(ValidationError::invalid_format(
                "phase",
                format!("cannot move from {} back to {}", self.phase, phase),
            ));
        }
        self.phase = phase;
        Ok(())
    }
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new()
    }
}
