//! SelectAdaptiveHandler - Query handler for adaptive follow-up batches.
//!
//! The caller owns the session; this handler never mutates it. Recording
//! the returned items as presented is the caller's job.

use std::sync::Arc;

use super::rng::shuffle_rng;
use crate::domain::foundation::DomainError;
use crate::domain::profile::{SelectionSession, TraitProfile};
use crate::domain::selection::{AdaptiveSelector, Selection, SelectionPolicy};
use crate::ports::ItemCatalog;

/// Query for the next adaptive batch.
#[derive(Debug, Clone)]
pub struct SelectAdaptiveQuery {
    pub profile: TraitProfile,
    pub session: SelectionSession,
    pub total_count: usize,
}

/// Handler for adaptive selection.
pub struct SelectAdaptiveHandler {
    selector: AdaptiveSelector,
    shuffle_seed: Option<u64>,
}

impl SelectAdaptiveHandler {
    pub fn new(catalog: Arc<dyn ItemCatalog>, policy: SelectionPolicy) -> Self {
        Self {
            selector: AdaptiveSelector::new(catalog, policy),
            shuffle_seed: None,
        }
    }

    /// Fix the presentation-order seed
    pub fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    pub async fn handle(&self, query: SelectAdaptiveQuery) -> Result<Selection, DomainError> {
        let mut rng = shuffle_rng(self.shuffle_seed);
        let selection = self
            .selector
            .select(&query.profile, &query.session, query.total_count, &mut rng)
            .await?;
        Ok(selection)
    }
}
