//! SelectBaselineHandler - Query handler for the baseline battery.
//!
//! Parses the requested tier and returns the first block of items.

use std::sync::Arc;

use super::rng::shuffle_rng;
use crate::domain::foundation::DomainError;
use crate::domain::selection::{parse_tier, BaselineSelector, Selection, SelectionPolicy};
use crate::ports::ItemCatalog;

/// Query for a baseline battery.
#[derive(Debug, Clone)]
pub struct SelectBaselineQuery {
    /// Raw tier name: `quick`, `standard` or `comprehensive`.
    pub tier: String,
}

/// Handler for baseline selection.
pub struct SelectBaselineHandler {
    selector: BaselineSelector,
    shuffle_seed: Option<u64>,
}

impl SelectBaselineHandler {
    pub fn new(catalog: Arc<dyn ItemCatalog>, policy: SelectionPolicy) -> Self {
        Self {
            selector: BaselineSelector::new(catalog, policy),
            shuffle_seed: None,
        }
    }

    /// Fix the presentation-order seed
    pub fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    pub async fn handle(&self, query: SelectBaselineQuery) -> Result<Selection, DomainError> {
        let tier = parse_tier(&query.tier)?;
        let mut rng = shuffle_rng(self.shuffle_seed);
        Ok(self.selector.select(tier, &mut rng).await?)
    }
}
