//! Accumulates accepted items across retrieval passes.

use std::collections::BTreeSet;

use super::report::{PassReport, SelectionPass};
use super::sensitivity_gate::SensitivityGate;
use crate::domain::foundation::ItemId;
use crate::domain::item::{Item, ItemFilter, ItemSort};
use crate::domain::profile::{SelectionSession, TraitProfile};
use crate::ports::{CatalogError, ItemCatalog};

/// Items accepted so far in one selection run.
///
/// Every pass sees only items that are active, not excluded by the session
/// and not already accepted. Each candidate goes through the sensitivity
/// gate; gated candidates are skipped, never deferred.
pub(crate) struct CandidateSet<'a> {
    session: &'a SelectionSession,
    profile: &'a TraitProfile,
    pool_multiplier: usize,
    chosen: Vec<Item>,
    chosen_ids: BTreeSet<ItemId>,
    passes: Vec<PassReport>,
}

impl<'a> CandidateSet<'a> {
    pub(crate) fn new(
        session: &'a SelectionSession,
        profile: &'a TraitProfile,
        pool_multiplier: usize,
    ) -> Self {
        Self {
            session,
            profile,
            pool_multiplier: pool_multiplier.max(1),
            chosen: Vec::new(),
            chosen_ids: BTreeSet::new(),
            passes: Vec::new(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.chosen.len()
    }

    fn is_blocked(&self, id: &ItemId) -> bool {
        self.session.exclude_ids().contains(id) || self.chosen_ids.contains(id)
    }

    fn blocked_filter(&self, skipped: &BTreeSet<ItemId>) -> ItemFilter {
        ItemFilter::excluding(
            self.session
                .exclude_ids()
                .iter()
                .chain(self.chosen_ids.iter())
                .chain(skipped.iter()),
        )
    }

    /// Runs one retrieval pass, accepting up to `slots` items.
    ///
    /// Candidates are fetched in windows of `slots × pool_multiplier`. Gated
    /// candidates are excluded from the next window, so the pass keeps going
    /// until `slots` items are accepted or the catalog has nothing left.
    /// Returns the number of items accepted.
    pub(crate) async fn fill(
        &mut self,
        catalog: &dyn ItemCatalog,
        pass: SelectionPass,
        filter: ItemFilter,
        sort: ItemSort,
        slots: usize,
    ) -> Result<usize, CatalogError> {
        if slots == 0 {
            return Ok(0);
        }

        let mut skipped: BTreeSet<ItemId> = BTreeSet::new();
        let mut accepted = 0;
        let mut gated = 0;
        while accepted < slots {
            let query = ItemFilter::And(vec![
                ItemFilter::Active,
                self.blocked_filter(&skipped),
                filter.clone(),
            ]);
            let limit = (slots - accepted).saturating_mul(self.pool_multiplier);
            let candidates = catalog.find(&query, sort, Some(limit)).await?;
            let exhausted = candidates.len() < limit;

            let mut progressed = false;
            for item in candidates {
                if accepted == slots {
                    break;
                }
                if !item.active || self.is_blocked(&item.id) || skipped.contains(&item.id) {
                    continue;
                }
                progressed = true;
                if !SensitivityGate::is_eligible(&item, self.session, self.profile) {
                    tracing::trace!(item_id = %item.id, sensitivity = %item.sensitivity, "candidate gated");
                    gated += 1;
                    skipped.insert(item.id);
                    continue;
                }
                self.chosen_ids.insert(item.id.clone());
                self.chosen.push(item);
                accepted += 1;
            }

            // Stop once a window brings nothing new.
            if exhausted || !progressed {
                break;
            }
        }

        tracing::debug!(?pass, slots, accepted, gated, "selection pass complete");
        self.record(pass, slots, accepted, gated);
        Ok(accepted)
    }

    fn record(&mut self, pass: SelectionPass, requested: usize, accepted: usize, gated: usize) {
        match self.passes.iter_mut().find(|p| p.pass == pass) {
            Some(existing) => {
                existing.requested += requested;
                existing.accepted += accepted;
                existing.gated += gated;
            }
            None => self.passes.push(PassReport {
                pass,
                requested,
                accepted,
                gated,
            }),
        }
    }

    pub(crate) fn finish(self) -> (Vec<Item>, Vec<PassReport>) {
        (self.chosen, self.passes)
    }
}
