//! Baseline battery selection.
//!
//! The baseline is the fixed first block every respondent receives. Quick and
//! standard assessments take baseline items in authored priority order;
//! comprehensive assessments are assembled from a trait-balanced block plus
//! a neurodiversity screening block and then shuffled.

use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

use super::candidates::CandidateSet;
use super::policy::SelectionPolicy;
use super::report::{Selection, SelectionError, SelectionPass, SelectionReport};
use crate::domain::item::{AssessmentTier, ItemCategory, ItemFilter, ItemSort};
use crate::domain::profile::{BigFiveTrait, SelectionSession, TraitProfile};
use crate::ports::ItemCatalog;

/// Items per Big-Five trait in a comprehensive baseline
pub const ITEMS_PER_TRAIT: usize = 2;
/// Neurodiversity screening items in a comprehensive baseline
pub const NEURODIVERSITY_SCREENING_QUOTA: usize = 10;

/// Slots a comprehensive baseline can fill by construction
pub const COMPREHENSIVE_COMPOSITION: usize =
    BigFiveTrait::ALL.len() * ITEMS_PER_TRAIT + NEURODIVERSITY_SCREENING_QUOTA;

fn requested_for(tier: AssessmentTier) -> usize {
    match tier {
        AssessmentTier::Comprehensive => tier.baseline_target().min(COMPREHENSIVE_COMPOSITION),
        _ => tier.baseline_target(),
    }
}

/// Parse a raw tier name, rejecting unknown tiers.
pub fn parse_tier(raw: &str) -> Result<AssessmentTier, SelectionError> {
    raw.parse::<AssessmentTier>()
        .map_err(|_| SelectionError::UnknownTier(raw.trim().to_string()))
}

/// Selects the non-adaptive first block of items.
pub struct BaselineSelector {
    catalog: Arc<dyn ItemCatalog>,
    policy: SelectionPolicy,
}

impl BaselineSelector {
    pub fn new(catalog: Arc<dyn ItemCatalog>, policy: SelectionPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Select the baseline battery for `tier`.
    ///
    /// Returns at most `tier.baseline_target()` active items. A bank with too
    /// few baseline items yields a short selection, not an error.
    #[tracing::instrument(skip_all, fields(tier = %tier))]
    pub async fn select<R>(
        &self,
        tier: AssessmentTier,
        rng: &mut R,
    ) -> Result<Selection, SelectionError>
    where
        R: Rng + ?Sized,
    {
        let target = tier.baseline_target();
        // Baseline content is gated as if nothing had been answered yet.
        let session = SelectionSession::new();
        let profile = TraitProfile::empty();
        let catalog = self.catalog.as_ref();
        let mut set = CandidateSet::new(&session, &profile, self.policy.candidate_pool_multiplier);

        let eligible = |extra: ItemFilter| {
            ItemFilter::And(vec![
                ItemFilter::Baseline,
                ItemFilter::ByTiers(tier.allowed_item_tiers().to_vec()),
                extra,
            ])
        };

        let (items, passes) = match tier {
            AssessmentTier::Comprehensive => {
                for t in BigFiveTrait::ALL {
                    set.fill(
                        catalog,
                        SelectionPass::TraitBalance,
                        eligible(ItemFilter::And(vec![
                            ItemFilter::ByCategory(ItemCategory::Personality),
                            ItemFilter::ByTrait(t),
                        ])),
                        ItemSort::BaselinePriority,
                        ITEMS_PER_TRAIT,
                    )
                    .await?;
                }
                set.fill(
                    catalog,
                    SelectionPass::NeurodiversityScreening,
                    eligible(ItemFilter::ByCategory(ItemCategory::Neurodiversity)),
                    ItemSort::BaselinePriority,
                    NEURODIVERSITY_SCREENING_QUOTA,
                )
                .await?;

                let (mut items, passes) = set.finish();
                items.shuffle(rng);
                items.truncate(target);
                (items, passes)
            }
            AssessmentTier::Quick | AssessmentTier::Standard => {
                set.fill(
                    catalog,
                    SelectionPass::BaselinePriority,
                    eligible(ItemFilter::And(vec![])),
                    ItemSort::BaselinePriority,
                    target,
                )
                .await?;
                set.finish()
            }
        };

        let report = SelectionReport {
            requested: requested_for(tier),
            returned: items.len(),
            indicators: None,
            budget: None,
            passes,
        };
        if report.is_short() {
            tracing::warn!(
                requested = report.requested,
                returned = report.returned,
                "item bank is short of baseline content"
            );
        } else {
            tracing::info!(selected = report.returned, "baseline selected");
        }

        Ok(Selection { items, report })
    }
}
