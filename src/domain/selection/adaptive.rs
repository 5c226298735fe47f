//! Adaptive item selection.
//!
//! Turns the respondent's emerging trait profile into the next batch of
//! items. Indicators steer a per-category budget, category passes fill it in
//! a fixed order, and a fallback pass tops up whatever the categories could
//! not supply. Every candidate goes through the sensitivity gate.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;
use std::sync::Arc;

use super::allocator::DiversityAllocator;
use super::candidates::CandidateSet;
use super::indicators::IndicatorEstimator;
use super::policy::SelectionPolicy;
use super::report::{Selection, SelectionError, SelectionPass, SelectionReport};
use crate::domain::item::{ItemCategory, ItemFilter, ItemSort};
use crate::domain::profile::{BigFiveTrait, SelectionSession, TraitProfile};
use crate::ports::ItemCatalog;

/// Instruments the "other" pass draws from
pub const SUPPLEMENTARY_INSTRUMENTS: &[&str] = &["stress", "decision_making", "attachment"];

pub const COMMUNICATION_TAG: &str = "communication";
pub const PROCESSING_TAG: &str = "processing";
pub const SENSORY_TAG: &str = "sensory";

/// Openness above this opens the processing pass
pub const PROCESSING_OPENNESS_TRIGGER: f64 = 65.0;
/// Conscientiousness below this opens the processing pass
pub const PROCESSING_CONSCIENTIOUSNESS_TRIGGER: f64 = 35.0;

/// Selects follow-up items from the running trait profile.
pub struct AdaptiveSelector {
    catalog: Arc<dyn ItemCatalog>,
    policy: SelectionPolicy,
}

impl AdaptiveSelector {
    pub fn new(catalog: Arc<dyn ItemCatalog>, policy: SelectionPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Select up to `total_count` items not yet presented in `session`.
    ///
    /// # Errors
    ///
    /// - `Profile` if any Big-Five score is missing or out of range
    /// - `Catalog` if the catalog cannot be queried
    ///
    /// Running out of eligible content is reported through
    /// [`SelectionReport::shortfall`], never as an error.
    #[tracing::instrument(skip_all, fields(session_id = %session.id(), total_count = total_count))]
    pub async fn select<R>(
        &self,
        profile: &TraitProfile,
        session: &SelectionSession,
        total_count: usize,
        rng: &mut R,
    ) -> Result<Selection, SelectionError>
    where
        R: Rng + ?Sized,
    {
        profile.require_complete()?;

        let indicators = IndicatorEstimator::estimate(profile, session.responses());
        let budget = DiversityAllocator::allocate(total_count, &indicators);
        tracing::debug!(?indicators, ?budget, "category budget allocated");

        let catalog = self.catalog.as_ref();
        let mut set = CandidateSet::new(session, profile, self.policy.candidate_pool_multiplier);

        let facets = Self::fill_facets(&mut set, catalog, profile, budget.facets).await?;

        let communication = if profile.score(BigFiveTrait::Extraversion).is_some() {
            set.fill(
                catalog,
                SelectionPass::Communication,
                ItemFilter::tag(COMMUNICATION_TAG),
                ItemSort::DiagnosticWeight,
                budget.communication,
            )
            .await?
        } else {
            0
        };

        let processing = if needs_processing_items(profile) {
            set.fill(
                catalog,
                SelectionPass::Processing,
                ItemFilter::tag(PROCESSING_TAG),
                ItemSort::DiagnosticWeight,
                budget.processing,
            )
            .await?
        } else {
            0
        };

        // Personality absorbs what the narrower passes could not place.
        let unplaced = (budget.facets - facets)
            + (budget.communication - communication)
            + (budget.processing - processing);
        set.fill(
            catalog,
            SelectionPass::GeneralPersonality,
            general_personality_filter(profile),
            ItemSort::DiagnosticWeightThenDiscrimination,
            budget.personality + unplaced,
        )
        .await?;

        if budget.neurodiversity > 0 {
            set.fill(
                catalog,
                SelectionPass::Neurodiversity,
                ItemFilter::ByCategory(ItemCategory::Neurodiversity),
                ItemSort::DiagnosticWeight,
                budget.neurodiversity,
            )
            .await?;
        }

        if budget.sensory > 0 {
            set.fill(
                catalog,
                SelectionPass::Sensory,
                ItemFilter::tag(SENSORY_TAG),
                ItemSort::DiagnosticWeight,
                budget.sensory,
            )
            .await?;
        }

        set.fill(
            catalog,
            SelectionPass::Other,
            ItemFilter::Or(
                SUPPLEMENTARY_INSTRUMENTS
                    .iter()
                    .map(|name| ItemFilter::instrument(*name))
                    .collect(),
            ),
            ItemSort::DiagnosticWeight,
            budget.other,
        )
        .await?;

        if set.len() < total_count {
            let open = total_count - set.len();
            set.fill(
                catalog,
                SelectionPass::Fallback,
                ItemFilter::And(vec![
                    ItemFilter::not(ItemFilter::Baseline),
                    ItemFilter::MinDiagnosticWeight(self.policy.fallback_min_weight),
                ]),
                ItemSort::DiagnosticWeight,
                open,
            )
            .await?;
        }

        let (mut items, passes) = set.finish();
        items.shuffle(rng);
        items.truncate(total_count);

        let report = SelectionReport {
            requested: total_count,
            returned: items.len(),
            indicators: Some(indicators),
            budget: Some(budget),
            passes,
        };
        if report.is_short() {
            tracing::warn!(
                requested = report.requested,
                returned = report.returned,
                "item bank is nearing content exhaustion"
            );
        } else {
            tracing::info!(selected = report.returned, gated = report.total_gated(), "adaptive batch selected");
        }

        Ok(Selection { items, report })
    }

    /// Facet pass: most extreme trait first, each trait taking an equal
    /// share (rounded up) of the facet budget still open.
    async fn fill_facets(
        set: &mut CandidateSet<'_>,
        catalog: &dyn ItemCatalog,
        profile: &TraitProfile,
        slots: usize,
    ) -> Result<usize, SelectionError> {
        let extreme = profile.extreme_traits();
        let mut filled = 0;
        for (index, t) in extreme.iter().enumerate() {
            let open = slots - filled;
            if open == 0 {
                break;
            }
            let traits_left = extreme.len() - index;
            let share = (open + traits_left - 1) / traits_left;
            filled += set
                .fill(
                    catalog,
                    SelectionPass::Facet,
                    ItemFilter::And(vec![ItemFilter::ByTrait(*t), ItemFilter::HasFacet]),
                    ItemSort::DiagnosticWeight,
                    share,
                )
                .await?;
        }
        Ok(filled)
    }
}

fn needs_processing_items(profile: &TraitProfile) -> bool {
    let openness = profile.score(BigFiveTrait::Openness);
    let conscientiousness = profile.score(BigFiveTrait::Conscientiousness);
    openness.is_some_and(|o| o > PROCESSING_OPENNESS_TRIGGER)
        || conscientiousness.is_some_and(|c| c < PROCESSING_CONSCIENTIOUSNESS_TRIGGER)
}

/// Disjunction of everything the profile still wants to learn about:
/// personality items for extreme, uncertain, strongest and weakest traits,
/// plus items of any category correlated with a scored trait.
fn general_personality_filter(profile: &TraitProfile) -> ItemFilter {
    let mut targets: BTreeSet<BigFiveTrait> = BTreeSet::new();
    targets.extend(profile.extreme_traits());
    targets.extend(profile.uncertain_traits());
    targets.extend(profile.strongest_trait());
    targets.extend(profile.weakest_trait());

    let by_trait: Vec<ItemFilter> = targets.into_iter().map(ItemFilter::ByTrait).collect();
    ItemFilter::Or(vec![
        ItemFilter::And(vec![
            ItemFilter::ByCategory(ItemCategory::Personality),
            ItemFilter::Or(by_trait),
        ]),
        ItemFilter::CorrelatedWith(profile.trait_names()),
    ])
}
