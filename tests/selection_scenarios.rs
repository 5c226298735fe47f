//! End-to-end selection scenarios over an in-memory item bank.
//!
//! Covers the baseline battery, indicator-driven adaptive batches,
//! sensitivity gating across a session, and batch-to-batch exclusion.

mod common;

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use futures::future::join_all;
use rand::rngs::StdRng;
use rand::SeedableRng;

use adaptive_assessment::application::{
    SelectAdaptiveHandler, SelectAdaptiveQuery, SelectBaselineHandler, SelectBaselineQuery,
};
use adaptive_assessment::domain::foundation::{ErrorCode, ItemId, SessionId};
use adaptive_assessment::domain::item::{AssessmentTier, Item, ItemCategory};
use adaptive_assessment::domain::profile::{
    AssessmentPhase, BigFiveTrait, ResponseRecord, SelectionSession, TraitProfile,
};
use adaptive_assessment::domain::selection::{
    AdaptiveSelector, BaselineSelector, Selection, SelectionPass, SelectionPolicy,
    INDICATOR_THRESHOLD,
};

use common::{catalog, high_sensitivity_id, profile};

fn adaptive() -> AdaptiveSelector {
    AdaptiveSelector::new(catalog(), SelectionPolicy::default())
}

fn ids(selection: &Selection) -> BTreeSet<ItemId> {
    selection.items.iter().map(|i| i.id.clone()).collect()
}

fn session_at(items_answered: u32, phase: AssessmentPhase) -> SelectionSession {
    SelectionSession::restore(
        SessionId::new(),
        BTreeSet::new(),
        items_answered,
        phase,
        Vec::new(),
    )
}

fn count_category(items: &[Item], category: ItemCategory) -> usize {
    items.iter().filter(|i| i.category == category).count()
}

// =============================================================================
// Baseline
// =============================================================================

#[tokio::test]
async fn comprehensive_baseline_has_two_items_per_trait() {
    let selector = BaselineSelector::new(catalog(), SelectionPolicy::default());
    let mut rng = StdRng::seed_from_u64(11);

    let selection = selector
        .select(AssessmentTier::Comprehensive, &mut rng)
        .await
        .unwrap();

    assert_eq!(selection.items.len(), 20);
    let mut per_trait: HashMap<BigFiveTrait, usize> = HashMap::new();
    for item in &selection.items {
        if let Some(t) = item.big_five_trait {
            *per_trait.entry(t).or_default() += 1;
        }
    }
    for t in BigFiveTrait::ALL {
        assert_eq!(per_trait.get(&t).copied(), Some(2), "trait {}", t);
    }
    assert_eq!(count_category(&selection.items, ItemCategory::Neurodiversity), 10);
    assert!(selection.items.iter().all(|i| i.is_baseline && i.active));
}

#[tokio::test]
async fn quick_baseline_follows_authored_priority() {
    let handler = SelectBaselineHandler::new(catalog(), SelectionPolicy::default());

    let selection = handler
        .handle(SelectBaselineQuery {
            tier: "quick".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(selection.items.len(), 10);
    let priorities: Vec<u32> = selection
        .items
        .iter()
        .map(|i| i.baseline_priority.unwrap())
        .collect();
    let mut sorted = priorities.clone();
    sorted.sort_unstable();
    assert_eq!(priorities, sorted);
    assert_eq!(priorities.first(), Some(&1));
}

#[tokio::test]
async fn unknown_tier_is_rejected_without_a_default() {
    let handler = SelectBaselineHandler::new(catalog(), SelectionPolicy::default());
    let err = handler
        .handle(SelectBaselineQuery {
            tier: "extended".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::UnknownTier);
}

// =============================================================================
// Adaptive
// =============================================================================

#[tokio::test]
async fn executive_profile_receives_neurodiversity_items() {
    let p = profile(80.0, 20.0, 50.0, 50.0, 75.0);
    let mut rng = StdRng::seed_from_u64(3);

    let selection = adaptive()
        .select(&p, &SelectionSession::new(), 20, &mut rng)
        .await
        .unwrap();

    let indicators = selection.report.indicators.unwrap();
    assert!(indicators.neurodiversity > INDICATOR_THRESHOLD);
    assert!(selection.report.budget.unwrap().neurodiversity > 0);
    assert!(count_category(&selection.items, ItemCategory::Neurodiversity) >= 1);
    assert_eq!(selection.items.len(), 20);
    assert_eq!(ids(&selection).len(), 20);
}

#[tokio::test]
async fn balanced_profile_gets_no_neurodiversity_pass() {
    let p = profile(50.0, 50.0, 50.0, 50.0, 50.0);
    let mut rng = StdRng::seed_from_u64(3);

    let selection = adaptive()
        .select(&p, &SelectionSession::new(), 20, &mut rng)
        .await
        .unwrap();

    assert_eq!(selection.report.budget.unwrap().neurodiversity, 0);
    assert!(selection.report.pass(SelectionPass::Neurodiversity).is_none());
    assert!(selection.report.pass(SelectionPass::Facet).is_none());
}

#[tokio::test]
async fn response_history_can_open_the_neurodiversity_budget() {
    let p = profile(50.0, 50.0, 50.0, 50.0, 50.0).with_pattern("hyperfocus");
    let mut session = SelectionSession::new();
    for (n, latency) in [150u64, 6_000, 300, 9_000, 200, 7_500].into_iter().enumerate() {
        let response =
            ResponseRecord::new(ItemId::new(format!("base-o-{}", n % 3)).unwrap(), 5, Some(latency))
                .unwrap();
        session.record_response(response);
    }
    let mut rng = StdRng::seed_from_u64(5);

    let selection = adaptive()
        .select(&p, &session, 20, &mut rng)
        .await
        .unwrap();

    assert!(selection.report.indicators.unwrap().neurodiversity > INDICATOR_THRESHOLD);
    assert!(count_category(&selection.items, ItemCategory::Neurodiversity) >= 1);
    assert_eq!(session.items_answered(), 6);
}

#[tokio::test]
async fn endorsed_sensory_answers_open_the_sensory_pass() {
    let p = profile(50.0, 50.0, 50.0, 50.0, 75.0);
    let mut session = SelectionSession::new();
    session.record_response(
        ResponseRecord::new(ItemId::new("base-n-0").unwrap(), 5, None)
            .unwrap()
            .flagged_sensory(),
    );
    let mut rng = StdRng::seed_from_u64(5);

    let selection = adaptive()
        .select(&p, &session, 20, &mut rng)
        .await
        .unwrap();

    assert!(selection.report.budget.unwrap().sensory > 0);
    assert!(selection.items.iter().any(|i| i.has_tag("sensory")));
}

#[tokio::test]
async fn extreme_traits_draw_facet_items() {
    let p = profile(85.0, 50.0, 50.0, 50.0, 50.0);
    let mut rng = StdRng::seed_from_u64(8);

    let selection = adaptive()
        .select(&p, &SelectionSession::new(), 20, &mut rng)
        .await
        .unwrap();

    let facet = selection.report.pass(SelectionPass::Facet).unwrap();
    assert_eq!(facet.accepted, facet.requested);
    assert!(selection.items.iter().any(|i| {
        i.big_five_trait == Some(BigFiveTrait::Openness) && i.facet.is_some()
    }));
}

#[tokio::test]
async fn missing_trait_fails_fast() {
    let partial = TraitProfile::from_scores([
        ("openness", 60.0),
        ("conscientiousness", 60.0),
        ("extraversion", 60.0),
        ("agreeableness", 60.0),
    ])
    .unwrap();
    let handler = SelectAdaptiveHandler::new(catalog(), SelectionPolicy::default());

    let err = handler
        .handle(SelectAdaptiveQuery {
            profile: partial,
            session: SelectionSession::new(),
            total_count: 10,
        })
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::IncompleteProfile);
    assert_eq!(err.details.get("missing"), Some(&"neuroticism".to_string()));
}

// =============================================================================
// Sensitivity gating
// =============================================================================

#[tokio::test]
async fn high_sensitivity_item_waits_for_thirty_answers() {
    let p = profile(90.0, 10.0, 95.0, 5.0, 95.0);

    for answered in [0, 10, 29] {
        let mut rng = StdRng::seed_from_u64(u64::from(answered));
        let selection = adaptive()
            .select(&p, &session_at(answered, AssessmentPhase::Clinical), 500, &mut rng)
            .await
            .unwrap();
        assert!(
            !ids(&selection).contains(&high_sensitivity_id()),
            "shown after {} answers",
            answered
        );
    }

    let mut rng = StdRng::seed_from_u64(30);
    let selection = adaptive()
        .select(&p, &session_at(30, AssessmentPhase::Adaptive), 500, &mut rng)
        .await
        .unwrap();
    assert!(ids(&selection).contains(&high_sensitivity_id()));
}

#[tokio::test]
async fn trigger_conditions_follow_the_profile() {
    let anxious = profile(50.0, 50.0, 50.0, 50.0, 80.0);
    let calm = profile(50.0, 50.0, 50.0, 50.0, 40.0);
    let anxiety_item = ItemId::new("clin-anxiety").unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let shown = adaptive()
        .select(&anxious, &session_at(25, AssessmentPhase::Adaptive), 500, &mut rng)
        .await
        .unwrap();
    assert!(ids(&shown).contains(&anxiety_item));

    let hidden = adaptive()
        .select(&calm, &session_at(25, AssessmentPhase::Adaptive), 500, &mut rng)
        .await
        .unwrap();
    assert!(!ids(&hidden).contains(&anxiety_item));
}

#[tokio::test]
async fn unresolvable_trigger_dimension_fails_closed() {
    let p = profile(90.0, 10.0, 95.0, 5.0, 95.0);
    let mut rng = StdRng::seed_from_u64(1);

    let selection = adaptive()
        .select(&p, &session_at(200, AssessmentPhase::Clinical), 500, &mut rng)
        .await
        .unwrap();

    assert!(!ids(&selection).contains(&ItemId::new("trauma-extreme").unwrap()));
    assert!(!ids(&selection).contains(&ItemId::new("retired").unwrap()));
}

// =============================================================================
// Exclusion and exhaustion
// =============================================================================

#[tokio::test]
async fn consecutive_batches_never_overlap() {
    let p = profile(72.0, 35.0, 20.0, 55.0, 68.0);
    let selector = adaptive();
    let mut session = SelectionSession::new();
    let mut seen: BTreeSet<ItemId> = BTreeSet::new();

    for round in 0..4u64 {
        let mut rng = StdRng::seed_from_u64(round);
        let batch = selector.select(&p, &session, 15, &mut rng).await.unwrap();
        let batch_ids = ids(&batch);

        assert!(batch_ids.is_disjoint(&seen), "round {} repeated an item", round);
        assert!(batch_ids.is_disjoint(session.exclude_ids()));
        seen.extend(batch_ids);
        session.record_presented(&batch.items);
    }
}

#[tokio::test]
async fn exhausted_bank_returns_a_short_batch() {
    let all_ids: BTreeSet<ItemId> = common::bank()
        .into_iter()
        .map(|i| i.id)
        .filter(|id| !id.as_str().starts_with("pers-a-"))
        .collect();
    let session = SelectionSession::restore(
        SessionId::new(),
        all_ids,
        40,
        AssessmentPhase::Adaptive,
        Vec::new(),
    );
    let p = profile(50.0, 50.0, 50.0, 50.0, 50.0);
    let mut rng = StdRng::seed_from_u64(2);

    let selection = adaptive().select(&p, &session, 20, &mut rng).await.unwrap();

    assert_eq!(selection.items.len(), 6);
    assert!(selection.report.is_short());
    assert_eq!(selection.report.shortfall(), 14);
}

// =============================================================================
// Determinism and concurrency
// =============================================================================

#[tokio::test]
async fn same_seed_reproduces_the_batch() {
    let p = profile(80.0, 20.0, 50.0, 50.0, 75.0);
    let session = SelectionSession::new();

    let first = adaptive()
        .select(&p, &session, 20, &mut StdRng::seed_from_u64(99))
        .await
        .unwrap();
    let second = adaptive()
        .select(&p, &session, 20, &mut StdRng::seed_from_u64(99))
        .await
        .unwrap();
    let reseeded = adaptive()
        .select(&p, &session, 20, &mut StdRng::seed_from_u64(100))
        .await
        .unwrap();

    assert_eq!(first.items, second.items);
    assert_eq!(ids(&first), ids(&reseeded));
    assert_eq!(first.report, reseeded.report);
}

#[tokio::test]
async fn sessions_share_one_catalog_concurrently() {
    let catalog = catalog();
    let handler = Arc::new(
        SelectAdaptiveHandler::new(catalog, SelectionPolicy::default()).with_shuffle_seed(Some(4)),
    );
    let profiles = [
        profile(80.0, 20.0, 50.0, 50.0, 75.0),
        profile(50.0, 50.0, 50.0, 50.0, 50.0),
        profile(25.0, 75.0, 90.0, 40.0, 20.0),
    ];

    let runs = profiles.iter().map(|p| {
        let handler = handler.clone();
        let query = SelectAdaptiveQuery {
            profile: p.clone(),
            session: SelectionSession::new(),
            total_count: 12,
        };
        async move { handler.handle(query).await }
    });
    let results = join_all(runs).await;

    for result in results {
        let selection = result.unwrap();
        assert_eq!(selection.items.len(), 12);
    }
}
