//! Shared item bank for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use adaptive_assessment::adapters::catalog::InMemoryItemCatalog;
use adaptive_assessment::domain::foundation::ItemId;
use adaptive_assessment::domain::item::{
    Item, ItemCategory, ItemTier, RequiredSignals, SensitivityLevel, TriggerCondition,
};
use adaptive_assessment::domain::profile::{BigFiveTrait, TraitProfile};

pub const FACETS: [(BigFiveTrait, [&str; 3]); 5] = [
    (BigFiveTrait::Openness, ["imagination", "aesthetics", "ideas"]),
    (BigFiveTrait::Conscientiousness, ["order", "dutifulness", "self_discipline"]),
    (BigFiveTrait::Extraversion, ["warmth", "assertiveness", "activity"]),
    (BigFiveTrait::Agreeableness, ["trust", "altruism", "modesty"]),
    (BigFiveTrait::Neuroticism, ["anxiety", "anger", "vulnerability"]),
];

pub fn item(id: impl Into<String>, category: ItemCategory) -> Item {
    Item::new(ItemId::new(id).unwrap(), "Assessment statement.", category).unwrap()
}

pub fn high_sensitivity_id() -> ItemId {
    ItemId::new("clin-high-30").unwrap()
}

/// A bank with enough content for every pass.
pub fn bank() -> Vec<Item> {
    let mut items = Vec::new();
    let mut priority = 0;

    for (t, facets) in FACETS {
        let key = &t.as_str()[..1];
        for n in 0..3 {
            priority += 1;
            items.push(
                item(format!("base-{}-{}", key, n), ItemCategory::Personality)
                    .with_trait(t)
                    .as_baseline(priority)
                    .with_weights(3.0, 0.6),
            );
        }
        for (n, facet) in facets.iter().enumerate() {
            for m in 0..2 {
                items.push(
                    item(format!("facet-{}-{}-{}", key, n, m), ItemCategory::Personality)
                        .with_trait(t)
                        .with_facet(*facet)
                        .with_weights(4.5 - n as f64 * 0.5, 0.5),
                );
            }
        }
        for n in 0..6 {
            items.push(
                item(format!("pers-{}-{}", key, n), ItemCategory::Personality)
                    .with_trait(t)
                    .with_correlated_trait(t.as_str())
                    .with_weights(2.0 + n as f64 * 0.4, 0.3 + n as f64 * 0.1),
            );
        }
    }

    for n in 0..12 {
        priority += 1;
        items.push(
            item(format!("base-nd-{}", n), ItemCategory::Neurodiversity)
                .as_baseline(priority)
                .with_weights(3.0, 0.5),
        );
    }
    for n in 0..10 {
        items.push(
            item(format!("nd-{}", n), ItemCategory::Neurodiversity)
                .with_tier(ItemTier::Standard)
                .with_weights(3.5, 0.6),
        );
    }
    for n in 0..6 {
        items.push(
            item(format!("comm-{}", n), ItemCategory::Personality)
                .with_trait(BigFiveTrait::Extraversion)
                .with_tag("communication")
                .with_weights(3.2, 0.5),
        );
        items.push(
            item(format!("proc-{}", n), ItemCategory::Cognitive)
                .with_tag("processing")
                .with_weights(3.1, 0.5),
        );
        items.push(
            item(format!("sens-{}", n), ItemCategory::Neurodiversity)
                .with_tag("sensory")
                .with_weights(3.4, 0.5),
        );
    }
    for (instrument, category) in [
        ("stress", ItemCategory::Stress),
        ("decision_making", ItemCategory::DecisionMaking),
        ("attachment", ItemCategory::Attachment),
    ] {
        for n in 0..4 {
            items.push(
                item(format!("{}-{}", instrument, n), category)
                    .with_instrument(instrument)
                    .with_weights(2.5, 0.4),
            );
        }
    }

    items.push(
        item("clin-high-30", ItemCategory::Clinical)
            .with_weights(5.0, 0.9)
            .with_sensitivity(
                SensitivityLevel::High,
                RequiredSignals::new().with_min_question_count(30),
            ),
    );
    items.push(
        item("clin-anxiety", ItemCategory::Clinical)
            .with_weights(4.8, 0.8)
            .with_sensitivity(
                SensitivityLevel::Moderate,
                RequiredSignals::new()
                    .with_min_question_count(20)
                    .with_condition(TriggerCondition::new("neuroticism").with_min_score(70.0)),
            ),
    );
    items.push(
        item("trauma-extreme", ItemCategory::TraumaScreening)
            .with_weights(5.0, 0.9)
            .with_sensitivity(
                SensitivityLevel::Extreme,
                RequiredSignals::new()
                    .with_min_question_count(50)
                    .with_condition(TriggerCondition::new("no_such_dimension").with_min_score(1.0)),
            ),
    );
    items.push(item("retired", ItemCategory::Personality).with_weights(5.0, 1.0).deactivated());

    items
}

pub fn catalog() -> Arc<InMemoryItemCatalog> {
    Arc::new(InMemoryItemCatalog::with_items(bank()).unwrap())
}

pub fn profile(o: f64, c: f64, e: f64, a: f64, n: f64) -> TraitProfile {
    TraitProfile::from_scores([
        ("openness", o),
        ("conscientiousness", c),
        ("extraversion", e),
        ("agreeableness", a),
        ("neuroticism", n),
    ])
    .unwrap()
}
