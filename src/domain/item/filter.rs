//! Closed filter and sort vocabulary for item catalog queries.
//!
//! Selection passes express their candidate sets as [`ItemFilter`] values.
//! Catalog adapters either translate them into their own query language or,
//! for in-memory catalogs, evaluate [`ItemFilter::matches`] directly.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;

use super::category::ItemCategory;
use super::item::Item;
use super::tier::ItemTier;
use crate::domain::foundation::ItemId;
use crate::domain::profile::BigFiveTrait;

/// Predicate over item attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ItemFilter {
    /// Item is not soft-deleted
    Active,
    /// Item belongs to the baseline set
    Baseline,
    ByTrait(BigFiveTrait),
    /// Item carries a facet tag
    HasFacet,
    ByCategory(ItemCategory),
    ByInstrument(String),
    /// Item carries at least one of the tags
    ByTags(Vec<String>),
    /// Item correlates with at least one of the trait names
    CorrelatedWith(BTreeSet<String>),
    ByTiers(Vec<ItemTier>),
    MinDiagnosticWeight(f64),
    ByIds(BTreeSet<ItemId>),
    Not(Box<ItemFilter>),
    And(Vec<ItemFilter>),
    Or(Vec<ItemFilter>),
}

impl ItemFilter {
    pub fn tag(tag: impl Into<String>) -> Self {
        Self::ByTags(vec![tag.into()])
    }

    pub fn instrument(instrument: impl Into<String>) -> Self {
        Self::ByInstrument(instrument.into())
    }

    pub fn not(filter: ItemFilter) -> Self {
        Self::Not(Box::new(filter))
    }

    /// Excludes the given ids; an empty set excludes nothing
    pub fn excluding<'a>(ids: impl IntoIterator<Item = &'a ItemId>) -> Self {
        Self::not(Self::ByIds(ids.into_iter().cloned().collect()))
    }

    /// Evaluates the predicate against an item.
    ///
    /// An empty `And` matches everything, an empty `Or` matches nothing.
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::Active => item.active,
            Self::Baseline => item.is_baseline,
            Self::ByTrait(t) => item.big_five_trait == Some(*t),
            Self::HasFacet => item.facet.is_some(),
            Self::ByCategory(c) => item.category == *c,
            Self::ByInstrument(name) => item.is_instrument(name),
            Self::ByTags(tags) => tags.iter().any(|t| item.has_tag(t)),
            Self::CorrelatedWith(names) => names.iter().any(|n| item.correlates_with(n)),
            Self::ByTiers(tiers) => tiers.contains(&item.tier),
            Self::MinDiagnosticWeight(min) => item.diagnostic_weight >= *min,
            Self::ByIds(ids) => ids.contains(&item.id),
            Self::Not(inner) => !inner.matches(item),
            Self::And(filters) => filters.iter().all(|f| f.matches(item)),
            Self::Or(filters) => filters.iter().any(|f| f.matches(item)),
        }
    }
}

/// Result ordering for catalog queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemSort {
    /// Ascending authored baseline priority; items without one sort last
    BaselinePriority,
    /// Descending diagnostic weight
    DiagnosticWeight,
    /// Descending diagnostic weight, then descending discrimination index
    DiagnosticWeightThenDiscrimination,
}

impl ItemSort {
    /// Total order used by catalogs; ties fall back to item id.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let primary = match self {
            Self::BaselinePriority => match (a.baseline_priority, b.baseline_priority) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            Self::DiagnosticWeight => b.diagnostic_weight.total_cmp(&a.diagnostic_weight),
            Self::DiagnosticWeightThenDiscrimination => b
                .diagnostic_weight
                .total_cmp(&a.diagnostic_weight)
                .then_with(|| b.discrimination_index.total_cmp(&a.discrimination_index)),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> Item {
        Item::new(ItemId::new(id).unwrap(), "text", ItemCategory::Personality).unwrap()
    }

    #[test]
    fn leaf_filters() {
        let i = item("o-1")
            .with_trait(BigFiveTrait::Openness)
            .with_facet("imagination")
            .with_tag("processing")
            .with_weights(3.0, 0.4);

        assert!(ItemFilter::Active.matches(&i));
        assert!(!ItemFilter::Baseline.matches(&i));
        assert!(ItemFilter::ByTrait(BigFiveTrait::Openness).matches(&i));
        assert!(!ItemFilter::ByTrait(BigFiveTrait::Neuroticism).matches(&i));
        assert!(ItemFilter::HasFacet.matches(&i));
        assert!(ItemFilter::tag("processing").matches(&i));
        assert!(ItemFilter::MinDiagnosticWeight(3.0).matches(&i));
        assert!(!ItemFilter::MinDiagnosticWeight(3.5).matches(&i));
        assert!(ItemFilter::ByTiers(vec![ItemTier::Core]).matches(&i));
    }

    #[test]
    fn combinators() {
        let i = item("o-1").with_trait(BigFiveTrait::Openness);
        let openness = ItemFilter::ByTrait(BigFiveTrait::Openness);
        let neuroticism = ItemFilter::ByTrait(BigFiveTrait::Neuroticism);

        assert!(ItemFilter::Or(vec![neuroticism.clone(), openness.clone()]).matches(&i));
        assert!(!ItemFilter::And(vec![neuroticism.clone(), openness]).matches(&i));
        assert!(ItemFilter::not(neuroticism).matches(&i));
        assert!(ItemFilter::And(vec![]).matches(&i));
        assert!(!ItemFilter::Or(vec![]).matches(&i));
    }

    #[test]
    fn excluding_ids() {
        let a = item("a");
        let b = item("b");
        let excluded = [ItemId::new("a").unwrap()];
        let filter = ItemFilter::excluding(excluded.iter());
        assert!(!filter.matches(&a));
        assert!(filter.matches(&b));

        let nothing = ItemFilter::excluding(std::iter::empty());
        assert!(nothing.matches(&a));
    }

    #[test]
    fn correlated_with_any_name() {
        let i = item("x").with_correlated_trait("openness");
        let names: BTreeSet<String> = ["neuroticism".to_string(), "openness".to_string()].into();
        assert!(ItemFilter::CorrelatedWith(names).matches(&i));
        assert!(!ItemFilter::CorrelatedWith(BTreeSet::new()).matches(&i));
    }

    #[test]
    fn baseline_priority_sort_puts_unprioritized_last() {
        let mut items = vec![item("c"), item("b").as_baseline(2), item("a").as_baseline(1)];
        items.sort_by(|x, y| ItemSort::BaselinePriority.compare(x, y));
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn weight_sort_breaks_ties_with_discrimination_then_id() {
        let mut items = vec![
            item("d").with_weights(3.0, 0.5),
            item("c").with_weights(3.0, 0.9),
            item("b").with_weights(4.0, 0.1),
            item("a").with_weights(3.0, 0.5),
        ];
        items.sort_by(|x, y| ItemSort::DiagnosticWeightThenDiscrimination.compare(x, y));
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn filter_serializes_as_tagged_union() {
        let filter = ItemFilter::And(vec![
            ItemFilter::Active,
            ItemFilter::ByCategory(ItemCategory::Neurodiversity),
        ]);
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["kind"], "and");
        assert_eq!(json["value"][0]["kind"], "active");
        assert_eq!(json["value"][1]["value"], "neurodiversity");
    }
}
