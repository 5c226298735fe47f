//! Diversity Allocator - turns indicators into per-category item budgets.

use serde::{Deserialize, Serialize};

use super::indicators::Indicators;

/// Base share of personality items.
pub const PERSONALITY_SHARE: f64 = 0.40;
/// Floor for the personality share after neurodiversity adjustment.
pub const PERSONALITY_FLOOR: f64 = 0.30;
/// Base share of facet items.
pub const FACET_SHARE: f64 = 0.25;
/// Floor for the facet share after sensory adjustment.
pub const FACET_FLOOR: f64 = 0.15;
/// Minimum communication share.
pub const COMMUNICATION_BASE_SHARE: f64 = 0.10;
/// Maximum communication share.
pub const COMMUNICATION_MAX_SHARE: f64 = 0.20;
pub const PROCESSING_SHARE: f64 = 0.05;
pub const OTHER_SHARE: f64 = 0.05;
/// Maximum neurodiversity share.
pub const NEURODIVERSITY_MAX_SHARE: f64 = 0.25;
/// Maximum sensory share.
pub const SENSORY_MAX_SHARE: f64 = 0.15;
/// Indicator level above which a specialised category opens.
pub const INDICATOR_THRESHOLD: f64 = 0.3;

/// Integer item budget per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryBudget {
    pub personality: usize,
    pub facets: usize,
    pub communication: usize,
    pub processing: usize,
    pub neurodiversity: usize,
    pub sensory: usize,
    pub other: usize,
}

impl CategoryBudget {
    pub fn total(&self) -> usize {
        self.personality
            + self.facets
            + self.communication
            + self.processing
            + self.neurodiversity
            + self.sensory
            + self.other
    }

    fn scaled(&self, factor: f64) -> Self {
        let scale = |n: usize| (n as f64 * factor).floor() as usize;
        Self {
            personality: scale(self.personality),
            facets: scale(self.facets),
            communication: scale(self.communication),
            processing: scale(self.processing),
            neurodiversity: scale(self.neurodiversity),
            sensory: scale(self.sensory),
            other: scale(self.other),
        }
    }
}

/// Category shares as fractions of the total item count.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Shares {
    personality: f64,
    facets: f64,
    communication: f64,
    processing: f64,
    neurodiversity: f64,
    sensory: f64,
    other: f64,
}

/// Pure allocator of category budgets.
pub struct DiversityAllocator;

impl DiversityAllocator {
    /// Allocates `total` items across the seven categories.
    ///
    /// The returned budgets always sum to at most `total`.
    pub fn allocate(total: usize, indicators: &Indicators) -> CategoryBudget {
        let shares = Self::shares(indicators);
        let n = total as f64;
        let round = |share: f64| (share * n).round() as usize;

        let budget = CategoryBudget {
            personality: round(shares.personality),
            facets: round(shares.facets),
            communication: round(shares.communication),
            processing: round(shares.processing),
            neurodiversity: round(shares.neurodiversity),
            sensory: round(shares.sensory),
            other: round(shares.other),
        };

        let sum = budget.total();
        if sum > total {
            budget.scaled(n / sum as f64)
        } else {
            budget
        }
    }

    fn shares(indicators: &Indicators) -> Shares {
        let mut shares = Shares {
            personality: PERSONALITY_SHARE,
            facets: FACET_SHARE,
            communication: (COMMUNICATION_BASE_SHARE
                + indicators.communication * COMMUNICATION_BASE_SHARE)
                .min(COMMUNICATION_MAX_SHARE),
            processing: PROCESSING_SHARE,
            neurodiversity: 0.0,
            sensory: 0.0,
            other: OTHER_SHARE,
        };

        if indicators.neurodiversity > INDICATOR_THRESHOLD {
            shares.neurodiversity = (indicators.neurodiversity * 0.30).min(NEURODIVERSITY_MAX_SHARE);
            shares.personality =
                (shares.personality - shares.neurodiversity / 2.0).max(PERSONALITY_FLOOR);
        }

        if indicators.sensory > INDICATOR_THRESHOLD {
            shares.sensory = (indicators.sensory * 0.20).min(SENSORY_MAX_SHARE);
            shares.facets = (shares.facets - shares.sensory / 2.0).max(FACET_FLOOR);
        }

        shares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_indicators_use_base_proportions() {
        let budget = DiversityAllocator::allocate(20, &Indicators::default());
        assert_eq!(
            budget,
            CategoryBudget {
                personality: 8,
                facets: 5,
                communication: 2,
                processing: 1,
                neurodiversity: 0,
                sensory: 0,
                other: 1,
            }
        );
    }

    #[test]
    fn indicators_at_threshold_do_not_open_categories() {
        let budget = DiversityAllocator::allocate(40, &Indicators::new(0.3, 0.3, 0.0));
        assert_eq!(budget.neurodiversity, 0);
        assert_eq!(budget.sensory, 0);
    }

    #[test]
    fn neurodiversity_takes_share_from_personality() {
        let budget = DiversityAllocator::allocate(20, &Indicators::new(0.35, 0.0, 0.0));
        // 0.35 * 0.30 = 0.105 -> 2.1 items
        assert_eq!(budget.neurodiversity, 2);
        // 0.40 - 0.0525 = 0.3475 -> 6.95 items
        assert_eq!(budget.personality, 7);
    }

    #[test]
    fn personality_never_drops_below_floor() {
        let budget = DiversityAllocator::allocate(100, &Indicators::new(1.0, 0.0, 0.0));
        assert_eq!(budget.neurodiversity, 25);
        assert_eq!(budget.personality, 30);
    }

    #[test]
    fn sensory_takes_share_from_facets() {
        let budget = DiversityAllocator::allocate(100, &Indicators::new(0.0, 0.5, 0.0));
        assert_eq!(budget.sensory, 10);
        assert_eq!(budget.facets, 20);

        let maxed = DiversityAllocator::allocate(100, &Indicators::new(0.0, 1.0, 0.0));
        assert_eq!(maxed.sensory, 15);
        // 0.25 - 0.075 = 0.175 sits on a rounding boundary
        assert!((17..=18).contains(&maxed.facets));
    }

    #[test]
    fn communication_scales_with_indicator() {
        assert_eq!(
            DiversityAllocator::allocate(100, &Indicators::new(0.0, 0.0, 0.5)).communication,
            15
        );
        assert_eq!(
            DiversityAllocator::allocate(100, &Indicators::new(0.0, 0.0, 1.0)).communication,
            20
        );
    }

    #[test]
    fn oversubscribed_budget_is_scaled_down() {
        let indicators = Indicators::new(1.0, 1.0, 1.0);
        let budget = DiversityAllocator::allocate(100, &indicators);
        assert!(budget.total() <= 100);
        assert!(budget.neurodiversity > 0);
        assert!(budget.sensory > 0);
    }

    #[test]
    fn zero_total_allocates_nothing() {
        let budget = DiversityAllocator::allocate(0, &Indicators::new(1.0, 1.0, 1.0));
        assert_eq!(budget, CategoryBudget::default());
    }

    #[test]
    fn small_totals_never_overflow() {
        let indicators = Indicators::new(0.9, 0.9, 0.9);
        for total in 0..50 {
            assert!(DiversityAllocator::allocate(total, &indicators).total() <= total);
        }
    }
}
