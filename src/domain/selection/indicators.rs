//! Indicator Estimator - behavioral indicators derived from a trait profile.
//!
//! Indicators steer category budgets only; they are never diagnoses.

use serde::{Deserialize, Serialize};

use crate::domain::profile::{BigFiveTrait, ResponseRecord, TraitProfile, MIDPOINT};

/// Contribution when neuroticism is high and conscientiousness low together.
pub const EXECUTIVE_CHALLENGE_WEIGHT: f64 = 0.2;
/// Contribution when openness is very high with extreme extraversion.
pub const DIVERGENT_OPENNESS_WEIGHT: f64 = 0.15;
/// Contribution when openness is high and conscientiousness very low.
pub const ATTENTION_REGULATION_WEIGHT: f64 = 0.15;
/// Contribution per recognised behavioral pattern.
pub const PATTERN_WEIGHT: f64 = 0.1;
/// Contribution when response latency varies widely.
pub const LATENCY_VARIANCE_WEIGHT: f64 = 0.15;
/// Contribution when most answers sit at the scale ends.
pub const EXTREME_RESPONSE_WEIGHT: f64 = 0.1;
/// Contribution to the sensory indicator from high neuroticism.
pub const SENSORY_NEUROTICISM_WEIGHT: f64 = 0.2;
/// Contribution per strongly endorsed sensory item.
pub const SENSORY_RESPONSE_WEIGHT: f64 = 0.15;

/// Latency coefficient of variation above which latency counts as erratic.
pub const LATENCY_CV_THRESHOLD: f64 = 0.5;
/// Share of extreme answers above which the response style counts as extreme.
pub const EXTREME_RESPONSE_SHARE: f64 = 0.6;

/// Behavioral patterns that raise the neurodiversity indicator.
pub const NEURODIVERSITY_PATTERNS: &[&str] = &[
    "high_masking",
    "hyperfocus",
    "executive_dysfunction",
    "sensory_seeking",
    "routine_dependence",
];

/// Scalar indicators, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    pub neurodiversity: f64,
    pub sensory: f64,
    pub communication: f64,
}

impl Indicators {
    /// Builds indicators, clamping each value to [0, 1].
    pub fn new(neurodiversity: f64, sensory: f64, communication: f64) -> Self {
        Self {
            neurodiversity: clamp_unit(neurodiversity),
            sensory: clamp_unit(sensory),
            communication: clamp_unit(communication),
        }
    }
}

/// Pure estimator: the same inputs always give the same indicators.
pub struct IndicatorEstimator;

impl IndicatorEstimator {
    /// Estimates all three indicators.
    pub fn estimate(profile: &TraitProfile, responses: &[ResponseRecord]) -> Indicators {
        Indicators::new(
            Self::neurodiversity(profile, responses),
            Self::sensory(profile, responses),
            Self::communication(profile),
        )
    }

    /// Neurodiversity likelihood.
    ///
    /// - N > 60 and C < 40: +0.2
    /// - O > 75 and |E - 50| > 30: +0.15
    /// - O > 70 and C < 30: +0.15
    /// - each recognised behavioral pattern: +0.1
    /// - latency coefficient of variation > 0.5: +0.15
    /// - more than 60% extreme answers: +0.1
    pub fn neurodiversity(profile: &TraitProfile, responses: &[ResponseRecord]) -> f64 {
        let o = profile.score(BigFiveTrait::Openness);
        let c = profile.score(BigFiveTrait::Conscientiousness);
        let e = profile.score(BigFiveTrait::Extraversion);
        let n = profile.score(BigFiveTrait::Neuroticism);

        let mut score = 0.0;

        if let (Some(n), Some(c)) = (n, c) {
            if n > 60.0 && c < 40.0 {
                score += EXECUTIVE_CHALLENGE_WEIGHT;
            }
        }
        if let (Some(o), Some(e)) = (o, e) {
            if o > 75.0 && (e - MIDPOINT).abs() > 30.0 {
                score += DIVERGENT_OPENNESS_WEIGHT;
            }
        }
        if let (Some(o), Some(c)) = (o, c) {
            if o > 70.0 && c < 30.0 {
                score += ATTENTION_REGULATION_WEIGHT;
            }
        }

        let patterns = NEURODIVERSITY_PATTERNS
            .iter()
            .filter(|p| profile.has_pattern(p))
            .count();
        score += PATTERN_WEIGHT * patterns as f64;

        if latency_variation(responses).is_some_and(|cv| cv > LATENCY_CV_THRESHOLD) {
            score += LATENCY_VARIANCE_WEIGHT;
        }
        if extreme_response_share(responses).is_some_and(|share| share > EXTREME_RESPONSE_SHARE) {
            score += EXTREME_RESPONSE_WEIGHT;
        }

        score.min(1.0)
    }

    /// Sensory-sensitivity likelihood.
    ///
    /// - N > 60: +0.2
    /// - each sensory-flagged answer of 4 or more: +0.15
    pub fn sensory(profile: &TraitProfile, responses: &[ResponseRecord]) -> f64 {
        let mut score = 0.0;
        if profile
            .score(BigFiveTrait::Neuroticism)
            .is_some_and(|n| n > 60.0)
        {
            score += SENSORY_NEUROTICISM_WEIGHT;
        }
        let endorsed = responses
            .iter()
            .filter(|r| r.sensory_flagged && r.value >= 4)
            .count();
        score += SENSORY_RESPONSE_WEIGHT * endorsed as f64;
        score.min(1.0)
    }

    /// Deviation of extraversion from the midpoint, normalised to [0, 1].
    pub fn communication(profile: &TraitProfile) -> f64 {
        profile
            .score(BigFiveTrait::Extraversion)
            .map(|e| ((e - MIDPOINT).abs() / MIDPOINT).min(1.0))
            .unwrap_or(0.0)
    }
}

/// Population coefficient of variation of recorded latencies.
///
/// `None` with fewer than two latencies or a zero mean.
pub fn latency_variation(responses: &[ResponseRecord]) -> Option<f64> {
    let latencies: Vec<f64> = responses
        .iter()
        .filter_map(|r| r.latency_ms)
        .map(|ms| ms as f64)
        .collect();
    if latencies.len() < 2 {
        return None;
    }
    let count = latencies.len() as f64;
    let mean = latencies.iter().sum::<f64>() / count;
    if mean <= 0.0 {
        return None;
    }
    let variance = latencies.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / count;
    Some(variance.sqrt() / mean)
}

/// Share of answers at either end of the scale; `None` without answers.
pub fn extreme_response_share(responses: &[ResponseRecord]) -> Option<f64> {
    if responses.is_empty() {
        return None;
    }
    let extreme = responses.iter().filter(|r| r.is_extreme()).count();
    Some(extreme as f64 / responses.len() as f64)
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
