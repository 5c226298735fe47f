//! Sensitivity Gate - decides whether sensitive content may be shown yet.
//!
//! Gating fails closed: malformed or unresolvable conditions exclude the item.

use crate::domain::item::{Item, RequiredSignals, TriggerCondition};
use crate::domain::profile::{SelectionSession, SeverityLevel, TraitProfile};

/// Pure eligibility check for item sensitivity.
pub struct SensitivityGate;

impl SensitivityGate {
    /// Whether `item` may be presented in `session` given `profile`.
    ///
    /// Items without sensitivity are always eligible. Sensitive items must
    /// pass the question-count gate, the phase gate and their trigger
    /// conditions. A sensitive item with `required_signals: None` has no
    /// gates to pass and is eligible even before anything has been answered.
    pub fn is_eligible(item: &Item, session: &SelectionSession, profile: &TraitProfile) -> bool {
        if !item.sensitivity.is_gated() {
            return true;
        }
        match &item.required_signals {
            None => true,
            Some(signals) => Self::signals_satisfied(signals, session, profile),
        }
    }

    fn signals_satisfied(
        signals: &RequiredSignals,
        session: &SelectionSession,
        profile: &TraitProfile,
    ) -> bool {
        if let Some(min) = signals.min_question_count {
            if session.items_answered() < min {
                return false;
            }
        }
        if let Some(phase) = signals.required_phase {
            if session.phase() != phase {
                return false;
            }
        }
        if signals.conditions.is_empty() {
            return true;
        }
        if signals.any_of {
            signals
                .conditions
                .iter()
                .any(|c| Self::condition_satisfied(c, profile))
        } else {
            signals
                .conditions
                .iter()
                .all(|c| Self::condition_satisfied(c, profile))
        }
    }

    /// Evaluates one trigger condition against the profile.
    ///
    /// Numeric dimensions must set at least one bound and satisfy all of
    /// them. Pattern dimensions pass when the pattern is present and no
    /// numeric bound is set. Unknown dimensions never pass.
    pub fn condition_satisfied(condition: &TriggerCondition, profile: &TraitProfile) -> bool {
        match profile.dimension_score(&condition.dimension) {
            Some(score) => {
                if !condition.has_bounds() {
                    return false;
                }
                let min_ok = condition.min_score.map_or(true, |min| score >= min);
                let max_ok = condition.max_score.map_or(true, |max| score <= max);
                let level_ok = condition
                    .min_level
                    .map_or(true, |level| SeverityLevel::from_score(score) >= level);
                min_ok && max_ok && level_ok
            }
            None => !condition.has_bounds() && profile.has_pattern(&condition.dimension),
        }
    }
}
