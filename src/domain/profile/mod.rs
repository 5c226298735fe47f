//! Profile module - respondent-side inputs to item selection.
//!
//! - **TraitProfile** - Big-Five scores, extra dimensions and behavioral patterns
//! - **ResponseRecord** - raw answers with latency, used for indicator estimation
//! - **SelectionSession** - caller-owned running state (exclusions, count, phase)

mod response;
mod session;
mod trait_profile;
mod traits;

pub use response::{mentions_sensory_content, ResponseRecord, LIKERT_MAX, LIKERT_MIN};
pub use session::{AssessmentPhase, SelectionSession};
pub use trait_profile::{
    ProfileError, TraitProfile, EXTREME_HIGH_THRESHOLD, EXTREME_LOW_THRESHOLD, MIDPOINT,
    UNCERTAIN_BAND,
};
pub use traits::{BigFiveTrait, SeverityLevel};
