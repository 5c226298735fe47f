//! Item module - the questionnaire item bank vocabulary.
//!
//! # Domain Invariants
//!
//! 1. Every item has exactly one category
//! 2. A baseline item always has a baseline priority
//! 3. Diagnostic weight is 0-5, discrimination index is 0-1
//! 4. Inactive items are never selectable
//! 5. The engine never mutates items

mod category;
mod filter;
#[allow(clippy::module_inception)]
mod item;
mod sensitivity;
mod tier;

pub use category::ItemCategory;
pub use filter::{ItemFilter, ItemSort};
pub use item::{Item, MAX_DIAGNOSTIC_WEIGHT};
pub use sensitivity::{RequiredSignals, SensitivityLevel, TriggerCondition};
pub use tier::{AssessmentTier, ItemTier};
