//! Domain layer containing the item-selection logic and its vocabulary.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, errors)
//! - `item` - Item bank entities, tiers, sensitivity rules, filter predicates
//! - `profile` - Trait profile, responses and caller-owned session state
//! - `selection` - Indicators, budgets, gating and the two selectors

pub mod foundation;
pub mod item;
pub mod profile;
pub mod selection;
