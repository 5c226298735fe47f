//! Adaptive Assessment - Item selection for adaptive psychometric questionnaires
//!
//! This crate assembles a balanced baseline battery and then picks follow-up
//! items from a large item bank as the respondent's trait profile emerges,
//! keeping sensitive content behind minimum-evidence gates.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod telemetry;
