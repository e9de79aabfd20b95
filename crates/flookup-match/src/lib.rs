#![deny(unsafe_code)]

//! Approximate name lookup against a table's key column.
//!
//! The engine normalizes noisy human-entered names, scores every candidate
//! row with four independent similarity measures, combines them into one
//! confidence value, and selects the best row above an acceptance
//! threshold. [`formula::fuzzy_lookup`] is the soft-fail entry point for a
//! hosting formula environment; [`engine::lookup`] is the typed equivalent
//! for Rust callers.

pub mod engine;
pub mod formula;
pub mod normalize;
pub mod score;

pub use engine::{ACCEPTANCE_THRESHOLD, lookup};
pub use formula::fuzzy_lookup;
pub use normalize::normalize;
pub use score::ScoreComponents;
