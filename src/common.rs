//! Common helpers shared across the learners.

/// Weighted sampling helpers and vector utilities.
pub mod utils;

/// Pre-condition checks on samples and distributions.
pub(crate) mod checker;

/// Grading helpers for fitted hypotheses.
pub mod evaluation;
