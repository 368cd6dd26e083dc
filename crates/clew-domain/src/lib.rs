//! Pure policy evaluation (no IO).
//!
//! Input: a validated [`policy::Policy`] and a list of candidate paths.
//! Output: one [`clew_types::PathEvaluation`] per path, in input order.

#![forbid(unsafe_code)]

pub mod glob;
pub mod policy;

mod engine;

#[cfg(test)]
mod proptest;

pub use engine::{CompiledPolicy, PatternError, evaluate_paths};
pub use policy::{PatternList, Policy};
