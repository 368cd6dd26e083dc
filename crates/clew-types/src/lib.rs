//! Stable DTOs and IDs used across the clew workspace.
//!
//! This crate is intentionally boring:
//! - the per-path decision and its evaluation record
//! - the aggregated check result emitted by `clew check`
//! - stable reason strings and schema ids

#![forbid(unsafe_code)]

pub mod evaluation;
pub mod ids;
pub mod result;

pub use evaluation::{Decision, PathEvaluation};
pub use result::{CheckResult, SCHEMA_CHECK_V1};
