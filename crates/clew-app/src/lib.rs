//! Use case orchestration for clew.
//!
//! This crate provides the application layer: it loads the policy, asks a path source for
//! candidates, runs the pure evaluator, and shapes the result. It is intentionally thin.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;
mod validate;

pub use check::{CheckError, check_paths, check_staged_files, check_with_source, exit_code};
pub use render::{OutputFormat, render_result, serialize_result};
pub use validate::{PolicySummary, validate_policy};
