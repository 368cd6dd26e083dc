//! Glob semantics for policy patterns.
//!
//! - `*` and `?` never cross `/`; `**` spans any number of segments.
//! - `[...]` classes and `{a,b}` alternation are supported. A single alternative
//!   `{key}` is still alternation and matches `key`; `{1..3}` is not a numeric range,
//!   it is one literal alternative `1..3`.
//! - Matching is case-sensitive and a leading `.` is not special.
//! - Candidates are matched verbatim: no `./` stripping, no case folding.

use globset::{GlobBuilder, GlobMatcher};

/// Compile a single policy pattern.
pub fn compile_pattern(pattern: &str) -> Result<globset::Glob, globset::Error> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .case_insensitive(false)
        .build()
}

/// Convenience for one-off matching; prefer [`crate::CompiledPolicy`] for batches.
pub fn matcher(pattern: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(compile_pattern(pattern)?.compile_matcher())
}
