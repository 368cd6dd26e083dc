use crate::glob::compile_pattern;
use crate::policy::{PatternList, Policy};
use clew_types::PathEvaluation;
use globset::{GlobSet, GlobSetBuilder};

/// A policy pattern that failed to compile.
#[derive(Debug, thiserror::Error)]
#[error("{list}.{index}: invalid glob pattern `{pattern}`: {source}")]
pub struct PatternError {
    pub list: PatternList,
    pub index: usize,
    pub pattern: String,
    #[source]
    pub source: globset::Error,
}

/// Compiled pattern list. `patterns[i]` is the source of glob `i` in `set`.
#[derive(Clone, Debug)]
struct PatternSet {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternSet {
    fn build(
        list: PatternList,
        patterns: &[String],
        lenient: bool,
    ) -> Result<Self, PatternError> {
        let mut builder = GlobSetBuilder::new();
        let mut kept = Vec::with_capacity(patterns.len());

        for (index, pattern) in patterns.iter().enumerate() {
            match compile_pattern(pattern) {
                Ok(glob) => {
                    builder.add(glob);
                    kept.push(pattern.clone());
                }
                Err(_) if lenient => continue,
                Err(source) => {
                    return Err(PatternError {
                        list,
                        index,
                        pattern: pattern.clone(),
                        source,
                    });
                }
            }
        }

        let set = match builder.build() {
            Ok(set) => set,
            Err(_) if lenient => {
                kept.clear();
                GlobSet::empty()
            }
            Err(source) => {
                return Err(PatternError {
                    list,
                    index: 0,
                    pattern: patterns.join(", "),
                    source,
                });
            }
        };

        Ok(Self {
            patterns: kept,
            set,
        })
    }

    /// First matching pattern in policy order.
    fn first_match(&self, path: &str) -> Option<&str> {
        self.set
            .matches(path)
            .into_iter()
            .min()
            .map(|i| self.patterns[i].as_str())
    }
}

/// A policy with its patterns compiled once, ready to classify many paths.
///
/// Read-only after construction, so it can be shared across threads.
#[derive(Clone, Debug)]
pub struct CompiledPolicy {
    deny: PatternSet,
    approval: PatternSet,
}

impl CompiledPolicy {
    /// Compile every pattern; the first malformed one is an error.
    pub fn compile(policy: &Policy) -> Result<Self, PatternError> {
        Ok(Self {
            deny: PatternSet::build(PatternList::Deny, &policy.deny_paths, false)?,
            approval: PatternSet::build(
                PatternList::ApprovalRequired,
                &policy.approval_required_paths,
                false,
            )?,
        })
    }

    /// Compile, skipping malformed patterns instead of failing.
    pub fn compile_lenient(policy: &Policy) -> Self {
        let build = |list: PatternList| {
            PatternSet::build(list, policy.patterns(list), true).unwrap_or_else(|_| PatternSet {
                patterns: Vec::new(),
                set: GlobSet::empty(),
            })
        };
        Self {
            deny: build(PatternList::Deny),
            approval: build(PatternList::ApprovalRequired),
        }
    }

    /// Classify one path. Deny beats approval, approval beats the default allow.
    pub fn evaluate(&self, path: &str) -> PathEvaluation {
        if let Some(pattern) = self.deny.first_match(path) {
            return PathEvaluation::deny(path, pattern);
        }
        if let Some(pattern) = self.approval.first_match(path) {
            return PathEvaluation::needs_approval(path, pattern);
        }
        PathEvaluation::allow(path)
    }

    pub fn evaluate_paths<S: AsRef<str>>(&self, paths: &[S]) -> Vec<PathEvaluation> {
        paths.iter().map(|p| self.evaluate(p.as_ref())).collect()
    }
}

/// Evaluate `paths` against `policy`, one result per path in input order.
///
/// Never fails: a policy from the loader has no malformed patterns, and any that slip
/// through are skipped.
pub fn evaluate_paths<S: AsRef<str>>(paths: &[S], policy: &Policy) -> Vec<PathEvaluation> {
    CompiledPolicy::compile_lenient(policy).evaluate_paths(paths)
}
