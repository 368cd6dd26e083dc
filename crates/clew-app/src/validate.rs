//! The `validate` use case: load the policy and summarize it.

use camino::{Utf8Path, Utf8PathBuf};
use clew_settings::{PolicyError, load_policy, policy_path};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PolicySummary {
    pub path: Utf8PathBuf,
    pub deny_patterns: usize,
    pub approval_patterns: usize,
}

pub fn validate_policy(repo_root: &Utf8Path) -> Result<PolicySummary, PolicyError> {
    let policy = load_policy(repo_root)?;
    Ok(PolicySummary {
        path: policy_path(repo_root),
        deny_patterns: policy.deny_paths.len(),
        approval_patterns: policy.approval_required_paths.len(),
    })
}
