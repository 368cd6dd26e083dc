//! The `check` use case: evaluate candidate paths against the repository policy.

use camino::Utf8Path;
use clew_domain::{Policy, evaluate_paths};
use clew_repo::{GitStagedFiles, PathSource, PathSourceError};
use clew_settings::{PolicyError, load_policy};
use clew_types::CheckResult;

/// Failure of a check run. Nothing is retried; no partial result is reported.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error("Failed to get staged files: {0}")]
    PathSource(#[from] PathSourceError),
}

/// Check the staged changes of the repository at `repo_root`.
pub fn check_staged_files(repo_root: &Utf8Path) -> Result<CheckResult, CheckError> {
    check_with_source(repo_root, &GitStagedFiles::new())
}

/// Load the policy, collect candidates from `source`, and evaluate them.
///
/// The policy is loaded first: without a policy there is no check, whatever the source says.
pub fn check_with_source(
    repo_root: &Utf8Path,
    source: &dyn PathSource,
) -> Result<CheckResult, CheckError> {
    let policy = load_policy(repo_root)?;
    let paths = source.candidate_paths(repo_root)?;
    let result = check_paths(paths, &policy);

    tracing::info!(
        paths = result.staged_files.len(),
        blocked = result.blocked.len(),
        success = result.success,
        "check finished"
    );
    Ok(result)
}

/// Evaluate an already-collected path list.
pub fn check_paths(paths: Vec<String>, policy: &Policy) -> CheckResult {
    let evaluations = evaluate_paths(&paths, policy);
    CheckResult::from_evaluations(paths, evaluations)
}

/// Map a check result to a process exit code: 0 = nothing blocked, 1 = blocked.
pub fn exit_code(result: &CheckResult) -> i32 {
    if result.success { 0 } else { 1 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clew_types::Decision;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn mixed_decisions() {
        let policy = Policy::new(strings(&[".env"]), strings(&["src/**"]));
        let result = check_paths(strings(&[".env", "src/index.ts", "README.md"]), &policy);

        assert_eq!(
            result
                .evaluations
                .iter()
                .map(|e| e.decision)
                .collect::<Vec<_>>(),
            vec![Decision::Deny, Decision::NeedsApproval, Decision::Allow]
        );
        assert!(!result.success);
        assert_eq!(result.blocked.len(), 2);
        assert_eq!(exit_code(&result), 1);
    }

    #[test]
    fn empty_candidates_succeed() {
        let result = check_paths(Vec::new(), &Policy::default());
        assert!(result.success);
        assert!(result.staged_files.is_empty());
        assert!(result.evaluations.is_empty());
        assert!(result.blocked.is_empty());
        assert_eq!(exit_code(&result), 0);
    }
}
