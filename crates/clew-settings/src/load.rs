use crate::error::PolicyError;
use crate::validate::parse_policy_yaml;
use camino::{Utf8Path, Utf8PathBuf};
use clew_domain::Policy;
use clew_types::ids::POLICY_FILE_NAME;
use std::io::ErrorKind;

/// Location of the policy file for a repository root.
pub fn policy_path(repo_root: &Utf8Path) -> Utf8PathBuf {
    repo_root.join(POLICY_FILE_NAME)
}

/// Load `<repo_root>/.agentpolicy.yaml`.
pub fn load_policy(repo_root: &Utf8Path) -> Result<Policy, PolicyError> {
    load_policy_file(&policy_path(repo_root))
}

/// Load and validate a policy document at an explicit path.
///
/// Never falls back to a default policy: a missing or malformed file is an error.
pub fn load_policy_file(path: &Utf8Path) -> Result<Policy, PolicyError> {
    tracing::debug!(path = %path, "loading policy");

    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => PolicyError::NotFound {
            path: path.to_path_buf(),
        },
        _ => PolicyError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let policy =
        parse_policy_yaml(&text).map_err(|err| PolicyError::from_parse(path.to_path_buf(), err))?;

    tracing::debug!(
        deny = policy.deny_paths.len(),
        approval_required = policy.approval_required_paths.len(),
        "policy loaded"
    );
    Ok(policy)
}
