//! Stable strings shared by the engine, the renderers, and tests.

/// File name of the policy document, relative to the repository root.
pub const POLICY_FILE_NAME: &str = ".agentpolicy.yaml";

// Reasons
pub const REASON_DENY_PREFIX: &str = "Matches deny pattern: ";
pub const REASON_APPROVAL_PREFIX: &str = "Matches approval-required pattern: ";
pub const REASON_NO_RESTRICTIONS: &str = "No restrictions apply";

// Validation messages
pub const MSG_EMPTY_PATH: &str = "Path cannot be empty";
