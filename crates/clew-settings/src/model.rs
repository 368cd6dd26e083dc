use clew_domain::Policy;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `.agentpolicy.yaml` schema v1.
///
/// Both keys are optional and default to empty lists. Unknown keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AgentPolicyV1 {
    /// Glob patterns for paths that are completely blocked from modification.
    /// Entries must be non-empty.
    #[serde(default)]
    pub deny_paths: Vec<String>,

    /// Glob patterns for paths that require human approval before modification.
    /// Entries must be non-empty.
    #[serde(default)]
    pub approval_required_paths: Vec<String>,
}

impl From<AgentPolicyV1> for Policy {
    fn from(value: AgentPolicyV1) -> Self {
        Policy::new(value.deny_paths, value.approval_required_paths)
    }
}
