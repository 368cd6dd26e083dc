use crate::ids;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single candidate path.
///
/// Variants are declared in ascending precedence so the derived `Ord` matches the engine:
/// `Deny > NeedsApproval > Allow`.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    Allow,
    NeedsApproval,
    Deny,
}

impl Decision {
    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Allow => "ALLOW",
            Decision::NeedsApproval => "NEEDS_APPROVAL",
            Decision::Deny => "DENY",
        }
    }

    /// Anything other than `Allow` blocks the check.
    pub fn is_blocking(self) -> bool {
        self != Decision::Allow
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One decision per input path. `path` is kept exactly as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PathEvaluation {
    pub path: String,
    pub decision: Decision,
    pub reason: String,
}

impl PathEvaluation {
    pub fn deny(path: impl Into<String>, pattern: &str) -> Self {
        Self {
            path: path.into(),
            decision: Decision::Deny,
            reason: format!("{}{}", ids::REASON_DENY_PREFIX, pattern),
        }
    }

    pub fn needs_approval(path: impl Into<String>, pattern: &str) -> Self {
        Self {
            path: path.into(),
            decision: Decision::NeedsApproval,
            reason: format!("{}{}", ids::REASON_APPROVAL_PREFIX, pattern),
        }
    }

    pub fn allow(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            decision: Decision::Allow,
            reason: ids::REASON_NO_RESTRICTIONS.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_order() {
        assert!(Decision::Deny > Decision::NeedsApproval);
        assert!(Decision::NeedsApproval > Decision::Allow);
        assert_eq!(
            [Decision::Allow, Decision::Deny, Decision::NeedsApproval]
                .into_iter()
                .max(),
            Some(Decision::Deny)
        );
    }

    #[test]
    fn serializes_screaming_snake_case() {
        let json = serde_json::to_string(&Decision::NeedsApproval).expect("serialize");
        assert_eq!(json, "\"NEEDS_APPROVAL\"");
        let back: Decision = serde_json::from_str("\"DENY\"").expect("deserialize");
        assert_eq!(back, Decision::Deny);
    }

    #[test]
    fn reasons_name_the_pattern() {
        assert_eq!(
            PathEvaluation::deny(".env", ".env").reason,
            "Matches deny pattern: .env"
        );
        assert_eq!(
            PathEvaluation::needs_approval("src/a.rs", "src/**").reason,
            "Matches approval-required pattern: src/**"
        );
        assert_eq!(PathEvaluation::allow("README.md").reason, "No restrictions apply");
    }

    #[test]
    fn only_allow_is_non_blocking() {
        assert!(!Decision::Allow.is_blocking());
        assert!(Decision::NeedsApproval.is_blocking());
        assert!(Decision::Deny.is_blocking());
    }
}
