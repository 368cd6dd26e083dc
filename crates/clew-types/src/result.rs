use crate::PathEvaluation;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stable schema identifier for serialized check results.
pub const SCHEMA_CHECK_V1: &str = "clew.check.v1";

/// Aggregate of one check run.
///
/// `evaluations` has the same order and length as `staged_files`; `blocked` is the
/// order-preserving subset whose decision is not `ALLOW`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckResult {
    pub schema: String,
    pub success: bool,
    pub staged_files: Vec<String>,
    pub evaluations: Vec<PathEvaluation>,
    pub blocked: Vec<PathEvaluation>,
}

impl CheckResult {
    pub fn from_evaluations(staged_files: Vec<String>, evaluations: Vec<PathEvaluation>) -> Self {
        let blocked: Vec<PathEvaluation> = evaluations
            .iter()
            .filter(|e| e.decision.is_blocking())
            .cloned()
            .collect();

        Self {
            schema: SCHEMA_CHECK_V1.to_string(),
            success: blocked.is_empty(),
            staged_files,
            evaluations,
            blocked,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.staged_files.is_empty()
    }
}
