//! Policy file parsing and validation.
//!
//! [`parse_policy_yaml`] is IO-free; [`load_policy`] adds the single filesystem read of
//! `<repo_root>/.agentpolicy.yaml`. A policy is read fresh on every call; nothing is cached.

#![forbid(unsafe_code)]

mod error;
mod load;
mod model;
mod validate;

pub use clew_domain::Policy;
pub use clew_types::ids::POLICY_FILE_NAME;
pub use error::{PolicyError, PolicyParseError, ValidationIssue, ValidationIssues};
pub use load::{load_policy, load_policy_file, policy_path};
pub use model::AgentPolicyV1;
pub use validate::parse_policy_yaml;
