//! # clew
//!
//! Decides, for a set of repository paths, whether each one is freely permitted, forbidden,
//! or needs human approval, based on `<repo_root>/.agentpolicy.yaml`:
//!
//! ```yaml
//! deny_paths: [".env", "secrets/**"]
//! approval_required_paths: ["src/**"]
//! ```
//!
//! Deny beats approval, approval beats the default allow. clew only decides; what to do
//! with a `DENY` or `NEEDS_APPROVAL` is up to the caller.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use camino::Utf8Path;
//!
//! let root = Utf8Path::new(".");
//! let policy = clew::load_policy(root).unwrap();
//! for e in clew::evaluate_paths(&[".env", "README.md"], &policy) {
//!     println!("{} {} ({})", e.decision, e.path, e.reason);
//! }
//!
//! let result = clew::check_staged_files(root).unwrap();
//! std::process::exit(clew::exit_code(&result));
//! ```

#![forbid(unsafe_code)]

pub use clew_app::{CheckError, check_staged_files, check_with_source, exit_code};
pub use clew_domain::{CompiledPolicy, Policy, evaluate_paths};
pub use clew_repo::{FixedPaths, GitStagedFiles, PathSource, PathSourceError};
pub use clew_settings::{POLICY_FILE_NAME, PolicyError, load_policy, parse_policy_yaml};
pub use clew_types::{CheckResult, Decision, PathEvaluation};
