//! Property-based tests for the evaluator.
//!
//! These tests use proptest to verify the laws callers rely on:
//! - deny dominates approval, approval dominates the default allow
//! - unmatched paths are allowed with the fixed reason
//! - output order and length follow the input, duplicates included

use crate::engine::{CompiledPolicy, evaluate_paths};
use crate::policy::Policy;
use clew_types::{Decision, ids};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_segment() -> impl Strategy<Value = String> {
    prop::string::string_regex("\\.?[a-z][a-z0-9_-]{0,8}(\\.[a-z]{1,3})?").unwrap()
}

/// Repo-relative paths with one to four segments.
fn arb_path() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_segment(), 1..=4).prop_map(|segs| segs.join("/"))
}

fn arb_pattern() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_path(),
        arb_segment().prop_map(|s| format!("{s}/**")),
        prop::string::string_regex("[a-z]{1,3}").unwrap().prop_map(|e| format!("**/*.{e}")),
        prop::string::string_regex("[a-z]{1,3}").unwrap().prop_map(|e| format!("*.{e}")),
        Just(".*".to_string()),
        Just("**".to_string()),
    ]
}

fn arb_policy() -> impl Strategy<Value = Policy> {
    (
        prop::collection::vec(arb_pattern(), 0..5),
        prop::collection::vec(arb_pattern(), 0..5),
    )
        .prop_map(|(deny, approval)| Policy::new(deny, approval))
}

// ============================================================================
// Laws
// ============================================================================

proptest! {
    #[test]
    fn order_and_length_are_preserved(
        paths in prop::collection::vec(arb_path(), 0..20),
        policy in arb_policy(),
    ) {
        let results = evaluate_paths(&paths, &policy);
        let out: Vec<&str> = results.iter().map(|e| e.path.as_str()).collect();
        let input: Vec<&str> = paths.iter().map(String::as_str).collect();
        prop_assert_eq!(out, input);
    }

    #[test]
    fn deny_dominates_approval(path in arb_path(), policy in arb_policy()) {
        // Put the path itself in both lists: it must always come out denied.
        let mut policy = policy;
        policy.deny_paths.push(path.clone());
        policy.approval_required_paths.insert(0, path.clone());

        let results = evaluate_paths(std::slice::from_ref(&path), &policy);
        prop_assert_eq!(results[0].decision, Decision::Deny);
    }

    #[test]
    fn approval_dominates_allow(path in arb_path(), approval in prop::collection::vec(arb_pattern(), 0..5)) {
        let mut approval = approval;
        approval.push(path.clone());
        let policy = Policy::new(Vec::new(), approval);

        let results = evaluate_paths(std::slice::from_ref(&path), &policy);
        prop_assert_eq!(results[0].decision, Decision::NeedsApproval);
    }

    #[test]
    fn empty_policy_allows_everything(paths in prop::collection::vec(arb_path(), 0..20)) {
        let results = evaluate_paths(&paths, &Policy::default());
        for r in &results {
            prop_assert_eq!(r.decision, Decision::Allow);
            prop_assert_eq!(r.reason.as_str(), ids::REASON_NO_RESTRICTIONS);
        }
    }

    #[test]
    fn decision_agrees_with_individual_matchers(path in arb_path(), policy in arb_policy()) {
        let matches = |patterns: &[String]| {
            patterns.iter().any(|p| crate::glob::matcher(p).map(|m| m.is_match(&path)).unwrap_or(false))
        };
        let expected = if matches(&policy.deny_paths) {
            Decision::Deny
        } else if matches(&policy.approval_required_paths) {
            Decision::NeedsApproval
        } else {
            Decision::Allow
        };

        let compiled = CompiledPolicy::compile(&policy).expect("generated patterns are valid");
        prop_assert_eq!(compiled.evaluate(&path).decision, expected);
    }
}
