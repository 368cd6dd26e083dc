//! Integration tests for loading `.agentpolicy.yaml` from disk.

use camino::{Utf8Path, Utf8PathBuf};
use clew_settings::{POLICY_FILE_NAME, PolicyError, load_policy, policy_path};
use std::path::PathBuf;

/// Get the path to the shared fixtures directory (repo root / tests / fixtures).
fn fixtures_dir() -> Utf8PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    // crates/clew-settings -> crates -> repo root
    let repo_root = manifest_dir
        .parent()
        .expect("clew-settings should have parent (crates)")
        .parent()
        .expect("crates should have parent (repo root)");
    Utf8PathBuf::from_path_buf(repo_root.join("tests").join("fixtures"))
        .expect("fixture path should be valid UTF-8")
}

fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
    let tmp = tempfile::tempdir().expect("create temp dir");
    let root = Utf8Path::from_path(tmp.path())
        .expect("utf8 path")
        .to_path_buf();
    (tmp, root)
}

#[test]
fn loads_standard_fixture() {
    let policy = load_policy(&fixtures_dir().join("standard")).expect("load policy");

    assert_eq!(
        policy.deny_paths,
        vec![".env", "*.key", "secrets/**", ".aws/credentials"]
    );
    assert_eq!(
        policy.approval_required_paths,
        vec!["src/**", "package.json", ".github/**"]
    );
}

#[test]
fn empty_file_yields_empty_policy() {
    let policy = load_policy(&fixtures_dir().join("empty")).expect("load policy");
    assert!(policy.deny_paths.is_empty());
    assert!(policy.approval_required_paths.is_empty());
}

#[test]
fn missing_file_is_not_found() {
    let root = fixtures_dir().join("no_policy");
    let err = load_policy(&root).expect_err("no policy file");

    match &err {
        PolicyError::NotFound { path } => assert_eq!(path, &policy_path(&root)),
        other => panic!("expected NotFound, got {other:?}"),
    }
    let msg = err.to_string();
    assert!(msg.contains("Policy file not found"), "{msg}");
    assert!(msg.contains(POLICY_FILE_NAME), "{msg}");
}

#[test]
fn unclosed_sequence_is_syntax_error() {
    let err = load_policy(&fixtures_dir().join("invalid_yaml")).expect_err("bad yaml");
    assert!(matches!(err, PolicyError::Syntax { .. }), "{err:?}");
    assert!(err.to_string().contains("Invalid YAML syntax"));
}

#[test]
fn schema_violations_are_collected() {
    let err = load_policy(&fixtures_dir().join("invalid_schema")).expect_err("bad schema");

    let PolicyError::Validation { issues, .. } = &err else {
        panic!("expected Validation, got {err:?}");
    };
    let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["deny_paths.0", "deny_paths.1", "approval_required_paths.0"]
    );

    let msg = err.to_string();
    assert!(msg.contains("Invalid policy configuration"), "{msg}");
    assert!(msg.contains("Path cannot be empty"), "{msg}");
    assert!(msg.contains("Expected format:"), "{msg}");
}

#[test]
fn policy_is_read_fresh_each_time() {
    let (_tmp, root) = temp_root();
    let path = policy_path(&root);

    std::fs::write(&path, "deny_paths: [.env]\n").expect("write policy");
    assert_eq!(load_policy(&root).expect("first load").deny_paths, vec![".env"]);

    std::fs::write(&path, "deny_paths: [secrets/**]\n").expect("rewrite policy");
    assert_eq!(
        load_policy(&root).expect("second load").deny_paths,
        vec!["secrets/**"]
    );
}

#[test]
fn directory_in_place_of_file_is_read_error() {
    let (_tmp, root) = temp_root();
    std::fs::create_dir(policy_path(&root)).expect("create dir");

    let err = load_policy(&root).expect_err("cannot read a directory");
    assert!(matches!(err, PolicyError::Read { .. }), "{err:?}");
    assert!(err.to_string().contains("Failed to read policy file"));
}
