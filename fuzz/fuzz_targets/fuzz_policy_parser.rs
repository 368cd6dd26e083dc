//! Fuzz target for policy document parsing.
//!
//! Goal: parsing and validation should **never panic** on any input.
//! Arbitrary text may be rejected as a syntax or validation error.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 64 * 1024 {
        return;
    }

    if let Ok(policy) = clew_settings::parse_policy_yaml(text) {
        // Anything the loader accepts must compile strictly.
        assert!(clew_domain::CompiledPolicy::compile(&policy).is_ok());
        assert!(policy.deny_paths.iter().all(|p| !p.is_empty()));
        assert!(policy.approval_required_paths.iter().all(|p| !p.is_empty()));
    }
});
