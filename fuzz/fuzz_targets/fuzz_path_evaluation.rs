//! Fuzz target for path evaluation.
//!
//! Goal: evaluation is total. For any patterns and candidates it returns exactly one
//! result per candidate, in order, and **never panics**.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_path_evaluation
//! ```

#![no_main]

use arbitrary::Arbitrary;
use clew_domain::{Policy, evaluate_paths};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct EvalInput {
    deny: Vec<String>,
    approval: Vec<String>,
    candidates: Vec<String>,
}

fuzz_target!(|input: EvalInput| {
    if input.deny.len() + input.approval.len() > 20 || input.candidates.len() > 100 {
        return;
    }
    let keep_short = |v: Vec<String>| v.into_iter().filter(|p| p.len() <= 256).collect::<Vec<_>>();

    let policy = Policy::new(keep_short(input.deny), keep_short(input.approval));
    let candidates = keep_short(input.candidates);

    let results = evaluate_paths(&candidates, &policy);
    assert_eq!(results.len(), candidates.len());
    for (r, c) in results.iter().zip(&candidates) {
        assert_eq!(&r.path, c);
    }
});
