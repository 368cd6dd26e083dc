//! Rendering utilities for check results (console text, GitHub annotations).

#![forbid(unsafe_code)]

mod gha;
mod text;

pub use gha::render_github_annotations;
pub use text::{render_policy_error, render_text};
