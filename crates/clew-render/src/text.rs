use clew_types::{CheckResult, Decision};

fn icon(decision: Decision) -> &'static str {
    match decision {
        Decision::Allow => "✓",
        Decision::Deny => "✗",
        Decision::NeedsApproval => "⚠",
    }
}

fn status(decision: Decision) -> &'static str {
    match decision {
        Decision::Deny => "DENIED",
        Decision::NeedsApproval => "REQUIRES APPROVAL",
        Decision::Allow => "ALLOWED",
    }
}

/// Human-readable console report.
///
/// `subject` names what was checked, e.g. `"staged file"`.
pub fn render_text(result: &CheckResult, subject: &str) -> String {
    let mut out = String::new();

    if result.is_empty() {
        out.push_str(&format!("ℹ No {subject}s to check\n"));
        return out;
    }

    out.push_str(&format!(
        "📋 Checking {} {subject}(s)...\n\n",
        result.staged_files.len()
    ));

    for e in &result.evaluations {
        out.push_str(&format!("{} {}\n", icon(e.decision), e.path));
        out.push_str(&format!("  └─ {}: {}\n", e.decision, e.reason));
    }

    if result.success {
        out.push_str("\n✓ All checks passed\n");
        return out;
    }

    out.push_str(&format!(
        "\n✗ Check failed: {} file(s) blocked\n",
        result.blocked.len()
    ));
    for b in &result.blocked {
        out.push_str(&format!("  • {} ({})\n", b.path, status(b.decision)));
    }

    out
}

/// One-line error banner for stderr.
pub fn render_policy_error(message: &str) -> String {
    format!("✗ Error: {message}\n")
}
