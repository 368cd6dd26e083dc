use clew_types::{CheckResult, Decision};

/// Render blocked paths as GitHub Actions workflow command annotations.
///
/// Format:
/// `::{level} file={path}::{DECISION}: {reason}`
///
/// `DENY` maps to `error`, `NEEDS_APPROVAL` to `warning`. Allowed paths are not annotated.
pub fn render_github_annotations(result: &CheckResult) -> Vec<String> {
    let mut out = Vec::new();

    for b in &result.blocked {
        let level = match b.decision {
            Decision::Deny => "error",
            Decision::NeedsApproval => "warning",
            Decision::Allow => continue,
        };
        let message = escape_data(&format!("{}: {}", b.decision, b.reason));
        out.push(format!(
            "::{} file={}::{}",
            level,
            escape_property(&b.path),
            message
        ));
    }

    out
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use clew_types::PathEvaluation;

    #[test]
    fn only_blocked_paths_are_annotated() {
        let annotations = render_github_annotations(&fixtures::mixed());
        assert_eq!(
            annotations,
            vec![
                "::error file=.env::DENY: Matches deny pattern: .env".to_string(),
                "::warning file=src/index.ts::NEEDS_APPROVAL: Matches approval-required pattern: src/**"
                    .to_string(),
            ]
        );
        assert!(render_github_annotations(&fixtures::clean()).is_empty());
    }

    #[test]
    fn escapes_workflow_command_syntax() {
        let result = CheckResult::from_evaluations(
            vec!["odd,name:100%.txt".into()],
            vec![PathEvaluation::deny("odd,name:100%.txt", "*%*")],
        );
        insta::assert_snapshot!(
            render_github_annotations(&result).join("\n"),
            @"::error file=odd%2Cname%3A100%25.txt::DENY: Matches deny pattern: *%25*"
        );
    }
}
