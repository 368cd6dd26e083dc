//! Render use cases: turn a check result into the requested output format.

use clew_types::CheckResult;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Github,
}

/// Pretty-printed JSON with a trailing newline.
pub fn serialize_result(result: &CheckResult) -> serde_json::Result<String> {
    let mut json = serde_json::to_string_pretty(result)?;
    json.push('\n');
    Ok(json)
}

/// Render `result` for stdout. `subject` names what was checked (e.g. `"staged file"`).
pub fn render_result(
    result: &CheckResult,
    format: OutputFormat,
    subject: &str,
) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(clew_render::render_text(result, subject)),
        OutputFormat::Json => serialize_result(result),
        OutputFormat::Github => {
            let mut out = clew_render::render_github_annotations(result).join("\n");
            if !out.is_empty() {
                out.push('\n');
            }
            Ok(out)
        }
    }
}
