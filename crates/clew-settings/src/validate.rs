use crate::error::{PolicyParseError, ValidationIssues};
use crate::model::AgentPolicyV1;
use clew_domain::{PatternList, Policy, glob::compile_pattern};
use clew_types::ids;
use serde_yaml::{Mapping, Value};

/// Parse and validate policy text.
///
/// Blank and comment-only documents are an empty policy. Validation collects every issue
/// before failing.
pub fn parse_policy_yaml(input: &str) -> Result<Policy, PolicyParseError> {
    let value = if is_blank_document(input) {
        Value::Null
    } else {
        serde_yaml::from_str::<Value>(input).map_err(PolicyParseError::Syntax)?
    };
    let value = match value {
        Value::Null => Value::Mapping(Mapping::new()),
        other => other,
    };

    let issues = validate_document(&value);
    if !issues.is_empty() {
        return Err(PolicyParseError::Validation(issues));
    }

    let model: AgentPolicyV1 = serde_yaml::from_value(value).map_err(PolicyParseError::Syntax)?;
    Ok(model.into())
}

fn is_blank_document(input: &str) -> bool {
    input.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

fn validate_document(value: &Value) -> ValidationIssues {
    let mut issues = ValidationIssues::default();

    let Value::Mapping(map) = value else {
        issues.push(
            "<root>",
            format!("Expected object, received {}", type_name(value)),
        );
        return issues;
    };

    for list in PatternList::ALL {
        let key = list.key();
        // Missing keys default to empty; present keys must be well-formed, even if null.
        let Some(entry) = map.get(key) else {
            continue;
        };
        validate_pattern_list(key, entry, &mut issues);
    }

    issues
}

fn validate_pattern_list(key: &str, value: &Value, issues: &mut ValidationIssues) {
    let Value::Sequence(items) = value else {
        issues.push(key, format!("Expected array, received {}", type_name(value)));
        return;
    };

    for (index, item) in items.iter().enumerate() {
        let field = format!("{key}.{index}");
        match item {
            Value::String(pattern) if pattern.is_empty() => {
                issues.push(field, ids::MSG_EMPTY_PATH);
            }
            Value::String(pattern) => {
                if let Err(err) = compile_pattern(pattern) {
                    issues.push(field, format!("Invalid glob pattern: {err}"));
                }
            }
            other => {
                issues.push(field, format!("Expected string, received {}", type_name(other)));
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "array",
        Value::Mapping(_) => "object",
        Value::Tagged(_) => "tagged value",
    }
}
