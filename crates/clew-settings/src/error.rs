use camino::Utf8PathBuf;
use std::fmt;

/// Shown after validation issues so the operator can fix the file in one go.
const EXPECTED_FORMAT: &str = "Expected format:
deny_paths:
  - \"path/to/deny1\"
  - \"path/to/deny2\"
approval_required_paths:
  - \"path/requiring/approval\"";

/// Failure to load the policy. Every variant is terminal for the current run.
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    #[error(
        "Policy file not found: {path}\n\
         Create a .agentpolicy.yaml file in the repository root with the required configuration."
    )]
    NotFound { path: Utf8PathBuf },

    #[error("Failed to read policy file: {path}\nReason: {source}")]
    Read {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML syntax in policy file: {path}\nReason: {source}")]
    Syntax {
        path: Utf8PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid policy configuration in {path}:\n{issues}")]
    Validation {
        path: Utf8PathBuf,
        issues: ValidationIssues,
    },
}

impl PolicyError {
    pub(crate) fn from_parse(path: Utf8PathBuf, err: PolicyParseError) -> Self {
        match err {
            PolicyParseError::Syntax(source) => PolicyError::Syntax { path, source },
            PolicyParseError::Validation(issues) => PolicyError::Validation { path, issues },
        }
    }
}

/// Failure to turn policy text into a [`clew_domain::Policy`], without file context.
#[derive(Debug, thiserror::Error)]
pub enum PolicyParseError {
    #[error("Invalid YAML syntax: {0}")]
    Syntax(#[source] serde_yaml::Error),

    #[error("Invalid policy configuration:\n{0}")]
    Validation(ValidationIssues),
}

/// One schema violation, addressed by a dotted field path such as `deny_paths.0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every violation found in a document, in document order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationIssues(pub Vec<ValidationIssue>);

impl ValidationIssues {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationIssue> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(ValidationIssue::new(field, message));
    }
}

impl fmt::Display for ValidationIssues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.0 {
            writeln!(f, "  • {issue}")?;
        }
        write!(f, "\n{EXPECTED_FORMAT}")
    }
}
