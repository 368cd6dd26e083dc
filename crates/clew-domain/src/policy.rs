use std::fmt;

/// The validated policy: ordered deny and approval-required glob patterns.
///
/// Order only affects which pattern is reported in a reason, never the decision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Policy {
    pub deny_paths: Vec<String>,
    pub approval_required_paths: Vec<String>,
}

impl Policy {
    pub fn new(deny_paths: Vec<String>, approval_required_paths: Vec<String>) -> Self {
        Self {
            deny_paths,
            approval_required_paths,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.deny_paths.is_empty() && self.approval_required_paths.is_empty()
    }

    pub fn patterns(&self, list: PatternList) -> &[String] {
        match list {
            PatternList::Deny => &self.deny_paths,
            PatternList::ApprovalRequired => &self.approval_required_paths,
        }
    }
}

/// Which of the two pattern sequences a pattern belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PatternList {
    Deny,
    ApprovalRequired,
}

impl PatternList {
    pub const ALL: [PatternList; 2] = [PatternList::Deny, PatternList::ApprovalRequired];

    /// Key of this list in the policy document.
    pub fn key(self) -> &'static str {
        match self {
            PatternList::Deny => "deny_paths",
            PatternList::ApprovalRequired => "approval_required_paths",
        }
    }
}

impl fmt::Display for PatternList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
