//! Repository adapters: where candidate paths come from.
//!
//! This crate is allowed to spawn external processes. It knows nothing about policies;
//! it only produces the ordered list of repo-relative paths to evaluate.

#![forbid(unsafe_code)]

mod git;

use camino::Utf8Path;

pub use git::GitStagedFiles;

/// Failure of an external path source.
#[derive(Debug, thiserror::Error)]
pub enum PathSourceError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("`{command}` produced non-UTF-8 output")]
    NonUtf8 {
        command: String,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

/// Produces candidate paths for a repository.
pub trait PathSource {
    fn candidate_paths(&self, repo_root: &Utf8Path) -> Result<Vec<String>, PathSourceError>;
}

/// An explicit, caller-supplied path list. The repository root is ignored.
#[derive(Clone, Debug, Default)]
pub struct FixedPaths(pub Vec<String>);

impl PathSource for FixedPaths {
    fn candidate_paths(&self, _repo_root: &Utf8Path) -> Result<Vec<String>, PathSourceError> {
        Ok(self.0.clone())
    }
}

/// Split newline-delimited output into paths: trim each line, drop blank lines, keep order.
pub fn parse_path_list(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split NUL-terminated output (`-z`) into paths: drop empty entries, keep order.
///
/// Entries are not trimmed; with `-z` every byte belongs to the name.
pub fn parse_nul_list(text: &str) -> Vec<String> {
    text.split('\0')
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
