use crate::{PathSource, PathSourceError, parse_nul_list};
use camino::Utf8Path;
use std::process::Command;

/// Staged changes: `git diff --cached --name-only`, run with the repository root as cwd.
///
/// Output is requested NUL-terminated with `core.quotePath` off, so non-ASCII and
/// otherwise unusual names arrive verbatim instead of as quoted C-style escapes.
///
/// Blocks until git exits. There is no timeout and no retry.
#[derive(Clone, Debug)]
pub struct GitStagedFiles {
    git: String,
}

impl Default for GitStagedFiles {
    fn default() -> Self {
        Self {
            git: "git".to_string(),
        }
    }
}

impl GitStagedFiles {
    const ARGS: [&'static str; 6] = [
        "-c",
        "core.quotePath=false",
        "diff",
        "--cached",
        "--name-only",
        "-z",
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific git executable instead of the one on `PATH`.
    pub fn with_git(git: impl Into<String>) -> Self {
        Self { git: git.into() }
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.git, Self::ARGS.join(" "))
    }
}

impl PathSource for GitStagedFiles {
    fn candidate_paths(&self, repo_root: &Utf8Path) -> Result<Vec<String>, PathSourceError> {
        let command = self.command_line();
        tracing::debug!(%command, cwd = %repo_root, "listing staged files");

        let output = Command::new(&self.git)
            .current_dir(repo_root)
            .args(Self::ARGS)
            .output()
            .map_err(|source| PathSourceError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(PathSourceError::Failed {
                command,
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|source| PathSourceError::NonUtf8 { command, source })?;
        let paths = parse_nul_list(&stdout);

        tracing::debug!(count = paths.len(), "staged files listed");
        Ok(paths)
    }
}
