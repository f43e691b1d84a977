//! Git process invocation boundary.
//!
//! Every query to git goes through the [`GitSource`] trait so the
//! analysis passes can be exercised against canned output without
//! spawning a process.

use std::path::Path;
use std::process::Command;

use anyhow::{Result, bail};
use tracing::debug;

use crate::error::{ErrorCode, PulseError};

/// Log format: one metadata line per commit, followed by the touched
/// file paths from `--name-only`.
const LOG_FORMAT: &str = "%H|%s|%ad|%an";

/// Read-only view of a git repository, one method per distinct query.
pub trait GitSource {
    /// Raw `git log` output for the most recent `max_commits` commits.
    fn history(&self, max_commits: usize) -> Result<String>;

    /// Configured `remote.origin.url`, trimmed.
    fn remote_url(&self) -> Result<String>;

    /// Current branch name, trimmed. Empty on a detached HEAD.
    fn current_branch(&self) -> Result<String>;
}

/// [`GitSource`] backed by the `git` binary, run in the current
/// working directory. Each call is a blocking process invocation with
/// no timeout and no retry.
pub struct GitCli;

impl GitCli {
    fn run(args: &[&str]) -> Result<String> {
        debug!(args = ?args, "running git");
        let output = Command::new("git").args(args).output().map_err(|e| {
            PulseError::new(ErrorCode::SourceUnavailable, format!("Failed to run git: {e}"))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(PulseError::new(
                ErrorCode::SourceUnavailable,
                format!(
                    "git {} failed: {}",
                    args.first().unwrap_or(&""),
                    stderr.trim()
                ),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitSource for GitCli {
    fn history(&self, max_commits: usize) -> Result<String> {
        let count = format!("-n{max_commits}");
        let format = format!("--pretty=format:{LOG_FORMAT}");
        Self::run(&["log", &count, "--name-only", &format, "--date=short"])
    }

    fn remote_url(&self) -> Result<String> {
        Ok(Self::run(&["config", "--get", "remote.origin.url"])?
            .trim()
            .to_string())
    }

    fn current_branch(&self) -> Result<String> {
        Ok(Self::run(&["branch", "--show-current"])?.trim().to_string())
    }
}

/// Check for the `.git` marker directly under `dir`. A plain file
/// counts too (worktrees and submodules store a pointer file there).
pub fn is_repository(dir: &Path) -> bool {
    dir.join(".git").exists()
}
