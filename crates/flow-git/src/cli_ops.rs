//! [`GitOperations`] backed by the `git` executable.

use std::path::Path;
use std::process::Command;

use crate::ops::GitOperations;
use crate::{Error, Result};

/// Production [`GitOperations`] that runs `git` in the given directory.
///
/// Relies on git's own index locking; each call runs to completion before
/// returning.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliGitOperations;

impl CliGitOperations {
    /// Create a new CliGitOperations.
    pub fn new() -> Self {
        Self
    }

    /// Run a git command in `cwd` and return its trimmed stdout.
    fn git(&self, cwd: &Path, args: &[&str]) -> Result<String> {
        tracing::debug!(cwd = %cwd.display(), args = ?args, "Running git");

        let output = Command::new("git").args(args).current_dir(cwd).output()?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let message = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            Err(Error::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message,
            })
        }
    }

    /// Create and switch to `name`, starting at `revision`.
    ///
    /// This is the caller's half of an action: the executor decides what to
    /// commit, the branch point decides where the branch starts.
    pub fn checkout_new_branch(&self, cwd: &Path, name: &str, revision: &str) -> Result<()> {
        self.git(cwd, &["checkout", "-b", name, revision])?;
        Ok(())
    }
}

impl GitOperations for CliGitOperations {
    fn stage(&self, cwd: &Path, pathspec: &str) -> Result<()> {
        self.git(cwd, &["add", "--all", "--", pathspec])?;
        Ok(())
    }

    fn stash(&self, cwd: &Path, message: &str, keep_index: bool) -> Result<()> {
        let mut args = vec!["stash", "push", "--include-untracked", "--message", message];
        if keep_index {
            args.push("--keep-index");
        }
        self.git(cwd, &args)?;
        Ok(())
    }

    fn commit(&self, cwd: &Path, message: &str, allow_empty: bool) -> Result<()> {
        let mut args = vec!["commit", "--message", message];
        if allow_empty {
            args.push("--allow-empty");
        }
        self.git(cwd, &args)?;
        Ok(())
    }

    fn push(&self, cwd: &Path, remote: &str, branch: &str, set_upstream: bool) -> Result<()> {
        let mut args = vec!["push"];
        if set_upstream {
            args.push("--set-upstream");
        }
        args.push(remote);
        args.push(branch);
        self.git(cwd, &args)?;
        Ok(())
    }
}
