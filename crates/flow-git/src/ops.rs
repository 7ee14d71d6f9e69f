//! Capability trait for the mutating git operations.

use std::path::Path;

use crate::Result;

/// Pathspec selecting every path in the repository, regardless of `cwd`.
pub const ALL_PATHS: &str = ":/";

/// The mutating operations the action executor may perform.
///
/// The executor only calls through this trait. [`CliGitOperations`] shells
/// out to `git`; tests substitute an implementation that records calls.
///
/// [`CliGitOperations`]: crate::CliGitOperations
pub trait GitOperations {
    /// Stage `pathspec` (modifications, deletions and untracked files).
    fn stage(&self, cwd: &Path, pathspec: &str) -> Result<()>;

    /// Stash local changes under `message`.
    ///
    /// With `keep_index`, staged content is stashed but also left in place,
    /// so only unstaged work leaves the working tree.
    fn stash(&self, cwd: &Path, message: &str, keep_index: bool) -> Result<()>;

    /// Commit the index with `message`.
    ///
    /// `allow_empty` permits a commit that changes nothing.
    fn commit(&self, cwd: &Path, message: &str, allow_empty: bool) -> Result<()>;

    /// Push `branch` to `remote`, optionally recording it as upstream.
    fn push(&self, cwd: &Path, remote: &str, branch: &str, set_upstream: bool) -> Result<()>;
}
