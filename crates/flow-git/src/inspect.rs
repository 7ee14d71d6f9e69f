//! One-shot, read-only snapshot of a checkout.

use std::path::{Path, PathBuf};

use crate::commits::{CommitInfo, list_unique_commits};
use crate::helpers::{
    ahead_behind, get_current_branch, head_commit_id, is_linked_worktree, open_repository,
    repository_name, resolve_base_tip, working_tree_root,
};
use crate::status::{WorkingTreeFiles, working_tree_files};
use crate::{Error, Result};

/// Upper bound on commits listed in [`RepositoryFacts::unique_commits`].
///
/// The `ahead` count stays exact beyond this limit.
pub const MAX_UNIQUE_COMMITS: usize = 50;

/// Raw facts about a checkout, gathered without modifying anything.
#[derive(Debug, Clone)]
pub struct RepositoryFacts {
    /// Root of the working tree containing `cwd`
    pub repo_root: PathBuf,

    /// Repository name, shared by all of its worktrees
    pub repo_name: String,

    /// Current branch, `None` when HEAD is detached
    pub current_branch: Option<String>,

    /// Whether this checkout is a linked worktree rather than the primary one
    pub is_linked_worktree: bool,

    /// Short name of the ref the comparison ran against (`origin/main` or `main`)
    pub base_ref: String,

    /// Commits on HEAD that the base ref lacks
    pub ahead: usize,

    /// Commits on the base ref that HEAD lacks
    pub behind: usize,

    /// Commits unique to HEAD relative to the base ref, newest first
    pub unique_commits: Vec<CommitInfo>,

    /// Staged and unstaged paths
    pub files: WorkingTreeFiles,
}

/// Inspect the repository containing `cwd`.
///
/// The current commit is compared against `<remote>/<base_branch>` when that
/// remote-tracking branch exists, otherwise against the local `<base_branch>`.
///
/// # Errors
/// - [`Error::NotARepository`] when `cwd` is outside any working tree
/// - [`Error::NoCommits`] when the repository has no history yet
/// - [`Error::BranchNotFound`] when neither base ref exists
pub fn inspect_repository(cwd: &Path, base_branch: &str, remote: &str) -> Result<RepositoryFacts> {
    let repo = open_repository(cwd)?;
    let repo_root = working_tree_root(&repo)?;
    let current_branch = get_current_branch(&repo)?;
    let head = head_commit_id(&repo)?;

    let (base_ref, base_tip) =
        resolve_base_tip(&repo, remote, base_branch)?.ok_or_else(|| Error::BranchNotFound {
            name: base_branch.to_string(),
        })?;

    let (ahead, behind) = ahead_behind(&repo, head, base_tip)?;
    let unique_commits = if ahead > 0 {
        list_unique_commits(&repo, head, Some(base_tip), MAX_UNIQUE_COMMITS)?
    } else {
        Vec::new()
    };

    let files = working_tree_files(&repo)?;
    let repo_name = repository_name(&repo).unwrap_or_else(|| "repository".to_string());

    tracing::debug!(
        root = %repo_root.display(),
        branch = ?current_branch,
        base = %base_ref,
        ahead,
        behind,
        staged = files.staged.len(),
        unstaged = files.unstaged.len(),
        "Inspected repository"
    );

    Ok(RepositoryFacts {
        repo_root,
        repo_name,
        current_branch,
        is_linked_worktree: is_linked_worktree(&repo),
        base_ref,
        ahead,
        behind,
        unique_commits,
        files,
    })
}
