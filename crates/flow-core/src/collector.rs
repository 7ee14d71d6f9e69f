//! Repository facts collection
//!
//! [`analyze_git_state`] runs the read-only inspection; [`derive_git_state`]
//! turns the raw facts into a [`GitState`] without touching git.

use std::path::Path;

use flow_git::{RepositoryFacts, inspect_repository};

use crate::config::FlowConfig;
use crate::state::{BranchType, CommitRelationship, GitState, WorktreeType};
use crate::worktree::WorktreePattern;
use crate::Result;

/// Collect a [`GitState`] for the checkout containing `cwd`.
///
/// Never modifies the repository. Environment problems surface as
/// [`Error::NotARepository`](crate::Error::NotARepository),
/// [`Error::NoCommits`](crate::Error::NoCommits) or
/// [`Error::BaseBranchNotFound`](crate::Error::BaseBranchNotFound).
pub fn analyze_git_state(base_branch: &str, cwd: &Path, config: &FlowConfig) -> Result<GitState> {
    let facts = inspect_repository(cwd, base_branch, &config.remote)?;
    derive_git_state(facts, base_branch, config.main_worktree_pattern.as_deref())
}

/// Build a [`GitState`] from raw repository facts.
///
/// With a `main_worktree_pattern`, a checkout whose root matches is the main
/// worktree and any other is a PR worktree. Without one, a linked worktree is
/// a PR worktree.
pub fn derive_git_state(
    facts: RepositoryFacts,
    base_branch: &str,
    main_worktree_pattern: Option<&str>,
) -> Result<GitState> {
    let worktree_type = match main_worktree_pattern {
        Some(pattern) => {
            let pattern = WorktreePattern::new(pattern, &facts.repo_name)?;
            if pattern.matches(&facts.repo_root) {
                WorktreeType::MainWorktree
            } else {
                WorktreeType::PrWorktree
            }
        }
        None if facts.is_linked_worktree => WorktreeType::PrWorktree,
        None => WorktreeType::MainWorktree,
    };

    let branch_type = if facts.current_branch.as_deref() == Some(base_branch) {
        BranchType::Main
    } else {
        BranchType::Other
    };

    let commit_relationship = relationship_from_counts(facts.ahead, facts.behind, branch_type);

    let local_commits = match branch_type {
        BranchType::Main => Vec::new(),
        BranchType::Other => facts.unique_commits.into_iter().map(Into::into).collect(),
    };

    Ok(GitState {
        worktree_type,
        branch_type,
        current_branch: facts.current_branch,
        commit_relationship,
        local_commits,
        staged_files: facts.files.staged,
        unstaged_files: facts.files.unstaged,
        ahead: facts.ahead,
        behind: facts.behind,
        base_ref: facts.base_ref,
        repo_root: facts.repo_root,
        repo_name: facts.repo_name,
    })
}

/// Map ahead/behind counts to a relationship.
///
/// Being strictly behind reads as `behind` for the base branch itself (it
/// lags its remote) and `ancestor` for any other branch (it has been merged).
pub fn relationship_from_counts(
    ahead: usize,
    behind: usize,
    branch_type: BranchType,
) -> CommitRelationship {
    match (ahead > 0, behind > 0) {
        (false, false) => CommitRelationship::Same,
        (true, false) => CommitRelationship::Ahead,
        (false, true) => match branch_type {
            BranchType::Main => CommitRelationship::Behind,
            BranchType::Other => CommitRelationship::Ancestor,
        },
        (true, true) => CommitRelationship::Divergent,
    }
}
