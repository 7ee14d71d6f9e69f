//! Repository state snapshot

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the checkout is the repository's primary working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorktreeType {
    #[default]
    MainWorktree,
    /// A secondary checkout dedicated to one pull request
    PrWorktree,
}

/// Whether the current branch is the configured base branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchType {
    #[default]
    Main,
    Other,
}

/// Relationship of the current commit to the base branch tip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommitRelationship {
    /// Identical commit
    #[default]
    Same,
    /// Current has commits the base lacks, and nothing more
    Ahead,
    /// The base branch itself lags its remote
    Behind,
    /// A non-base branch already contained in the base
    Ancestor,
    /// Both sides have unique commits
    Divergent,
}

/// Which kinds of uncommitted change are present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkingTreeStatus {
    Clean,
    StagedOnly,
    UnstagedOnly,
    Both,
}

impl WorkingTreeStatus {
    /// Status implied by whether each file set is non-empty.
    pub fn from_presence(has_staged: bool, has_unstaged: bool) -> Self {
        match (has_staged, has_unstaged) {
            (false, false) => Self::Clean,
            (true, false) => Self::StagedOnly,
            (false, true) => Self::UnstagedOnly,
            (true, true) => Self::Both,
        }
    }

    pub fn is_clean(self) -> bool {
        self == Self::Clean
    }
}

impl fmt::Display for WorktreeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainWorktree => write!(f, "main_worktree"),
            Self::PrWorktree => write!(f, "pr_worktree"),
        }
    }
}

impl fmt::Display for BranchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl fmt::Display for CommitRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Same => write!(f, "same"),
            Self::Ahead => write!(f, "ahead"),
            Self::Behind => write!(f, "behind"),
            Self::Ancestor => write!(f, "ancestor"),
            Self::Divergent => write!(f, "divergent"),
        }
    }
}

impl fmt::Display for WorkingTreeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => write!(f, "clean"),
            Self::StagedOnly => write!(f, "staged_only"),
            Self::UnstagedOnly => write!(f, "unstaged_only"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// A commit unique to the current branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitSummary {
    /// Short commit hash
    pub hash: String,
    /// First line of the message
    pub message: String,
    pub author: String,
    pub timestamp: DateTime<Utc>,
}

impl From<flow_git::CommitInfo> for CommitSummary {
    fn from(info: flow_git::CommitInfo) -> Self {
        Self {
            hash: info.hash,
            message: info.message,
            author: info.author,
            timestamp: info.timestamp,
        }
    }
}

/// Immutable snapshot of a checkout, collected fresh per invocation.
///
/// The working-tree status is not stored: it is always derived from
/// `staged_files` and `unstaged_files` by [`GitState::working_tree_status`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GitState {
    pub worktree_type: WorktreeType,
    pub branch_type: BranchType,

    /// Current branch, `None` when HEAD is detached
    pub current_branch: Option<String>,

    pub commit_relationship: CommitRelationship,

    /// Commits unique to the current branch relative to the base; always
    /// empty on the base branch itself
    pub local_commits: Vec<CommitSummary>,

    /// Repository-relative paths with staged changes
    pub staged_files: BTreeSet<String>,

    /// Repository-relative paths with unstaged changes, untracked included
    pub unstaged_files: BTreeSet<String>,

    /// Commits on HEAD missing from `base_ref`
    pub ahead: usize,

    /// Commits on `base_ref` missing from HEAD
    pub behind: usize,

    /// Ref the comparison ran against, e.g. `origin/main`
    pub base_ref: String,

    pub repo_root: PathBuf,
    pub repo_name: String,
}

impl GitState {
    /// Working-tree status derived from the staged and unstaged file sets.
    pub fn working_tree_status(&self) -> WorkingTreeStatus {
        WorkingTreeStatus::from_presence(
            !self.staged_files.is_empty(),
            !self.unstaged_files.is_empty(),
        )
    }

    pub fn is_detached(&self) -> bool {
        self.current_branch.is_none()
    }

    /// Current branch name for display; `HEAD` when detached.
    pub fn branch_label(&self) -> &str {
        self.current_branch.as_deref().unwrap_or("HEAD")
    }

    /// Number of distinct paths with any uncommitted change.
    pub fn changed_path_count(&self) -> usize {
        self.staged_files.union(&self.unstaged_files).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files(paths: &[&str]) -> BTreeSet<String> {
        paths.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn status_follows_file_sets() {
        let mut state = GitState::default();
        assert_eq!(state.working_tree_status(), WorkingTreeStatus::Clean);

        state.staged_files = files(&["a.rs"]);
        assert_eq!(state.working_tree_status(), WorkingTreeStatus::StagedOnly);

        state.unstaged_files = files(&["b.rs"]);
        assert_eq!(state.working_tree_status(), WorkingTreeStatus::Both);

        state.staged_files.clear();
        assert_eq!(state.working_tree_status(), WorkingTreeStatus::UnstagedOnly);
    }

    #[test]
    fn changed_path_count_deduplicates() {
        let state = GitState {
            staged_files: files(&["a.rs", "b.rs"]),
            unstaged_files: files(&["b.rs", "c.rs"]),
            ..GitState::default()
        };
        assert_eq!(state.changed_path_count(), 3);
    }

    #[test]
    fn enums_serialize_snake_case() {
        let json = serde_json::to_string(&WorktreeType::PrWorktree).unwrap();
        assert_eq!(json, "\"pr_worktree\"");
        assert_eq!(WorkingTreeStatus::UnstagedOnly.to_string(), "unstaged_only");
    }
}
