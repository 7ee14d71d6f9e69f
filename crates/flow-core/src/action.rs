//! Action descriptors produced by the catalog and consumed by the executor

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// What the executor does to the working tree before the caller branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// Commit nothing, but record a commit so the branch has something to open a PR with
    EmptyCommit,
    /// Commit what is already in the index
    CommitStaged,
    /// Stage every change, untracked files included, then commit
    CommitAll,
    /// Park unstaged work in the stash so only staged content moves
    StashAndBranch,
    /// Leave everything as is
    BranchOnly,
}

impl ActionKind {
    pub const ALL: [ActionKind; 5] = [
        ActionKind::EmptyCommit,
        ActionKind::CommitStaged,
        ActionKind::CommitAll,
        ActionKind::StashAndBranch,
        ActionKind::BranchOnly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::EmptyCommit => "empty_commit",
            ActionKind::CommitStaged => "commit_staged",
            ActionKind::CommitAll => "commit_all",
            ActionKind::StashAndBranch => "stash_and_branch",
            ActionKind::BranchOnly => "branch_only",
        }
    }

    /// Whether the action writes a commit.
    pub fn commits(self) -> bool {
        matches!(
            self,
            ActionKind::EmptyCommit | ActionKind::CommitStaged | ActionKind::CommitAll
        )
    }

    /// Whether the action carries working-tree or index changes into history
    /// before the branch is created.
    pub fn commits_changes(self) -> bool {
        matches!(self, ActionKind::CommitStaged | ActionKind::CommitAll)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ActionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownAction {
                name: s.to_string(),
            })
    }
}

/// Where a new branch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchFrom {
    /// The current commit, keeping local commits and anything just committed
    Head,
    /// The remote-tracking base branch tip
    ///
    /// Only safe when nothing local has been modified: checking out a
    /// different commit resets files that changed upstream.
    OriginMain,
}

impl BranchFrom {
    pub fn as_str(self) -> &'static str {
        match self {
            BranchFrom::Head => "head",
            BranchFrom::OriginMain => "origin_main",
        }
    }
}

impl fmt::Display for BranchFrom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BranchFrom {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "head" => Ok(BranchFrom::Head),
            "origin_main" => Ok(BranchFrom::OriginMain),
            _ => Err(Error::UnknownBranchFrom {
                name: s.to_string(),
            }),
        }
    }
}

/// One executable decision: what to do, and where the branch starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StateAction {
    pub action: ActionKind,
    pub branch_from: BranchFrom,
    /// Stash unstaged changes instead of carrying them to the new branch
    pub stash_unstaged: bool,
}

impl StateAction {
    /// An action that branches from HEAD without stashing.
    pub fn from_head(action: ActionKind) -> Self {
        Self {
            action,
            branch_from: BranchFrom::Head,
            stash_unstaged: false,
        }
    }

    /// Same action, stashing unstaged changes.
    pub fn stashing_unstaged(mut self) -> Self {
        self.stash_unstaged = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_action_is_a_contract_violation() {
        let err = "rebase_onto_main".parse::<ActionKind>().unwrap_err();
        assert!(matches!(err, Error::UnknownAction { ref name } if name == "rebase_onto_main"));
    }

    #[test]
    fn parses_snake_case_names() {
        assert_eq!("commit_all".parse::<ActionKind>().unwrap(), ActionKind::CommitAll);
        assert_eq!("origin_main".parse::<BranchFrom>().unwrap(), BranchFrom::OriginMain);
        assert!("origin/main".parse::<BranchFrom>().is_err());
    }

    #[test]
    fn serializes_like_display() {
        let action = StateAction::from_head(ActionKind::StashAndBranch).stashing_unstaged();
        let json = serde_json::to_value(action).unwrap();
        assert_eq!(json["action"], "stash_and_branch");
        assert_eq!(json["branch_from"], "head");
        assert_eq!(json["stash_unstaged"], true);
    }

    #[test]
    fn only_commit_kinds_commit_changes() {
        let changing: Vec<_> = ActionKind::ALL
            .into_iter()
            .filter(|kind| kind.commits_changes())
            .collect();
        assert_eq!(changing, vec![ActionKind::CommitStaged, ActionKind::CommitAll]);
        assert!(ActionKind::EmptyCommit.commits());
        assert!(!ActionKind::BranchOnly.commits());
    }
}
