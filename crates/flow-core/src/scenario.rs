//! Scenario classification
//!
//! A pure decision table from [`GitState`] to one of twelve [`Scenario`]s.
//! Detached HEAD wins over everything, then a PR worktree, then the
//! branch-specific tables.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::state::{BranchType, CommitRelationship, GitState, WorkingTreeStatus, WorktreeType};
use crate::{Error, Result};

/// Named classification of a repository state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    MainCleanSame,
    MainStagedSame,
    MainUnstagedSame,
    MainBothSame,
    MainCleanAhead,
    MainChangesAhead,
    BranchSameAsMain,
    BranchAncestor,
    BranchDivergent,
    BranchWithChanges,
    DetachedHead,
    PrWorktree,
}

impl Scenario {
    /// Every scenario, in declaration order.
    pub const ALL: [Scenario; 12] = [
        Scenario::MainCleanSame,
        Scenario::MainStagedSame,
        Scenario::MainUnstagedSame,
        Scenario::MainBothSame,
        Scenario::MainCleanAhead,
        Scenario::MainChangesAhead,
        Scenario::BranchSameAsMain,
        Scenario::BranchAncestor,
        Scenario::BranchDivergent,
        Scenario::BranchWithChanges,
        Scenario::DetachedHead,
        Scenario::PrWorktree,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Scenario::MainCleanSame => "main_clean_same",
            Scenario::MainStagedSame => "main_staged_same",
            Scenario::MainUnstagedSame => "main_unstaged_same",
            Scenario::MainBothSame => "main_both_same",
            Scenario::MainCleanAhead => "main_clean_ahead",
            Scenario::MainChangesAhead => "main_changes_ahead",
            Scenario::BranchSameAsMain => "branch_same_as_main",
            Scenario::BranchAncestor => "branch_ancestor",
            Scenario::BranchDivergent => "branch_divergent",
            Scenario::BranchWithChanges => "branch_with_changes",
            Scenario::DetachedHead => "detached_head",
            Scenario::PrWorktree => "pr_worktree",
        }
    }

    /// Whether the scenario was reached on the base branch itself.
    pub fn is_main(self) -> bool {
        matches!(
            self,
            Scenario::MainCleanSame
                | Scenario::MainStagedSame
                | Scenario::MainUnstagedSame
                | Scenario::MainBothSame
                | Scenario::MainCleanAhead
                | Scenario::MainChangesAhead
        )
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| Error::UnknownScenario {
                name: s.to_string(),
            })
    }
}

/// Classify a repository state.
///
/// Deterministic and free of I/O. States that cannot arise from a real
/// repository (for example a clean feature branch reported `ahead` with no
/// local commits) are rejected with [`Error::Unclassified`] rather than
/// mapped to a guess.
pub fn detect_scenario(state: &GitState) -> Result<Scenario> {
    if state.is_detached() {
        return Ok(Scenario::DetachedHead);
    }

    if state.worktree_type == WorktreeType::PrWorktree {
        return Ok(Scenario::PrWorktree);
    }

    let status = state.working_tree_status();
    match state.branch_type {
        BranchType::Main => Ok(classify_main(state.commit_relationship, status)),
        BranchType::Other => classify_branch(state, status),
    }
}

/// Local main lagging its remote is not itself blocking, so `behind` and
/// `ancestor` read as `same`.
fn classify_main(relationship: CommitRelationship, status: WorkingTreeStatus) -> Scenario {
    use CommitRelationship::*;
    use WorkingTreeStatus::*;

    match (relationship, status) {
        (Same | Behind | Ancestor, Clean) => Scenario::MainCleanSame,
        (Same | Behind | Ancestor, StagedOnly) => Scenario::MainStagedSame,
        (Same | Behind | Ancestor, UnstagedOnly) => Scenario::MainUnstagedSame,
        (Same | Behind | Ancestor, Both) => Scenario::MainBothSame,
        (Ahead | Divergent, Clean) => Scenario::MainCleanAhead,
        (Ahead | Divergent, StagedOnly | UnstagedOnly | Both) => Scenario::MainChangesAhead,
    }
}

fn classify_branch(state: &GitState, status: WorkingTreeStatus) -> Result<Scenario> {
    use CommitRelationship::*;

    if !status.is_clean() {
        return Ok(Scenario::BranchWithChanges);
    }

    let has_local_commits = !state.local_commits.is_empty();
    match (has_local_commits, state.commit_relationship) {
        (true, Ahead | Divergent) => Ok(Scenario::BranchDivergent),
        (false, Same) => Ok(Scenario::BranchSameAsMain),
        (false, Behind | Ancestor) => Ok(Scenario::BranchAncestor),
        (true, Same | Behind | Ancestor) | (false, Ahead | Divergent) => {
            tracing::warn!(
                relationship = %state.commit_relationship,
                local_commits = state.local_commits.len(),
                "Repository state falls outside the decision table"
            );
            Err(Error::Unclassified {
                branch_type: state.branch_type,
                relationship: state.commit_relationship,
                local_commits: state.local_commits.len(),
                status,
            })
        }
    }
}
