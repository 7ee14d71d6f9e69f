//! Per-scenario action catalog
//!
//! Every choice that commits working-tree or index changes branches from
//! `HEAD`. Checking out `origin/<base>` with a dirty index silently resets
//! files that also changed upstream, so no scenario here offers it.

use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, StateAction};
use crate::scenario::Scenario;
use crate::state::GitState;

/// One menu entry.
///
/// Entries without an action are informational; acting on them is left to
/// the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub label: String,
    pub action: Option<StateAction>,
}

impl Choice {
    fn act(label: impl Into<String>, action: StateAction) -> Self {
        Self {
            label: label.into(),
            action: Some(action),
        }
    }

    fn info(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action: None,
        }
    }
}

/// The menu for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioContext {
    pub scenario: Scenario,
    /// One line describing the state
    pub summary: String,
    pub choices: Vec<Choice>,
}

impl ScenarioContext {
    /// Choices that carry an action, with their index in [`choices`](Self::choices).
    pub fn actionable(&self) -> impl Iterator<Item = (usize, &Choice)> {
        self.choices
            .iter()
            .enumerate()
            .filter(|(_, choice)| choice.action.is_some())
    }
}

/// List the legal choices for `scenario`.
///
/// Returns `None` only when no choice would carry an action. Output depends
/// on the inputs alone, in a fixed order.
pub fn get_scenario_context(
    scenario: Scenario,
    state: &GitState,
    base_branch: &str,
) -> Option<ScenarioContext> {
    let (summary, choices) = match scenario {
        Scenario::MainCleanSame => main_clean_same(state, base_branch),
        Scenario::MainStagedSame => main_staged_same(state, base_branch),
        Scenario::MainUnstagedSame => main_unstaged_same(state, base_branch),
        Scenario::MainBothSame => main_both_same(state, base_branch),
        Scenario::MainCleanAhead => main_clean_ahead(state, base_branch),
        Scenario::MainChangesAhead => main_changes_ahead(state, base_branch),
        Scenario::BranchSameAsMain => branch_same_as_main(state, base_branch),
        Scenario::BranchAncestor => branch_ancestor(state, base_branch),
        Scenario::BranchDivergent => branch_divergent(state),
        Scenario::BranchWithChanges => branch_with_changes(state),
        Scenario::DetachedHead => detached_head(state),
        Scenario::PrWorktree => pr_worktree(state),
    };

    if choices.iter().all(|choice| choice.action.is_none()) {
        tracing::warn!(%scenario, "No actionable choices");
        return None;
    }

    Some(ScenarioContext {
        scenario,
        summary,
        choices,
    })
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn behind_note(state: &GitState) -> String {
    if state.behind > 0 {
        format!(" ({} behind {})", plural(state.behind, "commit"), state.base_ref)
    } else {
        String::new()
    }
}

fn main_clean_same(state: &GitState, base: &str) -> (String, Vec<Choice>) {
    let summary = format!("On {base} with a clean working tree{}", behind_note(state));
    let choices = vec![Choice::act(
        "Start a new branch with an empty commit",
        StateAction::from_head(ActionKind::EmptyCommit),
    )];
    (summary, choices)
}

fn main_staged_same(state: &GitState, base: &str) -> (String, Vec<Choice>) {
    let staged = plural(state.staged_files.len(), "staged file");
    let summary = format!("On {base} with {staged}{}", behind_note(state));
    let choices = vec![
        Choice::act(
            format!("Commit {staged} to a new branch"),
            StateAction::from_head(ActionKind::CommitStaged),
        ),
        Choice::act(
            "Move staged changes to a new branch without committing",
            StateAction::from_head(ActionKind::BranchOnly),
        ),
    ];
    (summary, choices)
}

fn main_unstaged_same(state: &GitState, base: &str) -> (String, Vec<Choice>) {
    let changed = plural(state.unstaged_files.len(), "changed file");
    let summary = format!("On {base} with {changed}{}", behind_note(state));
    let choices = vec![
        Choice::act(
            format!("Commit all {changed} to a new branch"),
            StateAction::from_head(ActionKind::CommitAll),
        ),
        Choice::act(
            "Stash changes and start a clean new branch",
            StateAction::from_head(ActionKind::StashAndBranch).stashing_unstaged(),
        ),
        Choice::act(
            "Move changes to a new branch without committing",
            StateAction::from_head(ActionKind::BranchOnly),
        ),
    ];
    (summary, choices)
}

fn main_both_same(state: &GitState, base: &str) -> (String, Vec<Choice>) {
    let staged = plural(state.staged_files.len(), "staged file");
    let unstaged = plural(state.unstaged_files.len(), "unstaged file");
    let summary = format!("On {base} with {staged} and {unstaged}{}", behind_note(state));
    let choices = vec![
        Choice::act(
            format!("Commit {staged} to a new branch, keep {unstaged} in the working tree"),
            StateAction::from_head(ActionKind::CommitStaged),
        ),
        Choice::act(
            format!("Commit {staged} to a new branch, stash {unstaged}"),
            StateAction::from_head(ActionKind::CommitStaged).stashing_unstaged(),
        ),
        Choice::act(
            format!("Commit all {} changed files to a new branch", state.changed_path_count()),
            StateAction::from_head(ActionKind::CommitAll),
        ),
        Choice::act(
            "Stash unstaged changes and move staged ones to a new branch",
            StateAction::from_head(ActionKind::StashAndBranch).stashing_unstaged(),
        ),
    ];
    (summary, choices)
}

fn main_clean_ahead(state: &GitState, base: &str) -> (String, Vec<Choice>) {
    let commits = plural(state.ahead, "local commit");
    let summary = format!("{base} has {commits} not on {}", state.base_ref);
    let choices = vec![
        Choice::act(
            format!("Move {commits} to a new branch"),
            StateAction::from_head(ActionKind::BranchOnly),
        ),
        Choice::act(
            format!("Add an empty commit on top of {commits} and branch"),
            StateAction::from_head(ActionKind::EmptyCommit),
        ),
    ];
    (summary, choices)
}

fn main_changes_ahead(state: &GitState, base: &str) -> (String, Vec<Choice>) {
    let commits = plural(state.ahead, "local commit");
    let changed = plural(state.changed_path_count(), "changed file");
    let summary = format!("{base} has {commits} not on {} and {changed}", state.base_ref);

    let mut choices = vec![Choice::act(
        format!("Commit all {changed} on top of {commits}, then branch"),
        StateAction::from_head(ActionKind::CommitAll),
    )];
    if !state.staged_files.is_empty() {
        let staged = plural(state.staged_files.len(), "staged file");
        let mut action = StateAction::from_head(ActionKind::CommitStaged);
        if !state.unstaged_files.is_empty() {
            action = action.stashing_unstaged();
        }
        choices.push(Choice::act(
            format!("Commit {staged} on top of {commits}, then branch"),
            action,
        ));
    }
    choices.push(Choice::act(
        format!("Move {commits} and uncommitted changes to a new branch"),
        StateAction::from_head(ActionKind::BranchOnly),
    ));
    (summary, choices)
}

fn branch_same_as_main(state: &GitState, base: &str) -> (String, Vec<Choice>) {
    let branch = state.branch_label();
    let summary = format!("'{branch}' points at the same commit as {}", state.base_ref);
    let choices = vec![
        Choice::act(
            format!("Start a PR branch from '{branch}' with an empty commit"),
            StateAction::from_head(ActionKind::EmptyCommit),
        ),
        Choice::act(
            format!("Start a PR branch from '{branch}' without committing"),
            StateAction::from_head(ActionKind::BranchOnly),
        ),
        Choice::info(format!("Switch back to {base}")),
    ];
    (summary, choices)
}

fn branch_ancestor(state: &GitState, base: &str) -> (String, Vec<Choice>) {
    let branch = state.branch_label();
    let summary = format!(
        "'{branch}' is already merged into {} ({} behind)",
        state.base_ref,
        plural(state.behind, "commit")
    );
    let choices = vec![
        Choice::act(
            format!("Start a new PR branch from '{branch}' with an empty commit"),
            StateAction::from_head(ActionKind::EmptyCommit),
        ),
        Choice::info(format!("Delete '{branch}' and update {base}")),
    ];
    (summary, choices)
}

fn branch_divergent(state: &GitState) -> (String, Vec<Choice>) {
    let branch = state.branch_label();
    let commits = plural(state.local_commits.len(), "commit");
    let summary = format!("'{branch}' has {commits} not on {}", state.base_ref);
    let choices = vec![
        Choice::act(
            format!("Create a PR branch from '{branch}' with its {commits}"),
            StateAction::from_head(ActionKind::BranchOnly),
        ),
        Choice::act(
            format!("Add an empty commit on '{branch}' and create a PR branch"),
            StateAction::from_head(ActionKind::EmptyCommit),
        ),
    ];
    (summary, choices)
}

fn branch_with_changes(state: &GitState) -> (String, Vec<Choice>) {
    let branch = state.branch_label();
    let changed = plural(state.changed_path_count(), "changed file");
    let summary = format!("'{branch}' has {changed}");
    let mut choices = dirty_commit_choices(state, &format!("to a new branch from '{branch}'"));
    if !state.unstaged_files.is_empty() {
        choices.push(Choice::act(
            "Stash unstaged changes and branch",
            StateAction::from_head(ActionKind::StashAndBranch).stashing_unstaged(),
        ));
    }
    choices.push(Choice::act(
        "Move changes to a new branch without committing",
        StateAction::from_head(ActionKind::BranchOnly),
    ));
    (summary, choices)
}

fn detached_head(state: &GitState) -> (String, Vec<Choice>) {
    let summary = if state.working_tree_status().is_clean() {
        "HEAD is detached".to_string()
    } else {
        format!(
            "HEAD is detached with {}",
            plural(state.changed_path_count(), "changed file")
        )
    };
    let mut choices = vec![Choice::act(
        "Create a branch at the current commit",
        StateAction::from_head(ActionKind::BranchOnly),
    )];
    if !state.working_tree_status().is_clean() {
        choices.extend(dirty_commit_choices(state, "and create a branch"));
    }
    (summary, choices)
}

fn pr_worktree(state: &GitState) -> (String, Vec<Choice>) {
    let branch = state.branch_label();
    let summary = if state.working_tree_status().is_clean() {
        format!("PR worktree on '{branch}', clean")
    } else {
        format!(
            "PR worktree on '{branch}' with {}",
            plural(state.changed_path_count(), "changed file")
        )
    };
    let choices = if state.working_tree_status().is_clean() {
        vec![
            Choice::act(
                format!("Add an empty commit to '{branch}'"),
                StateAction::from_head(ActionKind::EmptyCommit),
            ),
            Choice::act(
                format!("Keep '{branch}' as is"),
                StateAction::from_head(ActionKind::BranchOnly),
            ),
        ]
    } else {
        dirty_commit_choices(state, &format!("to '{branch}'"))
    };
    (summary, choices)
}

/// Commit-all, plus commit-staged when something is staged.
fn dirty_commit_choices(state: &GitState, target: &str) -> Vec<Choice> {
    let mut choices = vec![Choice::act(
        format!(
            "Commit all {} {target}",
            plural(state.changed_path_count(), "changed file")
        ),
        StateAction::from_head(ActionKind::CommitAll),
    )];
    if !state.staged_files.is_empty() {
        choices.push(Choice::act(
            format!(
                "Commit {} {target}",
                plural(state.staged_files.len(), "staged file")
            ),
            StateAction::from_head(ActionKind::CommitStaged),
        ));
    }
    choices
}
