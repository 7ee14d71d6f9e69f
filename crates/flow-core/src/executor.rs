//! Action execution
//!
//! Runs the stage/stash/commit sequence for a [`StateAction`] through an
//! injected [`GitOperations`]. Creating the branch itself is the caller's
//! job, using [`get_branch_point`](crate::get_branch_point).

use std::path::Path;

use flow_git::{ALL_PATHS, GitOperations};
use serde::{Deserialize, Serialize};

use crate::action::{ActionKind, StateAction};

/// Outcome of [`execute_state_action`].
///
/// Expected git failures (nothing to commit, a rejected stash) are reported
/// here with `success == false` rather than returned as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResult {
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ActionResult {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

/// Commit message for `kind`, embedding the user's description.
pub fn commit_message(kind: ActionKind, description: &str) -> String {
    let description = description.trim();
    match kind {
        ActionKind::EmptyCommit => format!("chore: start {description}"),
        _ => description.to_string(),
    }
}

/// Stash message recorded before branching to `branch_name`.
pub fn stash_message(branch_name: &str) -> String {
    format!("flow: unstaged changes before {branch_name}")
}

/// Perform `action` in `cwd`.
///
/// Operations run strictly in sequence and stop at the first failure; nothing
/// is retried or rolled back.
pub fn execute_state_action(
    action: &StateAction,
    description: &str,
    branch_name: &str,
    ops: &dyn GitOperations,
    cwd: &Path,
) -> ActionResult {
    if action.action.commits() && description.trim().is_empty() {
        return ActionResult::failed("A description is required to write the commit message");
    }

    tracing::info!(
        action = %action.action,
        branch_from = %action.branch_from,
        stash_unstaged = action.stash_unstaged,
        branch = %branch_name,
        "Executing state action"
    );

    let result = run_steps(action, description, branch_name, ops, cwd);
    match result {
        Ok(message) => ActionResult::ok(message),
        Err(e) => {
            tracing::warn!(action = %action.action, error = %e, "State action failed");
            ActionResult::failed(e.to_string())
        }
    }
}

fn run_steps(
    action: &StateAction,
    description: &str,
    branch_name: &str,
    ops: &dyn GitOperations,
    cwd: &Path,
) -> flow_git::Result<String> {
    let message = commit_message(action.action, description);

    match action.action {
        ActionKind::EmptyCommit => {
            ops.commit(cwd, &message, true)?;
            Ok(format!("Created empty commit \"{message}\""))
        }
        ActionKind::CommitStaged => {
            ops.commit(cwd, &message, false)?;
            if action.stash_unstaged {
                ops.stash(cwd, &stash_message(branch_name), false)?;
                Ok(format!(
                    "Committed staged changes and stashed the rest as \"{}\"",
                    stash_message(branch_name)
                ))
            } else {
                Ok("Committed staged changes".to_string())
            }
        }
        ActionKind::CommitAll => {
            ops.stage(cwd, ALL_PATHS)?;
            ops.commit(cwd, &message, false)?;
            Ok("Committed all changes".to_string())
        }
        ActionKind::StashAndBranch => {
            if action.stash_unstaged {
                ops.stash(cwd, &stash_message(branch_name), true)?;
                Ok("Stashed unstaged changes; staged changes move with the branch".to_string())
            } else {
                Ok("Nothing stashed; all changes move with the branch".to_string())
            }
        }
        ActionKind::BranchOnly => Ok("No changes made".to_string()),
    }
}
