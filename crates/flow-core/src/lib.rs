//! Branch-state engine for worktree-flow
//!
//! Answers "what state is this checkout in, and what is the safe next
//! action?" in five steps:
//!
//! - [`analyze_git_state`] collects a read-only [`GitState`] snapshot
//! - [`detect_scenario`] classifies it into one of twelve [`Scenario`]s
//! - [`get_scenario_context`] lists the [`Choice`]s legal in that scenario
//! - [`execute_state_action`] performs the chosen [`StateAction`] through an
//!   injected [`GitOperations`](flow_git::GitOperations)
//! - [`get_branch_point`] names the revision the caller branches from
//!
//! # Architecture
//!
//! ```text
//!                    flow-cli
//!                        |
//!                    flow-core
//!                        |
//!                    flow-git
//! ```
//!
//! # Example
//!
//! ```no_run
//! use flow_core::{FlowConfig, analyze_git_state, detect_scenario, get_scenario_context};
//!
//! fn example() -> flow_core::Result<()> {
//!     let config = FlowConfig::default();
//!     let cwd = std::env::current_dir()?;
//!     let state = analyze_git_state(&config.base_branch, &cwd, &config)?;
//!     let scenario = detect_scenario(&state)?;
//!     if let Some(context) = get_scenario_context(scenario, &state, &config.base_branch) {
//!         for choice in &context.choices {
//!             println!("{}", choice.label);
//!         }
//!     }
//!     Ok(())
//! }
//! ```

pub mod action;
pub mod branch_point;
pub mod catalog;
pub mod collector;
pub mod config;
pub mod error;
pub mod executor;
pub mod scenario;
pub mod state;
pub mod worktree;

pub use action::{ActionKind, BranchFrom, StateAction};
pub use branch_point::{HEAD_REVISION, get_branch_point, get_branch_point_on_remote};
pub use catalog::{Choice, ScenarioContext, get_scenario_context};
pub use collector::{analyze_git_state, derive_git_state};
pub use config::{ConfigStore, FlowConfig};
pub use error::{Error, Result};
pub use executor::{ActionResult, execute_state_action};
pub use scenario::{Scenario, detect_scenario};
pub use state::{
    BranchType, CommitRelationship, CommitSummary, GitState, WorkingTreeStatus, WorktreeType,
};
pub use worktree::WorktreePattern;
