//! Git layer for worktree-flow
//!
//! Read-only inspection of a checkout through `git2`, plus the small set of
//! mutating operations the action executor is allowed to perform, expressed
//! as the [`GitOperations`] capability trait.

pub mod cli_ops;
pub mod commits;
pub mod error;
pub mod helpers;
pub mod inspect;
pub mod naming;
pub mod ops;
pub mod status;

pub use cli_ops::CliGitOperations;
pub use commits::CommitInfo;
pub use error::{Error, Result};
pub use inspect::{RepositoryFacts, inspect_repository};
pub use naming::{branch_name_from_description, validate_branch_name};
pub use ops::{ALL_PATHS, GitOperations};
pub use status::WorkingTreeFiles;
