//! Error types for flow-core

use std::path::PathBuf;

use crate::state::{BranchType, CommitRelationship, WorkingTreeStatus};

/// Result type for flow-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in flow-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory is not inside a git working tree
    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    /// The repository exists but HEAD has no commit yet
    #[error("Repository at {path} has no commits yet; make an initial commit first")]
    NoCommits { path: PathBuf },

    /// Neither `<remote>/<base>` nor the local base branch exists
    #[error("Base branch '{name}' not found locally or on the remote")]
    BaseBranchNotFound { name: String },

    /// A state the decision table cannot place
    #[error(
        "Cannot classify repository state: branch={branch_type}, relationship={relationship}, \
         local_commits={local_commits}, working_tree={status}"
    )]
    Unclassified {
        branch_type: BranchType,
        relationship: CommitRelationship,
        local_commits: usize,
        status: WorkingTreeStatus,
    },

    /// An action name that does not correspond to any `ActionKind`
    #[error("Unknown action: {name}")]
    UnknownAction { name: String },

    /// A scenario name that does not correspond to any `Scenario`
    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },

    /// A branch origin name that does not correspond to any `BranchFrom`
    #[error("Unknown branch origin: {name}")]
    UnknownBranchFrom { name: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// Configuration file extension not recognized
    #[error("Unsupported config format: {extension}")]
    UnsupportedConfigFormat { extension: String },

    /// Main-worktree pattern could not be compiled
    #[error("Invalid main worktree pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    // Transparent wrappers for underlying crate errors
    /// Git error from flow-git
    #[error(transparent)]
    Git(flow_git::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<flow_git::Error> for Error {
    /// Environment conditions get their own variants so callers can print a
    /// targeted message instead of a generic git failure.
    fn from(error: flow_git::Error) -> Self {
        match error {
            flow_git::Error::NotARepository { path } => Self::NotARepository { path },
            flow_git::Error::NoCommits { path } => Self::NoCommits { path },
            flow_git::Error::BranchNotFound { name } => Self::BaseBranchNotFound { name },
            other => Self::Git(other),
        }
    }
}

impl Error {
    /// Whether this is an environment problem the user can fix, as opposed to
    /// a programming defect.
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            Self::NotARepository { .. } | Self::NoCommits { .. } | Self::BaseBranchNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn git_environment_errors_are_lifted() {
        let err: Error = flow_git::Error::NoCommits {
            path: PathBuf::from("/tmp/repo"),
        }
        .into();
        assert!(matches!(err, Error::NoCommits { .. }));
        assert!(err.is_environment());

        let err: Error = flow_git::Error::BranchNotFound {
            name: "develop".into(),
        }
        .into();
        assert!(err.to_string().contains("develop"));
    }

    #[test]
    fn other_git_errors_stay_wrapped() {
        let err: Error = flow_git::Error::CommandFailed {
            command: "git commit".into(),
            message: "nothing to commit".into(),
        }
        .into();
        assert!(matches!(err, Error::Git(_)));
        assert!(!err.is_environment());
    }
}
