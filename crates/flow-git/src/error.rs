//! Error types for flow-git

use std::path::PathBuf;

/// Result type for flow-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in flow-git operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a git repository: {path}")]
    NotARepository { path: PathBuf },

    #[error("Repository at {path} has no commits yet")]
    NoCommits { path: PathBuf },

    #[error("Branch '{name}' not found")]
    BranchNotFound { name: String },

    #[error("Invalid branch name: {name}")]
    InvalidBranchName { name: String },

    #[error("`{command}` failed: {message}")]
    CommandFailed { command: String, message: String },
}
