//! Commit history unique to a branch.

use chrono::{DateTime, TimeZone, Utc};
use git2::{Oid, Repository};

use crate::Result;

/// Information about a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Short commit hash (7 characters)
    pub hash: String,

    /// First line of the commit message
    pub message: String,

    /// Commit author name
    pub author: String,

    /// Commit timestamp
    pub timestamp: DateTime<Utc>,
}

/// List commits reachable from `tip` but not from `hide`.
///
/// Performs a topologically sorted revwalk, newest first, and stops after
/// `max_count` entries.
pub fn list_unique_commits(
    repo: &Repository,
    tip: Oid,
    hide: Option<Oid>,
    max_count: usize,
) -> Result<Vec<CommitInfo>> {
    let mut revwalk = repo.revwalk()?;
    revwalk.push(tip)?;
    if let Some(hide) = hide {
        revwalk.hide(hide)?;
    }
    revwalk.set_sorting(git2::Sort::TOPOLOGICAL | git2::Sort::TIME)?;

    let mut commits = Vec::new();

    for oid_result in revwalk.take(max_count) {
        let oid = oid_result?;
        let commit = repo.find_commit(oid)?;

        let timestamp = commit.time();
        let dt: DateTime<Utc> = Utc
            .timestamp_opt(timestamp.seconds(), 0)
            .single()
            .unwrap_or_default();

        let message = commit.summary().unwrap_or("").to_string();

        let author = commit.author();
        let author_name = author.name().unwrap_or("Unknown").to_string();

        commits.push(CommitInfo {
            hash: oid.to_string()[..7].to_string(),
            message,
            author: author_name,
            timestamp: dt,
        });
    }

    Ok(commits)
}
