//! Staged and unstaged path discovery.

use std::collections::BTreeSet;

use git2::{Repository, Status, StatusOptions};

use crate::Result;

const INDEX_CHANGES: Status = Status::INDEX_NEW
    .union(Status::INDEX_MODIFIED)
    .union(Status::INDEX_DELETED)
    .union(Status::INDEX_RENAMED)
    .union(Status::INDEX_TYPECHANGE);

const WORKTREE_CHANGES: Status = Status::WT_NEW
    .union(Status::WT_MODIFIED)
    .union(Status::WT_DELETED)
    .union(Status::WT_RENAMED)
    .union(Status::WT_TYPECHANGE)
    .union(Status::CONFLICTED);

/// Repository-relative paths split by where their change lives.
///
/// A path modified both in the index and afterwards in the working tree
/// appears in both sets. Untracked files count as unstaged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingTreeFiles {
    pub staged: BTreeSet<String>,
    pub unstaged: BTreeSet<String>,
}

/// Collect staged and unstaged paths for the repository's working tree.
///
/// Ignored files are skipped; untracked directories are expanded so each
/// untracked file is listed individually. A submodule whose checked-out
/// commit or contents differ from the recorded pointer is listed by its path.
pub fn working_tree_files(repo: &Repository) -> Result<WorkingTreeFiles> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .include_ignored(false)
        .exclude_submodules(false)
        .renames_head_to_index(true);

    let statuses = repo.statuses(Some(&mut opts))?;
    let mut files = WorkingTreeFiles::default();

    for entry in statuses.iter() {
        let status = entry.status();
        // Non UTF-8 names are kept, lossily, so a dirty tree never reads clean.
        let path = String::from_utf8_lossy(entry.path_bytes()).into_owned();

        if status.intersects(INDEX_CHANGES) {
            files.staged.insert(path.clone());
        }
        if status.intersects(WORKTREE_CHANGES) {
            files.unstaged.insert(path);
        }
    }

    Ok(files)
}
