//! Shared git2 helper functions for repository inspection
//!
//! These functions encapsulate the git2 lookups the inspector combines into
//! a single [`RepositoryFacts`](crate::RepositoryFacts) snapshot.

use std::path::{Path, PathBuf};

use git2::{ErrorCode, Oid, Repository};

use crate::{Error, Result};

/// Open the repository containing `cwd`.
///
/// Walks up from `cwd` the way `git` does. A directory outside any repository,
/// or a bare repository without a working tree, yields
/// [`Error::NotARepository`].
pub fn open_repository(cwd: &Path) -> Result<Repository> {
    let repo = Repository::discover(cwd).map_err(|e| match e.code() {
        ErrorCode::NotFound => Error::NotARepository {
            path: cwd.to_path_buf(),
        },
        _ => Error::Git(e),
    })?;

    if repo.is_bare() {
        return Err(Error::NotARepository {
            path: cwd.to_path_buf(),
        });
    }

    Ok(repo)
}

/// Root of the working tree the repository handle was opened for.
pub fn working_tree_root(repo: &Repository) -> Result<PathBuf> {
    let workdir = repo.workdir().ok_or_else(|| Error::NotARepository {
        path: repo.path().to_path_buf(),
    })?;
    Ok(strip_trailing_separator(workdir))
}

/// Get the current branch name from a repository.
///
/// Returns the branch name if HEAD points to a branch, or `None` if HEAD is
/// detached. A repository whose HEAD is unborn yields [`Error::NoCommits`].
pub fn get_current_branch(repo: &Repository) -> Result<Option<String>> {
    let head = match repo.head() {
        Ok(head) => head,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Err(Error::NoCommits {
                path: repo.workdir().unwrap_or(repo.path()).to_path_buf(),
            });
        }
        Err(e) => return Err(Error::Git(e)),
    };

    if head.is_branch() {
        Ok(Some(head.shorthand().unwrap_or("HEAD").to_string()))
    } else {
        Ok(None)
    }
}

/// Commit id HEAD currently resolves to.
pub fn head_commit_id(repo: &Repository) -> Result<Oid> {
    let head = repo.head()?;
    Ok(head.peel_to_commit()?.id())
}

/// Resolve the tip the current branch should be compared against.
///
/// Prefers the remote-tracking branch `refs/remotes/<remote>/<base>` and falls
/// back to the local `refs/heads/<base>`. Returns the short ref name that was
/// used together with its commit id, or `None` when neither exists.
pub fn resolve_base_tip(
    repo: &Repository,
    remote: &str,
    base_branch: &str,
) -> Result<Option<(String, Oid)>> {
    let candidates = [
        (
            format!("refs/remotes/{remote}/{base_branch}"),
            format!("{remote}/{base_branch}"),
        ),
        (format!("refs/heads/{base_branch}"), base_branch.to_string()),
    ];

    for (full, short) in candidates {
        match repo.find_reference(&full) {
            Ok(reference) => {
                let commit = reference.peel_to_commit()?;
                return Ok(Some((short, commit.id())));
            }
            Err(e) if e.code() == ErrorCode::NotFound => continue,
            Err(e) => return Err(Error::Git(e)),
        }
    }

    tracing::debug!(base = %base_branch, remote = %remote, "No base branch tip found");
    Ok(None)
}

/// Count commits unique to `local` and to `upstream` respectively.
pub fn ahead_behind(repo: &Repository, local: Oid, upstream: Oid) -> Result<(usize, usize)> {
    if local == upstream {
        return Ok((0, 0));
    }
    Ok(repo.graph_ahead_behind(local, upstream)?)
}

/// Whether the handle was opened from a linked worktree (`git worktree add`).
pub fn is_linked_worktree(repo: &Repository) -> bool {
    repo.is_worktree()
}

/// Name of the repository, taken from the directory holding the shared git
/// database so that every linked worktree reports the same name.
pub fn repository_name(repo: &Repository) -> Option<String> {
    let common = repo.commondir();
    let root = if common.file_name().is_some_and(|name| name == ".git") {
        common.parent()?
    } else {
        repo.workdir()?
    };
    root.file_name()
        .map(|name| name.to_string_lossy().into_owned())
}

/// Strip the trailing separator git2 leaves on working-tree paths.
fn strip_trailing_separator(path: &Path) -> PathBuf {
    path.components().collect()
}
