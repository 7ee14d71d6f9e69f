//! [`TestRepo`] builder for branch-state scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::git::{real_git_repo_with_commit, run_git};

/// A temporary git checkout on `main`, optionally wired to a bare `origin`.
///
/// # Example
///
/// ```rust,no_run
/// use flow_test_utils::repo::TestRepo;
///
/// let repo = TestRepo::with_origin();
/// repo.commit_file("a.txt", "a", "Add a");
/// repo.git(&["push", "origin", "main"]);
/// repo.git(&["reset", "--hard", "HEAD~1"]);
/// // local main is now one commit behind origin/main
/// ```
pub struct TestRepo {
    temp_dir: TempDir,
    root: PathBuf,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    /// A checkout on `main` with a single commit and no remote.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("work");
        real_git_repo_with_commit(&root);
        Self { temp_dir, root }
    }

    /// A checkout on `main` whose `origin` is a bare repository holding the
    /// same single commit, with `main` tracking `origin/main`.
    pub fn with_origin() -> Self {
        let repo = Self::new();
        let origin = repo.origin_path();
        fs::create_dir_all(&origin).unwrap();
        run_git(&origin, &["init", "--bare"]);
        let origin_str = origin.to_string_lossy().into_owned();
        repo.git(&["remote", "add", "origin", &origin_str]);
        repo.git(&["push", "--set-upstream", "origin", "main"]);
        repo
    }

    /// Root of the working tree.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the bare `origin` repository (exists only for [`with_origin`](Self::with_origin)).
    pub fn origin_path(&self) -> PathBuf {
        self.temp_dir.path().join("origin.git")
    }

    /// Directory next to the working tree, for linked worktrees and the like.
    pub fn sibling(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join(name)
    }

    /// Run git in the working tree and return trimmed stdout.
    pub fn git(&self, args: &[&str]) -> String {
        run_git(&self.root, args)
    }

    /// Write `content` to `path` (relative to the root), creating parent directories.
    pub fn write_file(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    /// Write and stage `path`.
    pub fn stage_file(&self, path: &str, content: &str) {
        self.write_file(path, content);
        self.git(&["add", "--", path]);
    }

    /// Write, stage and commit `path`.
    pub fn commit_file(&self, path: &str, content: &str, message: &str) {
        self.stage_file(path, content);
        self.git(&["commit", "-m", message]);
    }

    /// Make local `main` one commit behind `origin/main`.
    ///
    /// Requires [`with_origin`](Self::with_origin).
    pub fn fall_behind_origin(&self) {
        self.commit_file("upstream.txt", "upstream change", "Upstream change");
        self.git(&["push", "origin", "main"]);
        self.git(&["reset", "--hard", "HEAD~1"]);
    }

    /// Paths recorded in the tree of `revision`.
    pub fn tree_paths(&self, revision: &str) -> Vec<String> {
        self.git(&["ls-tree", "-r", "--name-only", revision])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Short status lines (`git status --porcelain`).
    pub fn porcelain_status(&self) -> Vec<String> {
        self.git(&["status", "--porcelain"])
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Assert that the file at `path` (relative to root) contains `content`.
    ///
    /// # Panics
    /// Panics if the file cannot be read or does not contain `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let full_path = self.root.join(path);
        let file_content = fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()));
        assert!(
            file_content.contains(content),
            "File {} does not contain expected content.\nExpected: {}\nActual: {}",
            full_path.display(),
            content,
            file_content
        );
    }
}
