//! Git command runner and repository fixtures.

use std::fs;
use std::path::Path;
use std::process::Command;

/// Run `git` with `args` in `path` and return stdout without trailing whitespace.
///
/// # Panics
/// Panics if git cannot be spawned or exits unsuccessfully.
pub fn run_git(path: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .output()
        .unwrap_or_else(|e| panic!("run_git: failed to run `git {args:?}`: {e}"));
    if !output.status.success() {
        panic!(
            "run_git: `git {args:?}` failed in {}:\n{}",
            path.display(),
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// Initialises a real git repository with an initial commit using the `git` CLI.
///
/// Specifically:
/// - Runs `git init`
/// - Configures `user.email`, `user.name`, and `commit.gpgsign = false`
/// - Creates `README.md` and makes an initial commit
/// - Renames the default branch to `main`
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) {
    fs::create_dir_all(path)
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to create dir: {e}"));

    run_git(path, &["init"]);
    configure_identity(path);

    fs::write(path.join("README.md"), "# Test")
        .unwrap_or_else(|e| panic!("real_git_repo_with_commit: failed to write README.md: {e}"));

    run_git(path, &["add", "."]);
    run_git(path, &["commit", "-m", "Initial commit"]);
    run_git(path, &["branch", "-M", "main"]);
}

/// Initialises an empty repository: valid git database, no commits.
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo_without_commits(path: &Path) -> git2::Repository {
    git2::Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo_without_commits: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Configure a local identity so commits work on machines without global config.
pub fn configure_identity(path: &Path) {
    run_git(path, &["config", "user.email", "test@test.com"]);
    run_git(path, &["config", "user.name", "Test User"]);
    run_git(path, &["config", "commit.gpgsign", "false"]);
}
