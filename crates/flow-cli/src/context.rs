//! Repository context resolution
//!
//! Finds the working tree containing the current directory and loads its
//! flow configuration, with command-line overrides applied on top.

use std::path::{Path, PathBuf};

use flow_core::{FlowConfig, GitState, Scenario, analyze_git_state, detect_scenario};
use flow_git::helpers::{open_repository, working_tree_root};

use crate::error::Result;

/// Everything a command needs to know about where it runs.
#[derive(Debug, Clone)]
pub struct FlowContext {
    pub cwd: PathBuf,
    pub repo_root: PathBuf,
    pub config: FlowConfig,
}

/// Flag values that take precedence over the configuration file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base: Option<String>,
    pub remote: Option<String>,
}

impl FlowContext {
    /// Resolve the context for `cwd`.
    pub fn resolve(cwd: &Path, overrides: &Overrides) -> Result<Self> {
        let repo = open_repository(cwd)?;
        let repo_root = working_tree_root(&repo)?;

        let mut config = FlowConfig::load(&repo_root)?;
        if let Some(base) = &overrides.base {
            config.base_branch = base.clone();
        }
        if let Some(remote) = &overrides.remote {
            config.remote = remote.clone();
        }
        tracing::debug!(
            root = %repo_root.display(),
            base = %config.base_branch,
            remote = %config.remote,
            "Resolved flow context"
        );

        Ok(Self {
            cwd: cwd.to_path_buf(),
            repo_root,
            config,
        })
    }

    pub fn base_branch(&self) -> &str {
        &self.config.base_branch
    }

    /// Collect the state and classify it.
    pub fn analyze(&self) -> Result<(GitState, Scenario)> {
        let state = analyze_git_state(&self.config.base_branch, &self.cwd, &self.config)?;
        let scenario = detect_scenario(&state)?;
        Ok((state, scenario))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flow_test_utils::repo::TestRepo;

    #[test]
    fn resolve_from_subdirectory_finds_root() {
        let repo = TestRepo::new();
        repo.write_file("src/lib.rs", "");

        let ctx = FlowContext::resolve(&repo.root().join("src"), &Overrides::default()).unwrap();

        assert_eq!(ctx.repo_root, repo.root());
        assert_eq!(ctx.base_branch(), "main");
    }

    #[test]
    fn flags_override_file() {
        let repo = TestRepo::new();
        repo.write_file(
            ".repository/flow.toml",
            "base_branch = \"develop\"\nremote = \"upstream\"\n",
        );
        let overrides = Overrides {
            base: Some("trunk".into()),
            remote: None,
        };

        let ctx = FlowContext::resolve(repo.root(), &overrides).unwrap();

        assert_eq!(ctx.config.base_branch, "trunk");
        assert_eq!(ctx.config.remote, "upstream");
    }
}
