//! Configuration loading
//!
//! `FlowConfig` lives at `<repo root>/.repository/flow.{toml,json,yaml}`.
//! Every field has a default, so a missing file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Error, Result};

/// Directory holding repository-level configuration.
pub const CONFIG_DIR: &str = ".repository";

/// Candidate file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &["flow.toml", "flow.json", "flow.yaml", "flow.yml"];

/// Settings for state analysis and action execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Trunk branch new work is compared against and PRs target
    pub base_branch: String,

    /// Remote holding the base branch
    pub remote: String,

    /// Where the primary checkout lives, e.g. `~/src/{repo}`
    ///
    /// `*` matches within one path component and `**` across components.
    /// When unset, linked worktrees are PR worktrees.
    pub main_worktree_pattern: Option<String>,

    /// Prefix for branch names derived from descriptions, e.g. `feat/`
    pub branch_prefix: Option<String>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            base_branch: "main".to_string(),
            remote: "origin".to_string(),
            main_worktree_pattern: None,
            branch_prefix: None,
        }
    }
}

impl FlowConfig {
    /// Load the configuration for the repository rooted at `repo_root`.
    ///
    /// Uses the first file in [`CONFIG_FILES`] that exists under
    /// [`CONFIG_DIR`], or the defaults when there is none.
    pub fn load(repo_root: &Path) -> Result<Self> {
        let dir = repo_root.join(CONFIG_DIR);
        for name in CONFIG_FILES {
            let path = dir.join(name);
            if path.is_file() {
                tracing::debug!(path = %path.display(), "Loading flow config");
                return ConfigStore::new().load(&path);
            }
        }
        Ok(Self::default())
    }

    /// Path the configuration would be read from, if one exists.
    pub fn locate(repo_root: &Path) -> Option<PathBuf> {
        let dir = repo_root.join(CONFIG_DIR);
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

/// Format-agnostic configuration reader.
///
/// Detects the format from the file extension.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    /// Create a new ConfigStore.
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<T> {
        let content = std::fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("");

        match extension.to_lowercase().as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedConfigFormat {
                extension: extension.to_string(),
            }),
        }
    }
}
