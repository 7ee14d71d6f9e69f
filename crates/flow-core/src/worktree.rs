//! Main-worktree location patterns

use std::path::Path;

use regex::Regex;

use crate::{Error, Result};

/// A compiled `main_worktree_pattern`.
///
/// Supports `~` (home directory), `{repo}` (repository name), `*` (within one
/// path component) and `**` (any depth). Paths compare with `/` separators
/// and without a trailing separator.
#[derive(Debug, Clone)]
pub struct WorktreePattern {
    pattern: String,
    regex: Regex,
}

impl WorktreePattern {
    /// Compile `pattern` for the repository called `repo_name`.
    pub fn new(pattern: &str, repo_name: &str) -> Result<Self> {
        let expanded = expand_home(pattern);
        let normalized = normalize(&expanded);

        let mut source = String::from("^");
        let mut rest = normalized.as_str();
        while !rest.is_empty() {
            if let Some(tail) = rest.strip_prefix("**") {
                source.push_str(".*");
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix('*') {
                source.push_str("[^/]*");
                rest = tail;
            } else if let Some(tail) = rest.strip_prefix("{repo}") {
                source.push_str(&regex::escape(repo_name));
                rest = tail;
            } else {
                let mut chars = rest.chars();
                if let Some(c) = chars.next() {
                    source.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
                }
                rest = chars.as_str();
            }
        }
        source.push('$');

        let regex = Regex::new(&source).map_err(|e| Error::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as configured.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Whether `path` is the main worktree location.
    ///
    /// Checks the path as given and, when it exists, its canonical form, so
    /// symlinked temp or home directories still match.
    pub fn matches(&self, path: &Path) -> bool {
        let given = normalize(&path.to_string_lossy());
        if self.regex.is_match(&given) {
            return true;
        }
        dunce::canonicalize(path)
            .map(|canonical| self.regex.is_match(&normalize(&canonical.to_string_lossy())))
            .unwrap_or(false)
    }
}

fn expand_home(pattern: &str) -> String {
    let rest = match pattern.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') || rest.starts_with('\\') => rest,
        _ => return pattern.to_string(),
    };
    match dirs::home_dir() {
        Some(home) => format!("{}{}", home.to_string_lossy(), rest),
        None => pattern.to_string(),
    }
}

fn normalize(path: &str) -> String {
    let forward = path.replace('\\', "/");
    let trimmed = forward.trim_end_matches('/');
    if trimmed.is_empty() && forward.starts_with('/') {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/src/{repo}", "/src/app", true)]
    #[case("/src/{repo}/", "/src/app", true)]
    #[case("/src/{repo}", "/src/app/", true)]
    #[case("/src/{repo}", "/src/app-pr-12", false)]
    #[case("/work/*/main", "/work/app/main", true)]
    #[case("/work/*/main", "/work/app/nested/main", false)]
    #[case("/work/**/main", "/work/app/nested/main", true)]
    #[case("/work/{repo}.main", "/work/appXmain", false)]
    fn pattern_matching(#[case] pattern: &str, #[case] path: &str, #[case] expected: bool) {
        let compiled = WorktreePattern::new(pattern, "app").unwrap();
        assert_eq!(compiled.matches(Path::new(path)), expected, "{pattern} vs {path}");
    }

    #[test]
    fn repo_name_is_literal() {
        let compiled = WorktreePattern::new("/src/{repo}", "a.b").unwrap();
        assert!(compiled.matches(Path::new("/src/a.b")));
        assert!(!compiled.matches(Path::new("/src/aXb")));
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let compiled = WorktreePattern::new("~/src/{repo}", "app").unwrap();
        assert!(compiled.matches(&home.join("src").join("app")));
        assert_eq!(compiled.as_str(), "~/src/{repo}");
    }
}
