//! Branch names derived from free-form descriptions

use git2::Branch;

use crate::{Error, Result};

/// Longest slug taken from a description, before any prefix is added.
const MAX_SLUG_LEN: usize = 48;

/// Derive a branch name from a human description.
///
/// `"Fix login: handle expired tokens"` with prefix `feat/` becomes
/// `feat/fix-login-handle-expired-tokens`.
pub fn branch_name_from_description(description: &str, prefix: Option<&str>) -> Result<String> {
    let slug = slugify(description);
    if slug.is_empty() {
        return Err(Error::InvalidBranchName {
            name: description.to_string(),
        });
    }

    let name = match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{prefix}{slug}"),
        _ => slug,
    };
    validate_branch_name(&name)?;
    Ok(name)
}

/// Reject names git would refuse as a local branch.
pub fn validate_branch_name(name: &str) -> Result<()> {
    if name.is_empty() || name == "HEAD" || !Branch::name_is_valid(name)? {
        return Err(Error::InvalidBranchName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Convert a description to a flat, lowercase slug.
fn slugify(description: &str) -> String {
    let mut result = String::with_capacity(description.len().min(MAX_SLUG_LEN));
    let mut last_was_dash = true; // Start true to skip leading dashes

    for c in description.chars() {
        if result.len() >= MAX_SLUG_LEN {
            break;
        }
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash {
            result.push('-');
            last_was_dash = true;
        }
    }

    while result.ends_with('-') {
        result.pop();
    }

    result
}
