//! Branch-point resolution
//!
//! The only place a [`BranchFrom`] turns into a revision. Call sites must not
//! spell `origin/<base>` themselves.

use crate::action::{BranchFrom, StateAction};

/// Revision naming the current commit.
pub const HEAD_REVISION: &str = "HEAD";

/// Remote assumed by [`get_branch_point`].
const DEFAULT_REMOTE: &str = "origin";

/// Revision a new branch should start from for `action`.
///
/// `head` resolves to `HEAD`; `origin_main` resolves to `origin/<base_branch>`.
pub fn get_branch_point(action: &StateAction, base_branch: &str) -> String {
    get_branch_point_on_remote(action, DEFAULT_REMOTE, base_branch)
}

/// Like [`get_branch_point`], for a remote other than `origin`.
pub fn get_branch_point_on_remote(action: &StateAction, remote: &str, base_branch: &str) -> String {
    match action.branch_from {
        BranchFrom::Head => HEAD_REVISION.to_string(),
        BranchFrom::OriginMain => format!("{remote}/{base_branch}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;
    use rstest::rstest;

    #[rstest]
    #[case("main")]
    #[case("master")]
    #[case("release/2.x")]
    fn head_is_always_head(#[case] base: &str) {
        for kind in ActionKind::ALL {
            let action = StateAction::from_head(kind);
            assert_eq!(get_branch_point(&action, base), "HEAD");
        }
    }

    #[test]
    fn origin_main_uses_remote_tracking_base() {
        let action = StateAction {
            action: ActionKind::EmptyCommit,
            branch_from: BranchFrom::OriginMain,
            stash_unstaged: false,
        };
        assert_eq!(get_branch_point(&action, "main"), "origin/main");
        assert_eq!(
            get_branch_point_on_remote(&action, "upstream", "develop"),
            "upstream/develop"
        );
    }
}
