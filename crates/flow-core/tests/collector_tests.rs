//! Collector and classifier against real repositories

use flow_core::{
    BranchType, CommitRelationship, Error, FlowConfig, Scenario, WorktreeType, analyze_git_state,
    detect_scenario,
};
use flow_test_utils::git::real_git_repo_without_commits;
use flow_test_utils::repo::TestRepo;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn scenario_of(repo: &TestRepo, config: &FlowConfig) -> Scenario {
    let state = analyze_git_state(&config.base_branch, repo.root(), config).unwrap();
    detect_scenario(&state).unwrap()
}

#[test]
fn fresh_branch_is_same_as_main() {
    let repo = TestRepo::with_origin();
    repo.git(&["checkout", "-b", "feature"]);

    assert_eq!(scenario_of(&repo, &FlowConfig::default()), Scenario::BranchSameAsMain);
}

#[test]
fn merged_branch_is_ancestor() {
    let repo = TestRepo::new();
    repo.git(&["branch", "old-feature"]);
    repo.commit_file("later.txt", "later", "Later work on main");
    repo.git(&["checkout", "old-feature"]);

    let state = analyze_git_state("main", repo.root(), &FlowConfig::default()).unwrap();

    assert_eq!(state.commit_relationship, CommitRelationship::Ancestor);
    assert_eq!(state.base_ref, "main");
    assert_eq!(detect_scenario(&state).unwrap(), Scenario::BranchAncestor);
}

#[test]
fn branch_with_commits_is_divergent() {
    let repo = TestRepo::with_origin();
    repo.git(&["checkout", "-b", "feature"]);
    repo.commit_file("f.txt", "f", "Feature one");
    repo.commit_file("g.txt", "g", "Feature two");

    let state = analyze_git_state("main", repo.root(), &FlowConfig::default()).unwrap();

    assert_eq!(state.branch_type, BranchType::Other);
    assert_eq!(state.local_commits.len(), 2);
    assert_eq!(state.local_commits[0].message, "Feature two");
    assert_eq!(detect_scenario(&state).unwrap(), Scenario::BranchDivergent);
}

#[test]
fn dirty_branch_has_changes() {
    let repo = TestRepo::with_origin();
    repo.git(&["checkout", "-b", "feature"]);
    repo.write_file("wip.txt", "wip");

    assert_eq!(scenario_of(&repo, &FlowConfig::default()), Scenario::BranchWithChanges);
}

#[test]
fn detached_head_wins() {
    let repo = TestRepo::with_origin();
    repo.stage_file("staged.txt", "staged");
    repo.git(&["checkout", "--detach"]);

    assert_eq!(scenario_of(&repo, &FlowConfig::default()), Scenario::DetachedHead);
}

#[test]
fn linked_worktree_is_pr_worktree() {
    let repo = TestRepo::with_origin();
    let wt = repo.sibling("pr-7");
    let wt_str = wt.to_string_lossy().into_owned();
    repo.git(&["worktree", "add", "-b", "pr-7", &wt_str]);

    let state = analyze_git_state("main", &wt, &FlowConfig::default()).unwrap();

    assert_eq!(state.worktree_type, WorktreeType::PrWorktree);
    assert_eq!(detect_scenario(&state).unwrap(), Scenario::PrWorktree);
}

#[test]
fn main_worktree_pattern_overrides_git() {
    let repo = TestRepo::with_origin();
    let parent = dunce::canonicalize(repo.root().parent().unwrap()).unwrap();
    let pattern = format!("{}/{{repo}}", parent.to_string_lossy());
    let config = FlowConfig {
        main_worktree_pattern: Some(pattern),
        ..FlowConfig::default()
    };

    assert_eq!(scenario_of(&repo, &config), Scenario::MainCleanSame);

    let elsewhere = FlowConfig {
        main_worktree_pattern: Some("/nonexistent/{repo}".into()),
        ..FlowConfig::default()
    };
    assert_eq!(scenario_of(&repo, &elsewhere), Scenario::PrWorktree);
}

#[test]
fn base_branch_comes_from_config() {
    let repo = TestRepo::new();
    repo.git(&["branch", "develop"]);
    let config = FlowConfig {
        base_branch: "develop".into(),
        ..FlowConfig::default()
    };

    let state = analyze_git_state(&config.base_branch, repo.root(), &config).unwrap();

    assert_eq!(state.branch_type, BranchType::Other);
    assert_eq!(state.base_ref, "develop");
}

#[test]
fn repository_without_commits_is_an_environment_error() {
    let temp = TempDir::new().unwrap();
    real_git_repo_without_commits(temp.path());

    let err = analyze_git_state("main", temp.path(), &FlowConfig::default()).unwrap_err();

    assert!(matches!(err, Error::NoCommits { .. }), "got {err:?}");
    assert!(err.is_environment());
}

#[test]
fn missing_base_branch_is_an_environment_error() {
    let repo = TestRepo::new();

    let err = analyze_git_state("trunk", repo.root(), &FlowConfig::default()).unwrap_err();

    assert!(matches!(err, Error::BaseBranchNotFound { ref name } if name == "trunk"));
}
