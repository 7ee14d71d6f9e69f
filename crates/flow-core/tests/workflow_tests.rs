//! End-to-end: collect, classify, pick, execute, branch, against real repositories

use flow_core::{
    ActionKind, CommitRelationship, FlowConfig, GitState, Scenario, StateAction, analyze_git_state,
    detect_scenario, execute_state_action, get_branch_point, get_scenario_context,
};
use flow_git::CliGitOperations;
use flow_test_utils::repo::TestRepo;
use pretty_assertions::assert_eq;

/// First catalog entry carrying `kind` (and the requested stash flag).
fn pick(scenario: Scenario, state: &GitState, kind: ActionKind, stash: bool) -> StateAction {
    get_scenario_context(scenario, state, "main")
        .expect("scenario has choices")
        .choices
        .into_iter()
        .filter_map(|choice| choice.action)
        .find(|action| action.action == kind && action.stash_unstaged == stash)
        .unwrap_or_else(|| panic!("{scenario} offers no {kind} (stash={stash})"))
}

#[test]
fn commit_all_on_main_behind_origin_keeps_work_on_new_branch() {
    let repo = TestRepo::with_origin();
    repo.fall_behind_origin();
    let local_main = repo.git(&["rev-parse", "HEAD"]);
    repo.write_file("feature.txt", "new work");

    let state = analyze_git_state("main", repo.root(), &FlowConfig::default()).unwrap();
    assert_eq!(state.commit_relationship, CommitRelationship::Behind);
    let scenario = detect_scenario(&state).unwrap();
    assert_eq!(scenario, Scenario::MainUnstagedSame);

    let action = pick(scenario, &state, ActionKind::CommitAll, false);
    let ops = CliGitOperations::new();
    let result = execute_state_action(&action, "Add feature file", "feature/new", &ops, repo.root());
    assert!(result.success, "{result:?}");

    let revision = get_branch_point(&action, "main");
    assert_eq!(revision, "HEAD");
    ops.checkout_new_branch(repo.root(), "feature/new", &revision)
        .unwrap();

    assert_eq!(repo.git(&["branch", "--show-current"]), "feature/new");
    assert!(repo.tree_paths("HEAD").contains(&"feature.txt".to_string()));
    assert_eq!(repo.git(&["rev-parse", "HEAD~1"]), local_main);
    assert!(repo.porcelain_status().is_empty());

    // Branching from origin/main instead would leave the new commit behind.
    repo.git(&["branch", "from-origin", "origin/main"]);
    assert!(!repo.tree_paths("from-origin").contains(&"feature.txt".to_string()));
}

#[test]
fn commit_staged_leaves_unstaged_file_uncommitted() {
    let repo = TestRepo::new();
    repo.commit_file("tracked.txt", "v1", "Track file");
    repo.stage_file("staged.txt", "staged");
    repo.write_file("tracked.txt", "v2");

    let state = analyze_git_state("main", repo.root(), &FlowConfig::default()).unwrap();
    let scenario = detect_scenario(&state).unwrap();
    assert_eq!(scenario, Scenario::MainBothSame);

    let action = pick(scenario, &state, ActionKind::CommitStaged, false);
    let ops = CliGitOperations::new();
    let result = execute_state_action(&action, "Add staged file", "feat/staged", &ops, repo.root());
    assert!(result.success, "{result:?}");
    ops.checkout_new_branch(repo.root(), "feat/staged", &get_branch_point(&action, "main"))
        .unwrap();

    let committed = repo.git(&["diff-tree", "--no-commit-id", "--name-only", "-r", "HEAD"]);
    assert_eq!(committed, "staged.txt");
    assert_eq!(repo.porcelain_status(), vec![" M tracked.txt".to_string()]);
    repo.assert_file_contains("tracked.txt", "v2");
}

#[test]
fn commit_staged_with_stash_parks_the_rest() {
    let repo = TestRepo::new();
    repo.commit_file("tracked.txt", "v1", "Track file");
    repo.stage_file("staged.txt", "staged");
    repo.write_file("tracked.txt", "v2");

    let state = analyze_git_state("main", repo.root(), &FlowConfig::default()).unwrap();
    let action = pick(Scenario::MainBothSame, &state, ActionKind::CommitStaged, true);
    let ops = CliGitOperations::new();
    let result = execute_state_action(&action, "Add staged file", "feat/staged", &ops, repo.root());
    assert!(result.success, "{result:?}");

    assert!(repo.porcelain_status().is_empty());
    assert!(repo.git(&["stash", "list"]).contains("feat/staged"));
}

#[test]
fn empty_commit_on_clean_main() {
    let repo = TestRepo::with_origin();

    let state = analyze_git_state("main", repo.root(), &FlowConfig::default()).unwrap();
    let scenario = detect_scenario(&state).unwrap();
    assert_eq!(scenario, Scenario::MainCleanSame);

    let action = pick(scenario, &state, ActionKind::EmptyCommit, false);
    let ops = CliGitOperations::new();
    let result = execute_state_action(&action, "login page", "feat/login", &ops, repo.root());
    assert!(result.success, "{result:?}");

    assert_eq!(repo.git(&["log", "-1", "--format=%s"]), "chore: start login page");
}

#[test]
fn nothing_to_commit_is_a_failed_result() {
    let repo = TestRepo::new();
    let ops = CliGitOperations::new();

    let result = execute_state_action(
        &StateAction::from_head(ActionKind::CommitStaged),
        "Nothing here",
        "feat/none",
        &ops,
        repo.root(),
    );

    assert!(!result.success);
    assert!(result.error.is_some());
}

#[test]
fn local_commits_on_main_move_with_the_branch() {
    let repo = TestRepo::with_origin();
    repo.commit_file("local.txt", "local", "Local work");

    let state = analyze_git_state("main", repo.root(), &FlowConfig::default()).unwrap();
    let scenario = detect_scenario(&state).unwrap();
    assert_eq!(scenario, Scenario::MainCleanAhead);

    let action = pick(scenario, &state, ActionKind::BranchOnly, false);
    let ops = CliGitOperations::new();
    assert!(execute_state_action(&action, "", "feat/local", &ops, repo.root()).success);
    ops.checkout_new_branch(repo.root(), "feat/local", &get_branch_point(&action, "main"))
        .unwrap();

    assert!(repo.tree_paths("HEAD").contains(&"local.txt".to_string()));
}
