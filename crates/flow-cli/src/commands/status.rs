//! Status command implementation

use colored::Colorize;
use serde_json::json;

use flow_core::{GitState, Scenario};

use crate::context::FlowContext;
use crate::error::Result;

/// Most paths listed per file set before eliding the rest.
const MAX_LISTED_PATHS: usize = 10;

/// Run the status command
pub fn run_status(ctx: &FlowContext, json: bool) -> Result<()> {
    let (state, scenario) = ctx.analyze()?;

    if json {
        let output = json!({
            "scenario": scenario,
            "working_tree_status": state.working_tree_status(),
            "state": state,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_status(&state, scenario);
    Ok(())
}

fn print_status(state: &GitState, scenario: Scenario) {
    println!("{}", "Repository State".bold());
    println!();

    println!("{}:     {}", "Path".dimmed(), state.repo_root.display());
    println!("{}:   {}", "Branch".dimmed(), state.branch_label().cyan());
    println!("{}: {}", "Worktree".dimmed(), state.worktree_type);
    println!(
        "{}:     {} ({} ahead, {} behind {})",
        "Base".dimmed(),
        state.commit_relationship,
        state.ahead,
        state.behind,
        state.base_ref.yellow()
    );
    println!("{}: {}", "Scenario".dimmed(), scenario.as_str().green().bold());
    println!();

    print_paths("Staged", &state.staged_files);
    print_paths("Unstaged", &state.unstaged_files);

    if !state.local_commits.is_empty() {
        println!("{}:", "Local Commits".bold());
        for commit in &state.local_commits {
            println!("  {} {}", commit.hash.yellow(), commit.message);
        }
    }
}

fn print_paths<'a>(title: &str, paths: impl IntoIterator<Item = &'a String>) {
    let paths: Vec<_> = paths.into_iter().collect();
    if paths.is_empty() {
        return;
    }
    println!("{}:", title.bold());
    for path in paths.iter().take(MAX_LISTED_PATHS) {
        println!("  {} {}", "+".green(), path);
    }
    if paths.len() > MAX_LISTED_PATHS {
        println!("  {}", format!("... and {} more", paths.len() - MAX_LISTED_PATHS).dimmed());
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Overrides;
    use flow_test_utils::repo::TestRepo;

    #[test]
    fn test_status_on_dirty_main() {
        let repo = TestRepo::new();
        repo.write_file("a.txt", "a");
        let ctx = FlowContext::resolve(repo.root(), &Overrides::default()).unwrap();

        assert!(run_status(&ctx, false).is_ok());
        assert!(run_status(&ctx, true).is_ok());
    }
}
