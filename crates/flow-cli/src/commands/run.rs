//! Run command implementation
//!
//! Picks a choice, executes it through [`CliGitOperations`], then creates the
//! new branch at the action's branch point and optionally pushes it.

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::{Input, Select};

use flow_core::{
    GitState, Scenario, ScenarioContext, StateAction, execute_state_action,
    get_branch_point_on_remote, get_scenario_context,
};
use flow_git::{CliGitOperations, GitOperations, branch_name_from_description, validate_branch_name};

use super::choices::print_menu;
use crate::context::FlowContext;
use crate::error::{CliError, Result};

/// Flags of `flow run`.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// 1-based menu number
    pub choice: Option<usize>,
    pub branch: Option<String>,
    pub description: Option<String>,
    pub push: bool,
}

/// Run the run command
pub fn run_action(ctx: &FlowContext, options: &RunOptions) -> Result<()> {
    let interactive = std::io::stdin().is_terminal();
    let (state, scenario) = ctx.analyze()?;
    let context = get_scenario_context(scenario, &state, ctx.base_branch())
        .ok_or_else(|| CliError::user(format!("No actions available for {scenario}")))?;

    let action = match options.choice {
        Some(number) => choice_by_number(&context, number)?,
        None if interactive => prompt_choice(&context)?,
        None => {
            return Err(CliError::user(
                "No --choice given and stdin is not a terminal; run `flow choices` to see the menu",
            ));
        }
    };

    let description = resolve_description(&action, options.description.as_deref(), interactive)?;
    let target = resolve_branch(ctx, &state, scenario, options.branch.as_deref(), &description, interactive)?;

    let ops = CliGitOperations::new();
    let branch_name = target.name();

    println!("{} Running {}...", "=>".blue().bold(), action.action.as_str().cyan());
    let result = execute_state_action(&action, &description, branch_name, &ops, &ctx.cwd);
    if !result.success {
        let error = result.error.unwrap_or_else(|| "unknown failure".to_string());
        return Err(CliError::user(format!("{} failed: {error}", action.action)));
    }
    println!(
        "{} {}",
        "OK".green().bold(),
        result.message.as_deref().unwrap_or_default()
    );

    if let BranchTarget::New(name) = &target {
        let revision =
            get_branch_point_on_remote(&action, &ctx.config.remote, ctx.base_branch());
        ops.checkout_new_branch(&ctx.repo_root, name, &revision)?;
        println!(
            "{} Created branch {} (from {})",
            "OK".green().bold(),
            name.cyan(),
            revision.yellow()
        );
    }

    if options.push {
        println!(
            "{} Pushing {} to {}...",
            "=>".blue().bold(),
            branch_name.cyan(),
            ctx.config.remote.yellow()
        );
        ops.push(&ctx.repo_root, &ctx.config.remote, branch_name, true)?;
        println!("{} Pushed {}", "OK".green().bold(), branch_name.cyan());
    }

    Ok(())
}

/// Where the action's result ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
enum BranchTarget {
    /// A branch created after the action runs
    New(String),
    /// The checked-out branch of a PR worktree
    Current(String),
}

impl BranchTarget {
    fn name(&self) -> &str {
        match self {
            Self::New(name) | Self::Current(name) => name,
        }
    }
}

/// Look up a 1-based menu number.
fn choice_by_number(context: &ScenarioContext, number: usize) -> Result<StateAction> {
    let choice = number
        .checked_sub(1)
        .and_then(|index| context.choices.get(index))
        .ok_or_else(|| {
            CliError::user(format!(
                "Choice {number} does not exist; {} has {} choices",
                context.scenario,
                context.choices.len()
            ))
        })?;
    choice
        .action
        .ok_or_else(|| CliError::user(format!("Choice {number} is informational: {}", choice.label)))
}

fn prompt_choice(context: &ScenarioContext) -> Result<StateAction> {
    print_menu(context);
    println!();

    let (indices, labels): (Vec<usize>, Vec<&str>) = context
        .actionable()
        .map(|(index, choice)| (index, choice.label.as_str()))
        .unzip();
    let picked = Select::new()
        .with_prompt("What do you want to do?")
        .items(&labels)
        .default(0)
        .interact()?;

    choice_by_number(context, indices[picked] + 1)
}

fn resolve_description(
    action: &StateAction,
    description: Option<&str>,
    interactive: bool,
) -> Result<String> {
    match description.map(str::trim) {
        Some(description) if !description.is_empty() => Ok(description.to_string()),
        _ if !action.action.commits() => Ok(String::new()),
        _ if interactive => Ok(Input::<String>::new()
            .with_prompt("Describe the change")
            .interact_text()?
            .trim()
            .to_string()),
        _ => Err(CliError::user(format!(
            "--description is required for {}",
            action.action
        ))),
    }
}

fn resolve_branch(
    ctx: &FlowContext,
    state: &GitState,
    scenario: Scenario,
    branch: Option<&str>,
    description: &str,
    interactive: bool,
) -> Result<BranchTarget> {
    if scenario == Scenario::PrWorktree {
        if branch.is_some() {
            tracing::warn!("--branch ignored in a PR worktree");
        }
        let current = state
            .current_branch
            .clone()
            .ok_or_else(|| CliError::user("PR worktree has no checked-out branch"))?;
        return Ok(BranchTarget::Current(current));
    }

    let name = match branch {
        Some(name) => name.to_string(),
        None if !description.is_empty() => {
            branch_name_from_description(description, ctx.config.branch_prefix.as_deref())?
        }
        None if interactive => Input::<String>::new()
            .with_prompt("New branch name")
            .interact_text()?
            .trim()
            .to_string(),
        None => {
            return Err(CliError::user(
                "Pass --branch or --description to name the new branch",
            ));
        }
    };
    validate_branch_name(&name)?;
    Ok(BranchTarget::New(name))
}
