//! Choices command implementation

use colored::Colorize;
use serde_json::json;

use flow_core::{ScenarioContext, get_scenario_context};

use crate::context::FlowContext;
use crate::error::Result;

/// Run the choices command
pub fn run_choices(ctx: &FlowContext, json: bool) -> Result<()> {
    let (state, scenario) = ctx.analyze()?;
    let context = get_scenario_context(scenario, &state, ctx.base_branch());

    if json {
        let output = match &context {
            Some(context) => serde_json::to_value(context)?,
            None => json!({ "scenario": scenario, "summary": null, "choices": [] }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match context {
        Some(context) => print_menu(&context),
        None => println!("{} No actions available for {}", "!".yellow().bold(), scenario),
    }
    Ok(())
}

/// Print the numbered menu, 1-based like `flow run --choice`.
pub fn print_menu(context: &ScenarioContext) {
    println!("{} {}", "=>".blue().bold(), context.summary);
    println!();
    for (index, choice) in context.choices.iter().enumerate() {
        let number = format!("{:>2}.", index + 1);
        match &choice.action {
            Some(action) => println!(
                "  {} {} {}",
                number.cyan(),
                choice.label,
                format!("[{}]", action.action).dimmed()
            ),
            None => println!("  {} {}", number.dimmed(), choice.label.dimmed()),
        }
    }
}
