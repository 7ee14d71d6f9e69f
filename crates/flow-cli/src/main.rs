//! worktree-flow CLI
//!
//! Inspects the current checkout, offers the legal ways to turn it into a
//! PR-ready branch, and carries out the chosen one.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use commands::RunOptions;
use context::{FlowContext, Overrides};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        if tracing::subscriber::set_global_default(subscriber).is_err() {
            eprintln!("{}: tracing subscriber already set", "warning".yellow());
        }
        tracing::debug!("Verbose mode enabled");
    }

    let Some(command) = cli.command else {
        println!("{} worktree-flow", "flow".green().bold());
        println!();
        println!("Run {} for available commands.", "flow --help".cyan());
        return Ok(());
    };

    let cwd = std::env::current_dir()?;
    let overrides = Overrides {
        base: cli.base,
        remote: cli.remote,
    };
    let ctx = FlowContext::resolve(&cwd, &overrides)?;

    match command {
        Commands::Status { json } => commands::run_status(&ctx, json),
        Commands::Choices { json } => commands::run_choices(&ctx, json),
        Commands::Run {
            choice,
            branch,
            description,
            push,
        } => commands::run_action(
            &ctx,
            &RunOptions {
                choice,
                branch,
                description,
                push,
            },
        ),
    }
}
