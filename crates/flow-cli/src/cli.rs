//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};

/// worktree-flow - Turn the current repository state into a PR-ready branch
#[derive(Parser, Debug)]
#[command(name = "flow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Base branch to compare against (overrides .repository/flow.toml)
    #[arg(long, global = true, env = "FLOW_BASE_BRANCH")]
    pub base: Option<String>,

    /// Remote holding the base branch (overrides .repository/flow.toml)
    #[arg(long, global = true, env = "FLOW_REMOTE")]
    pub remote: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show the detected repository state and scenario
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// List the choices available in the current scenario
    Choices {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Run a choice and create the new branch
    ///
    /// Examples:
    ///   flow run                                  # Pick interactively
    ///   flow run --choice 1 -d "Add login page"   # Branch name derived from the description
    ///   flow run --choice 2 --branch feat/login --push
    Run {
        /// Number of the choice as shown by `flow choices`
        #[arg(short, long)]
        choice: Option<usize>,

        /// Name of the new branch
        #[arg(short, long)]
        branch: Option<String>,

        /// What the work is about; used for the commit message
        #[arg(short, long)]
        description: Option<String>,

        /// Push the branch to the remote and set its upstream
        #[arg(long)]
        push: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run_with_all_flags() {
        let cli = Cli::parse_from([
            "flow", "--base", "develop", "run", "--choice", "2", "--branch", "feat/x", "-d",
            "Add x", "--push",
        ]);

        assert_eq!(cli.base.as_deref(), Some("develop"));
        assert_eq!(
            cli.command,
            Some(Commands::Run {
                choice: Some(2),
                branch: Some("feat/x".into()),
                description: Some("Add x".into()),
                push: true,
            })
        );
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["flow", "status", "--json", "--remote", "upstream", "-v"]);

        assert!(cli.verbose);
        assert_eq!(cli.remote.as_deref(), Some("upstream"));
        assert_eq!(cli.command, Some(Commands::Status { json: true }));
    }
}
