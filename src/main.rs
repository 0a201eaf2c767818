use anyhow::Result;
use clap::Parser;
use frictionmap::cli::{Cli, Commands};
use frictionmap::commands::{analyze, init};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Issue {
            id,
            snapshot,
            format,
            output,
            config,
        } => analyze::handle_issue(analyze::IssueCommand {
            id,
            snapshot,
            format,
            output,
            config,
        }),
        Commands::Project {
            key,
            snapshot,
            limit,
            format,
            output,
            config,
        } => analyze::handle_project(analyze::ProjectCommand {
            key,
            snapshot,
            limit,
            format,
            output,
            config,
        }),
        Commands::Init { force } => init::init_config(force),
    }
}
