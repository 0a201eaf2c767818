use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::io::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "frictionmap")]
#[command(about = "Issue tracker friction analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a single issue from a tracker snapshot
    Issue {
        /// Issue key or id (e.g. DEMO-42)
        id: String,

        /// Path to the tracker snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Aggregate friction over a project's recent issues
    Project {
        /// Project key (e.g. DEMO)
        key: String,

        /// Path to the tracker snapshot JSON
        #[arg(long)]
        snapshot: PathBuf,

        /// Override the sample size from configuration
        #[arg(long)]
        limit: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Write a default frictionmap.toml to the current directory
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
