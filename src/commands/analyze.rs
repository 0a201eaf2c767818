use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::api;
use crate::config::FrictionConfig;
use crate::io::{create_writer, OutputFormat};
use crate::source::SnapshotSource;

pub struct IssueCommand {
    pub id: String,
    pub snapshot: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub struct ProjectCommand {
    pub key: String,
    pub snapshot: PathBuf,
    pub limit: Option<usize>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

pub fn handle_issue(cmd: IssueCommand) -> Result<()> {
    let config = load_config(cmd.config.as_deref())?;
    let source = Arc::new(load_snapshot(&cmd.snapshot)?);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let response = runtime.block_on(api::analyze_issue(source, &config, &cmd.id));

    create_writer(cmd.format, cmd.output.as_deref())?.write_issue(&response)
}

pub fn handle_project(cmd: ProjectCommand) -> Result<()> {
    let mut config = load_config(cmd.config.as_deref())?;
    if let Some(limit) = cmd.limit {
        config.max_issues = limit;
    }
    let source = Arc::new(load_snapshot(&cmd.snapshot)?);

    let runtime = tokio::runtime::Runtime::new().context("failed to start async runtime")?;
    let response = runtime.block_on(api::analyze_project(source, &config, &cmd.key));

    create_writer(cmd.format, cmd.output.as_deref())?.write_project(&response)
}

fn load_config(path: Option<&Path>) -> Result<FrictionConfig> {
    FrictionConfig::load(path).context("failed to load configuration")
}

fn load_snapshot(path: &Path) -> Result<SnapshotSource> {
    SnapshotSource::from_path(path)
        .with_context(|| format!("failed to load snapshot {}", path.display()))
}
