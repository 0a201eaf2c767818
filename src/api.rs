//! The exposed entry points. Neither ever fails across the boundary:
//! analysis errors are mapped into an [`ErrorEnvelope`] so a caller can
//! render success and failure through one channel.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::aggregator::ProjectAggregator;
use crate::analyzer::IssueAnalyzer;
use crate::config::FrictionConfig;
use crate::core::{FrictionResult, ProjectReport};
use crate::errors::FrictionError;
use crate::source::IssueSource;

/// Boundary-safe error shape: a stable caller-facing label plus the
/// underlying error text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub details: String,
}

impl ErrorEnvelope {
    pub fn new<L: Into<String>>(label: L, err: &FrictionError) -> Self {
        Self {
            error: label.into(),
            details: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum IssueResponse {
    Success(FrictionResult),
    Error(ErrorEnvelope),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ProjectResponse {
    Success(ProjectReport),
    Error(ErrorEnvelope),
}

/// Analyze a single issue by key or id.
pub async fn analyze_issue<S: IssueSource>(
    source: Arc<S>,
    config: &FrictionConfig,
    issue_id: &str,
) -> IssueResponse {
    log::info!("analyzing issue {issue_id}");
    let analyzer = IssueAnalyzer::new(source, config.clone());
    match analyzer.analyze(issue_id).await {
        Ok(result) => IssueResponse::Success(result),
        Err(err) => {
            log::error!("analysis of issue {issue_id} failed: {err}");
            IssueResponse::Error(ErrorEnvelope::new("Failed to analyze issue", &err))
        }
    }
}

/// Analyze a project: sample recent issues, aggregate their friction.
pub async fn analyze_project<S: IssueSource + 'static>(
    source: Arc<S>,
    config: &FrictionConfig,
    project_key: &str,
) -> ProjectResponse {
    log::info!("analyzing project {project_key}");
    let aggregator = ProjectAggregator::new(source, config.clone());
    match aggregator.analyze_project(project_key).await {
        Ok(report) => ProjectResponse::Success(report),
        Err(err) => {
            log::error!("analysis of project {project_key} failed: {err}");
            ProjectResponse::Error(ErrorEnvelope::new("Failed to analyze project", &err))
        }
    }
}
