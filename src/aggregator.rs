//! Project-level aggregation: analyze a sample of recent issues
//! concurrently and fold the results into one report.
//!
//! Every sampled issue is an independent unit of work. Units fail in
//! isolation; a fetch or data error on one issue becomes an
//! [`IssueFailure`] placeholder and never cancels its siblings. The join is
//! settle-all, with one absolute deadline across the whole batch.

use chrono::Utc;
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::time::{timeout_at, Instant};

use crate::analysis::round_to_tenth;
use crate::analyzer::IssueAnalyzer;
use crate::config::FrictionConfig;
use crate::core::{FrictionResult, IssueFailure, ProjectReport};
use crate::errors::{FrictionError, Result};
use crate::source::IssueSource;

pub struct ProjectAggregator<S> {
    analyzer: Arc<IssueAnalyzer<S>>,
    config: FrictionConfig,
}

impl<S: IssueSource + 'static> ProjectAggregator<S> {
    pub fn new(source: Arc<S>, config: FrictionConfig) -> Self {
        Self {
            analyzer: Arc::new(IssueAnalyzer::new(source, config.clone())),
            config,
        }
    }

    /// Replace the analyzer, e.g. to install a workflow-aware classifier.
    pub fn with_analyzer(mut self, analyzer: IssueAnalyzer<S>) -> Self {
        self.analyzer = Arc::new(analyzer);
        self
    }

    /// Sample recent issues of a project and analyze them concurrently.
    ///
    /// Fails only when the sampling query itself fails; per-issue failures
    /// are folded into the report. In-flight fetches are capped by a
    /// semaphore; units still pending at the batch deadline are aborted and
    /// reported as failures, making the report best-effort partial.
    pub async fn analyze_project(&self, project_key: &str) -> Result<ProjectReport> {
        let sampled = self
            .analyzer
            .source()
            .search_issues(project_key, self.config.max_issues)
            .await?;
        let total = sampled.len();
        log::info!("analyzing {total} issues for project {project_key}");

        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_fetches));
        let deadline = Instant::now() + Duration::from_secs(self.config.batch_deadline_secs);

        let mut handles = Vec::with_capacity(total);
        for issue in sampled {
            let analyzer = Arc::clone(&self.analyzer);
            let semaphore = Arc::clone(&semaphore);
            let key = issue.key;
            let task_key = key.clone();
            handles.push((
                key,
                tokio::spawn(async move {
                    let _permit = semaphore
                        .acquire_owned()
                        .await
                        .map_err(|_| FrictionError::data("issue fan-out semaphore closed"))?;
                    analyzer.analyze(&task_key).await
                }),
            ));
        }

        let mut results = Vec::new();
        let mut failures = Vec::new();
        for (key, mut handle) in handles {
            match timeout_at(deadline, &mut handle).await {
                Ok(Ok(Ok(result))) => results.push(result),
                Ok(Ok(Err(err))) => {
                    log::warn!("issue {key} excluded from batch statistics: {err}");
                    failures.push(IssueFailure::new(key, err.to_string()));
                }
                Ok(Err(join_err)) => {
                    log::error!("analysis task for issue {key} did not complete: {join_err}");
                    failures.push(IssueFailure::new(
                        key,
                        format!("analysis task did not complete: {join_err}"),
                    ));
                }
                Err(_) => {
                    handle.abort();
                    failures.push(IssueFailure::new(key, "batch deadline exceeded"));
                }
            }
        }

        if !failures.is_empty() {
            log::warn!(
                "{}",
                FrictionError::PartialBatch {
                    failed: failures.len(),
                    total,
                }
            );
        }

        Ok(self.build_report(project_key, results, failures))
    }

    fn build_report(
        &self,
        project_key: &str,
        results: Vec<FrictionResult>,
        failures: Vec<IssueFailure>,
    ) -> ProjectReport {
        let issues_analyzed = results.len();
        let average_friction = if issues_analyzed == 0 {
            0.0
        } else {
            round_to_tenth(
                results.iter().map(|r| r.score).sum::<f64>() / issues_analyzed as f64,
            )
        };
        let max_friction = results.iter().map(|r| r.score).fold(0.0, f64::max);

        let mut high_friction_issues: Vec<FrictionResult> = results
            .into_iter()
            .filter(|r| r.score >= self.config.high_friction_threshold)
            .collect();
        // Stable sort: ties keep analysis order.
        high_friction_issues
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        ProjectReport {
            project_key: project_key.to_string(),
            issues_analyzed,
            average_friction,
            max_friction,
            high_friction_issues,
            failures,
            timestamp: Utc::now(),
        }
    }
}
