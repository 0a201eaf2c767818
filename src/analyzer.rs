//! Single-issue analysis: fetch, normalize, detect signals, score.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::analysis::{
    count_assignee_changes, detect_status_loops, idle_days, normalize_changelog,
    reconstruct_intervals, status_timeline, DefaultClassifier, FrictionScorer, StatusClassifier,
};
use crate::config::FrictionConfig;
use crate::core::{FrictionLevel, FrictionResult, SignalSet};
use crate::errors::{FrictionError, Result};
use crate::source::{IssueSource, RawIssue};

/// Runs the full analysis pipeline for one issue. Holds no per-call state;
/// a single analyzer is shared across a concurrent batch.
pub struct IssueAnalyzer<S> {
    source: Arc<S>,
    config: FrictionConfig,
    classifier: Arc<dyn StatusClassifier>,
}

impl<S: IssueSource> IssueAnalyzer<S> {
    pub fn new(source: Arc<S>, config: FrictionConfig) -> Self {
        Self {
            source,
            config,
            classifier: Arc::new(DefaultClassifier),
        }
    }

    /// Swap in a workflow-aware classifier for reopen/backtrack detection.
    pub fn with_classifier(mut self, classifier: Arc<dyn StatusClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &FrictionConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch and analyze one issue. Fails with a typed error on fetch or
    /// data problems; never returns a partially-populated result.
    pub async fn analyze(&self, issue_id: &str) -> Result<FrictionResult> {
        let raw = self.source.fetch_issue(issue_id).await?;
        self.analyze_record(&raw, Utc::now())
    }

    /// Analyze an already-fetched record against a fixed `now`. Split out so
    /// the pipeline is deterministic under test.
    pub fn analyze_record(&self, issue: &RawIssue, now: DateTime<Utc>) -> Result<FrictionResult> {
        let created_raw = issue.fields.created.as_deref().ok_or_else(|| {
            FrictionError::data(format!("issue {} has no creation timestamp", issue.key))
        })?;
        let created = crate::core::parse_timestamp(created_raw)?;
        let current_status = issue.fields.status.name.as_str();

        let events = normalize_changelog(&issue.changelog)?;
        let timeline = status_timeline(&events);
        let loops = detect_status_loops(&timeline);
        let assignee_changes = count_assignee_changes(&events);
        let intervals = reconstruct_intervals(&events, created, current_status);

        let signals = SignalSet {
            reopens: self.classifier.count_reopens(&timeline),
            loops: loops.len() as u32,
            backtracks: self.classifier.count_backtracks(&timeline),
            assignee_changes,
            idle_days: idle_days(&intervals, &self.config.idle_statuses, now),
        };

        let score = FrictionScorer::new(self.config.weights.clone()).score(&signals);
        let level = FrictionLevel::from_score(score);
        log::debug!(
            "issue {}: {} loops, {} assignee changes, {} idle days -> score {score}",
            issue.key,
            signals.loops,
            signals.assignee_changes,
            signals.idle_days,
        );

        Ok(FrictionResult {
            issue_key: issue.key.clone(),
            summary: issue.fields.summary.clone(),
            score,
            level,
            color: level.color().to_string(),
            loops,
            assignee_changes,
            history_count: events.len(),
        })
    }
}
