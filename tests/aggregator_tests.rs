mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use common::{issue, ping_pong_issue, MockSource};
use frictionmap::errors::Result;
use frictionmap::source::{IssueRef, IssueSource, RawIssue};
use frictionmap::{FrictionConfig, ProjectAggregator};

#[tokio::test]
async fn failures_are_isolated_and_excluded_from_statistics() {
    // 20 sampled issues; 3 of them fail to fetch.
    let mut issues: Vec<RawIssue> = Vec::new();
    issues.push(ping_pong_issue("DEMO-1", 2, 3)); // 4.5
    issues.push(ping_pong_issue("DEMO-2", 4, 0)); // 6.0
    issues.push(ping_pong_issue("DEMO-3", 4, 2)); // 7.0
    for i in 4..=20 {
        issues.push(issue(&format!("DEMO-{i}"), "In Progress", vec![]));
    }
    let failing = ["DEMO-5", "DEMO-11", "DEMO-19"].map(String::from);
    let source = MockSource::new(issues).failing_on(failing.clone());

    let aggregator = ProjectAggregator::new(Arc::new(source), FrictionConfig::default());
    let report = aggregator.analyze_project("DEMO").await.unwrap();

    assert_eq!(report.project_key, "DEMO");
    assert_eq!(report.issues_analyzed, 17);
    // (4.5 + 6.0 + 7.0) / 17 = 1.029... -> 1.0
    assert_eq!(report.average_friction, 1.0);
    assert_eq!(report.max_friction, 7.0);

    let high: Vec<&str> = report
        .high_friction_issues
        .iter()
        .map(|r| r.issue_key.as_str())
        .collect();
    assert_eq!(high, vec!["DEMO-3", "DEMO-2"]);

    let mut failed: Vec<&str> = report
        .failures
        .iter()
        .map(|f| f.issue_key.as_str())
        .collect();
    failed.sort();
    assert_eq!(failed, vec!["DEMO-11", "DEMO-19", "DEMO-5"]);
    for failure in &report.failures {
        assert_eq!(failure.score, 0.0);
        assert!(failure.error.contains("simulated upstream outage"));
    }
}

#[tokio::test]
async fn high_friction_sort_is_stable_on_ties() {
    let issues = vec![
        ping_pong_issue("DEMO-1", 4, 0), // 6.0
        ping_pong_issue("DEMO-2", 4, 4), // 8.0
        ping_pong_issue("DEMO-3", 4, 0), // 6.0, ties with DEMO-1
    ];
    let aggregator =
        ProjectAggregator::new(Arc::new(MockSource::new(issues)), FrictionConfig::default());
    let report = aggregator.analyze_project("DEMO").await.unwrap();

    let high: Vec<&str> = report
        .high_friction_issues
        .iter()
        .map(|r| r.issue_key.as_str())
        .collect();
    assert_eq!(high, vec!["DEMO-2", "DEMO-1", "DEMO-3"]);
}

#[tokio::test]
async fn empty_project_reports_zeroes() {
    let aggregator =
        ProjectAggregator::new(Arc::new(MockSource::new(vec![])), FrictionConfig::default());
    let report = aggregator.analyze_project("EMPTY").await.unwrap();

    assert_eq!(report.issues_analyzed, 0);
    assert_eq!(report.average_friction, 0.0);
    assert_eq!(report.max_friction, 0.0);
    assert!(report.high_friction_issues.is_empty());
    assert!(report.failures.is_empty());
}

#[tokio::test]
async fn sample_size_is_bounded_by_config() {
    let issues: Vec<RawIssue> = (1..=30)
        .map(|i| issue(&format!("DEMO-{i}"), "Done", vec![]))
        .collect();
    let mut config = FrictionConfig::default();
    config.max_issues = 5;

    let aggregator = ProjectAggregator::new(Arc::new(MockSource::new(issues)), config);
    let report = aggregator.analyze_project("DEMO").await.unwrap();

    assert_eq!(report.issues_analyzed, 5);
}

/// Source that records how many fetches run at once.
struct ProbeSource {
    inner: MockSource,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl ProbeSource {
    fn new(issues: Vec<RawIssue>) -> Self {
        Self {
            inner: MockSource::new(issues),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl IssueSource for ProbeSource {
    async fn fetch_issue(&self, id: &str) -> Result<RawIssue> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        let result = self.inner.fetch_issue(id).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }

    async fn search_issues(&self, project_key: &str, limit: usize) -> Result<Vec<IssueRef>> {
        self.inner.search_issues(project_key, limit).await
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn fan_out_respects_the_concurrency_cap() {
    let issues: Vec<RawIssue> = (1..=12)
        .map(|i| issue(&format!("DEMO-{i}"), "Done", vec![]))
        .collect();
    let source = Arc::new(ProbeSource::new(issues));
    let mut config = FrictionConfig::default();
    config.max_concurrent_fetches = 2;

    let aggregator = ProjectAggregator::new(Arc::clone(&source), config);
    let report = aggregator.analyze_project("DEMO").await.unwrap();

    assert_eq!(report.issues_analyzed, 12);
    assert!(source.max_in_flight.load(Ordering::SeqCst) <= 2);
}

/// Source whose fetches never finish in time.
struct StalledSource {
    inner: MockSource,
}

#[async_trait]
impl IssueSource for StalledSource {
    async fn fetch_issue(&self, id: &str) -> Result<RawIssue> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        self.inner.fetch_issue(id).await
    }

    async fn search_issues(&self, project_key: &str, limit: usize) -> Result<Vec<IssueRef>> {
        self.inner.search_issues(project_key, limit).await
    }
}

#[tokio::test]
async fn deadline_turns_pending_units_into_failures() {
    let issues: Vec<RawIssue> = (1..=3)
        .map(|i| issue(&format!("DEMO-{i}"), "Done", vec![]))
        .collect();
    let source = StalledSource {
        inner: MockSource::new(issues),
    };
    let mut config = FrictionConfig::default();
    config.batch_deadline_secs = 0;

    let aggregator = ProjectAggregator::new(Arc::new(source), config);
    let report = aggregator.analyze_project("DEMO").await.unwrap();

    assert_eq!(report.issues_analyzed, 0);
    assert_eq!(report.failures.len(), 3);
    for failure in &report.failures {
        assert!(failure.error.contains("deadline"));
    }
}

#[tokio::test]
async fn search_failure_fails_the_batch() {
    let source = MockSource::new(vec![]).failing_search();
    let aggregator = ProjectAggregator::new(Arc::new(source), FrictionConfig::default());

    let err = aggregator.analyze_project("DEMO").await.unwrap_err();
    assert!(err.is_fetch());
}
