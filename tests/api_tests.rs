mod common;

use std::sync::Arc;

use common::{ping_pong_issue, MockSource};
use frictionmap::api::{analyze_issue, analyze_project, IssueResponse, ProjectResponse};
use frictionmap::FrictionConfig;

#[tokio::test]
async fn issue_success_comes_back_as_a_result() {
    let source = Arc::new(MockSource::new(vec![ping_pong_issue("DEMO-1", 2, 0)]));
    let response = analyze_issue(source, &FrictionConfig::default(), "DEMO-1").await;

    match response {
        IssueResponse::Success(result) => {
            assert_eq!(result.issue_key, "DEMO-1");
            assert_eq!(result.score, 3.0);
        }
        IssueResponse::Error(envelope) => panic!("unexpected error: {envelope:?}"),
    }
}

#[tokio::test]
async fn issue_failure_becomes_an_envelope_not_a_panic() {
    let source = Arc::new(MockSource::new(vec![]));
    let response = analyze_issue(source, &FrictionConfig::default(), "DEMO-404").await;

    match response {
        IssueResponse::Error(envelope) => {
            assert_eq!(envelope.error, "Failed to analyze issue");
            assert!(envelope.details.contains("DEMO-404"));
        }
        IssueResponse::Success(result) => panic!("unexpected success: {result:?}"),
    }
}

#[tokio::test]
async fn issue_responses_serialize_flat() {
    let source = Arc::new(MockSource::new(vec![]));
    let response = analyze_issue(source, &FrictionConfig::default(), "DEMO-404").await;

    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["error"], "Failed to analyze issue");
    assert!(value.get("issue_key").is_none());
}

#[tokio::test]
async fn project_success_carries_the_report() {
    let source = Arc::new(MockSource::new(vec![
        ping_pong_issue("DEMO-1", 4, 0),
        ping_pong_issue("DEMO-2", 0, 1),
    ]));
    let response = analyze_project(source, &FrictionConfig::default(), "DEMO").await;

    match response {
        ProjectResponse::Success(report) => {
            assert_eq!(report.issues_analyzed, 2);
            assert_eq!(report.max_friction, 6.0);
            assert_eq!(report.high_friction_issues.len(), 1);
        }
        ProjectResponse::Error(envelope) => panic!("unexpected error: {envelope:?}"),
    }
}

#[tokio::test]
async fn project_search_failure_becomes_an_envelope() {
    let source = Arc::new(MockSource::new(vec![]).failing_search());
    let response = analyze_project(source, &FrictionConfig::default(), "DEMO").await;

    match response {
        ProjectResponse::Error(envelope) => {
            assert_eq!(envelope.error, "Failed to analyze project");
        }
        ProjectResponse::Success(report) => panic!("unexpected success: {report:?}"),
    }
}
