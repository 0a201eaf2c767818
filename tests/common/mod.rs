//! Shared fixtures: an in-memory issue source and changelog builders.

// Each test binary uses a different slice of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::collections::HashSet;

use frictionmap::errors::{FrictionError, Result};
use frictionmap::source::{
    Author, ChangeGroup, ChangeItem, Changelog, IssueFields, IssueRef, IssueSource, RawIssue,
    StatusField,
};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

pub fn ts(minutes: i64) -> String {
    (base_time() + Duration::minutes(minutes)).to_rfc3339()
}

pub fn change(minutes: i64, field: &str, from: Option<&str>, to: &str) -> ChangeGroup {
    ChangeGroup {
        created: ts(minutes),
        author: Some(Author {
            account_id: Some("tester".to_string()),
            display_name: None,
        }),
        items: vec![ChangeItem {
            field: field.to_string(),
            from: from.map(str::to_string),
            to: Some(to.to_string()),
        }],
    }
}

pub fn issue(key: &str, current_status: &str, histories: Vec<ChangeGroup>) -> RawIssue {
    RawIssue {
        id: None,
        key: key.to_string(),
        fields: IssueFields {
            summary: format!("summary of {key}"),
            status: StatusField {
                name: current_status.to_string(),
            },
            created: Some(ts(0)),
            updated: Some(ts(0)),
        },
        changelog: Changelog { histories },
    }
}

/// An issue whose status ping-pongs between two non-idle states often
/// enough to produce exactly `loops` loop occurrences, plus
/// `assignee_changes` reassignments. Under default weights it scores
/// `loops * 1.5 + assignee_changes * 0.5`.
pub fn ping_pong_issue(key: &str, loops: u32, assignee_changes: u32) -> RawIssue {
    let mut histories = Vec::new();
    let mut from = "In Progress";
    let mut to = "Done";
    // Two leading transitions establish the pair; each further one revisits.
    for i in 0..(loops + 2) {
        histories.push(change(i as i64 + 1, "status", Some(from), to));
        std::mem::swap(&mut from, &mut to);
    }
    // The next `to` after the swap is where the last transition landed.
    let current = from.to_string();
    for i in 0..assignee_changes {
        histories.push(change(100 + i as i64, "assignee", None, "someone"));
    }
    issue(key, &current, histories)
}

/// In-memory issue source with configurable per-issue and search failures.
pub struct MockSource {
    issues: Vec<RawIssue>,
    fail_keys: HashSet<String>,
    fail_search: bool,
}

impl MockSource {
    pub fn new(issues: Vec<RawIssue>) -> Self {
        Self {
            issues,
            fail_keys: HashSet::new(),
            fail_search: false,
        }
    }

    pub fn failing_on<I: IntoIterator<Item = String>>(mut self, keys: I) -> Self {
        self.fail_keys = keys.into_iter().collect();
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }
}

#[async_trait]
impl IssueSource for MockSource {
    async fn fetch_issue(&self, id: &str) -> Result<RawIssue> {
        if self.fail_keys.contains(id) {
            return Err(FrictionError::fetch(id, "simulated upstream outage"));
        }
        self.issues
            .iter()
            .find(|issue| issue.key == id)
            .cloned()
            .ok_or_else(|| FrictionError::fetch(id, "unknown issue"))
    }

    async fn search_issues(&self, project_key: &str, limit: usize) -> Result<Vec<IssueRef>> {
        if self.fail_search {
            return Err(FrictionError::fetch(project_key, "search unavailable"));
        }
        Ok(self
            .issues
            .iter()
            .filter(|issue| issue.key.split('-').next() == Some(project_key))
            .take(limit)
            .map(|issue| IssueRef {
                key: issue.key.clone(),
                summary: issue.fields.summary.clone(),
                status: issue.fields.status.name.clone(),
                created: issue.fields.created.clone(),
            })
            .collect())
    }
}
