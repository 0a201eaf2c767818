//! A file-backed [`IssueSource`]: a JSON export of issue records.
//!
//! Lets the CLI analyze a tracker dump offline and gives tests a fixture
//! path that behaves exactly like a live source.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::parse_timestamp;
use crate::errors::{FrictionError, Result};
use crate::source::{IssueRef, IssueSource, RawIssue};

#[derive(Debug, Default, Serialize, Deserialize)]
struct SnapshotFile {
    #[serde(default)]
    issues: Vec<RawIssue>,
}

pub struct SnapshotSource {
    issues: Vec<RawIssue>,
}

impl SnapshotSource {
    pub fn new(issues: Vec<RawIssue>) -> Self {
        Self { issues }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        let snapshot: SnapshotFile = serde_json::from_reader(std::io::BufReader::new(file))?;
        log::debug!(
            "loaded {} issues from snapshot {}",
            snapshot.issues.len(),
            path.display()
        );
        Ok(Self::new(snapshot.issues))
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    fn belongs_to_project(issue: &RawIssue, project_key: &str) -> bool {
        issue.key.split('-').next() == Some(project_key)
    }

    /// Best-effort ordering key: updated, falling back to created, falling
    /// back to the epoch for records carrying neither.
    fn updated_at(issue: &RawIssue) -> i64 {
        issue
            .fields
            .updated
            .as_deref()
            .or(issue.fields.created.as_deref())
            .and_then(|raw| parse_timestamp(raw).ok())
            .map(|ts| ts.timestamp_millis())
            .unwrap_or(0)
    }
}

#[async_trait]
impl IssueSource for SnapshotSource {
    async fn fetch_issue(&self, id: &str) -> Result<RawIssue> {
        self.issues
            .iter()
            .find(|issue| issue.key == id || issue.id.as_deref() == Some(id))
            .cloned()
            .ok_or_else(|| FrictionError::fetch(id, "issue not present in snapshot"))
    }

    async fn search_issues(&self, project_key: &str, limit: usize) -> Result<Vec<IssueRef>> {
        let mut matched: Vec<&RawIssue> = self
            .issues
            .iter()
            .filter(|issue| Self::belongs_to_project(issue, project_key))
            .collect();
        matched.sort_by_key(|issue| std::cmp::Reverse(Self::updated_at(issue)));

        Ok(matched
            .into_iter()
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
