//! The issue source collaborator: the one capability the engine consumes.
//!
//! How issue data is actually retrieved (HTTP, auth, rate limits) is the
//! collaborator's business; the engine only sees fully-fetched records and
//! maps any transport failure to [`FrictionError::Fetch`].

pub mod snapshot;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::Result;

pub use snapshot::SnapshotSource;

/// Supplies fully-fetched issue records and recent-issue listings.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch one issue by key or id, changelog included.
    async fn fetch_issue(&self, id: &str) -> Result<RawIssue>;

    /// List up to `limit` issues of a project, newest-updated first.
    async fn search_issues(&self, project_key: &str, limit: usize) -> Result<Vec<IssueRef>>;
}

/// A fully-fetched issue record as the tracker exports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawIssue {
    #[serde(default)]
    pub id: Option<String>,
    pub key: String,
    pub fields: IssueFields,
    #[serde(default)]
    pub changelog: Changelog,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueFields {
    #[serde(default)]
    pub summary: String,
    pub status: StatusField,
    /// Raw creation timestamp. Parsed during analysis; absence or garbage is
    /// a data error, not a silent zero.
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusField {
    pub name: String,
}

/// Per-revision change history, as nested by the tracker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Changelog {
    #[serde(default)]
    pub histories: Vec<ChangeGroup>,
}

/// One revision: everything that changed in a single edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeGroup {
    pub created: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub items: Vec<ChangeItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(rename = "accountId", default)]
    pub account_id: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

/// A single field change within a revision, with display values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeItem {
    pub field: String,
    #[serde(rename = "fromString", default)]
    pub from: Option<String>,
    #[serde(rename = "toString", default)]
    pub to: Option<String>,
}

/// Lightweight listing entry returned by [`IssueSource::search_issues`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueRef {
    pub key: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub created: Option<String>,
}
