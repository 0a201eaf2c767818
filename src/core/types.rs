//! Value objects produced and consumed by the friction analysis engine.
//!
//! Everything here is constructed per analysis call and discarded with the
//! response; there is no shared mutable state between calls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The changelog fields the engine cares about. All other field changes are
/// dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Status,
    Assignee,
}

impl FieldKind {
    /// Map a raw changelog field name onto a tracked kind.
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "status" => Some(FieldKind::Status),
            "assignee" => Some(FieldKind::Assignee),
            _ => None,
        }
    }
}

/// A single field change, flattened out of the raw per-revision changelog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub field: FieldKind,
    pub from: Option<String>,
    pub to: String,
    pub occurred_at: DateTime<Utc>,
    pub author_id: Option<String>,
}

/// One point per status change: the status entered and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusTimelinePoint {
    pub status: String,
    pub entered_at: DateTime<Utc>,
}

/// A status revisit: the issue re-entered `status` at `reentered_at` after
/// having been there at `entered_at` (the nearest prior visit, not the first
/// ever).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoopOccurrence {
    pub status: String,
    pub entered_at: DateTime<Utc>,
    pub reentered_at: DateTime<Utc>,
    pub duration_ms: u64,
}

/// A contiguous span the issue spent in one status. `end` is exclusive;
/// `None` marks the currently-open interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusInterval {
    pub status: String,
    pub start: DateTime<Utc>,
    pub end: Option<DateTime<Utc>>,
}

impl StatusInterval {
    /// Milliseconds covered by this interval, treating an open end as `now`.
    pub fn duration_ms(&self, now: DateTime<Utc>) -> i64 {
        self.end
            .unwrap_or(now)
            .signed_duration_since(self.start)
            .num_milliseconds()
    }
}

/// Raw rework signals for one issue. Consumed only by the scorer; missing
/// signals default to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignalSet {
    pub reopens: u32,
    pub loops: u32,
    pub backtracks: u32,
    pub assignee_changes: u32,
    pub idle_days: f64,
}

/// Three-tier interpretation of a friction score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrictionLevel {
    Smooth,
    Friction,
    #[serde(rename = "High Friction")]
    HighFriction,
}

impl FrictionLevel {
    /// Fixed threshold ladder, evaluated low-to-high. The high boundary is
    /// inclusive: a score of exactly 7.0 is high friction.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s < 3.0 => FrictionLevel::Smooth,
            s if s < 7.0 => FrictionLevel::Friction,
            _ => FrictionLevel::HighFriction,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FrictionLevel::Smooth => "Smooth",
            FrictionLevel::Friction => "Friction",
            FrictionLevel::HighFriction => "High Friction",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FrictionLevel::Smooth => "green",
            FrictionLevel::Friction => "orange",
            FrictionLevel::HighFriction => "red",
        }
    }
}

/// Terminal, read-only output of a single-issue analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrictionResult {
    pub issue_key: String,
    pub summary: String,
    pub score: f64,
    pub level: FrictionLevel,
    pub color: String,
    pub loops: Vec<LoopOccurrence>,
    pub assignee_changes: u32,
    /// Number of normalized change events the analysis saw.
    pub history_count: usize,
}

/// Placeholder for an issue whose analysis failed inside a batch. Excluded
/// from batch statistics, surfaced for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueFailure {
    pub issue_key: String,
    pub error: String,
    pub score: f64,
}

impl IssueFailure {
    pub fn new<K: Into<String>, E: Into<String>>(issue_key: K, error: E) -> Self {
        Self {
            issue_key: issue_key.into(),
            error: error.into(),
            score: 0.0,
        }
    }
}

/// Aggregate friction report over a sampled set of project issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectReport {
    pub project_key: String,
    /// Count of successful analyses; failed issues are not included here.
    pub issues_analyzed: usize,
    pub average_friction: f64,
    pub max_friction: f64,
    /// Successful results at or above the high-friction cutoff, descending
    /// by score (stable on ties).
    pub high_friction_issues: Vec<FrictionResult>,
    pub failures: Vec<IssueFailure>,
    pub timestamp: DateTime<Utc>,
}
