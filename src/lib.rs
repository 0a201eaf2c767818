// Export modules for library usage
pub mod aggregator;
pub mod analysis;
pub mod analyzer;
pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod io;
pub mod source;

// Re-export commonly used types
pub use crate::core::{
    ChangeEvent, FieldKind, FrictionLevel, FrictionResult, IssueFailure, LoopOccurrence,
    ProjectReport, SignalSet, StatusInterval, StatusTimelinePoint,
};

pub use crate::analysis::{
    count_assignee_changes, detect_status_loops, idle_days, normalize_changelog,
    reconstruct_intervals, status_timeline, DefaultClassifier, FrictionScorer, StatusClassifier,
};

pub use crate::aggregator::ProjectAggregator;
pub use crate::analyzer::IssueAnalyzer;
pub use crate::api::{analyze_issue, analyze_project, ErrorEnvelope, IssueResponse, ProjectResponse};
pub use crate::config::{FrictionConfig, ScoringWeights};
pub use crate::errors::{FrictionError, Result};
pub use crate::io::{create_writer, OutputFormat, OutputWriter};
pub use crate::source::{IssueRef, IssueSource, RawIssue, SnapshotSource};
