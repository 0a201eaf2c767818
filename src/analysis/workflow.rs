//! Workflow-aware transition classification.
//!
//! Telling a reopen (Done back to In Progress) or a backtrack (a move
//! against the workflow's direction) apart from an ordinary transition needs
//! to know which statuses are terminal and how the workflow is ordered. The
//! tracker export does not carry that metadata, so the knowledge lives
//! behind this trait.

use crate::core::StatusTimelinePoint;

pub trait StatusClassifier: Send + Sync {
    /// Transitions that reopened a completed issue.
    fn count_reopens(&self, timeline: &[StatusTimelinePoint]) -> u32;

    /// Transitions that moved backward in the workflow without reopening.
    fn count_backtracks(&self, timeline: &[StatusTimelinePoint]) -> u32;
}

/// Classifier used until workflow category metadata is wired in. Reports
/// zero for both signals, leaving loops as the only transition-shape signal
/// in the score.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultClassifier;

impl StatusClassifier for DefaultClassifier {
    fn count_reopens(&self, _timeline: &[StatusTimelinePoint]) -> u32 {
        0
    }

    fn count_backtracks(&self, _timeline: &[StatusTimelinePoint]) -> u32 {
        0
    }
}
