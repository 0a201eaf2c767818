//! Status loop detection and assignee churn counting.

use crate::core::{ChangeEvent, FieldKind, LoopOccurrence, StatusTimelinePoint};

/// Build the status timeline from a normalized event sequence: one point per
/// status change, value taken from the event's `to` side.
pub fn status_timeline(events: &[ChangeEvent]) -> Vec<StatusTimelinePoint> {
    events
        .iter()
        .filter(|event| event.field == FieldKind::Status)
        .map(|event| StatusTimelinePoint {
            status: event.to.clone(),
            entered_at: event.occurred_at,
        })
        .collect()
}

/// Detect status revisits ("ping-pong" loops).
///
/// Each timeline point is paired with the nearest earlier point carrying the
/// same status, which captures the tightest cycle and bounds the loop count
/// to N-1. The backward scan is O(N^2) in the worst case; issue histories
/// are at most a few hundred events, so that is fine here.
pub fn detect_status_loops(timeline: &[StatusTimelinePoint]) -> Vec<LoopOccurrence> {
    let mut loops = Vec::new();

    for (i, point) in timeline.iter().enumerate() {
        let Some(j) = timeline[..i]
            .iter()
            .rposition(|earlier| earlier.status == point.status)
        else {
            continue;
        };
        let duration_ms = point
            .entered_at
            .signed_duration_since(timeline[j].entered_at)
            .num_milliseconds()
            .max(0) as u64;
        loops.push(LoopOccurrence {
            status: point.status.clone(),
            entered_at: timeline[j].entered_at,
            reentered_at: point.entered_at,
            duration_ms,
        });
    }

    loops
}

/// Count assignee change events. No dedup: handing an issue back to a prior
/// assignee still counts as churn.
pub fn count_assignee_changes(events: &[ChangeEvent]) -> u32 {
    events
        .iter()
        .filter(|event| event.field == FieldKind::Assignee)
        .count() as u32
}
