//! Time-in-status interval reconstruction, the basis of idle-time measurement.
//!
//! A changelog only says "at time T the status changed from A to B"; the time
//! actually *spent* in each status has to be rebuilt by walking the events
//! forward from the issue's creation.

use chrono::{DateTime, Utc};

use crate::core::{ceil_days, ChangeEvent, FieldKind, StatusInterval};

/// Rebuild the contiguous, non-overlapping status intervals covering the
/// issue's lifetime from `created` onward; the last interval is open-ended.
///
/// The walk seeds its cursor at `created` with the `from` side of the first
/// status event (the issue's initial status), closes an interval at every
/// status event, and leaves the final interval open. With no status events
/// at all the issue has lived its whole life in `current_status`.
///
/// If the walked-to final status disagrees with the tracker's reported
/// current status the changelog is incomplete; that is logged as a
/// data-quality warning, not treated as fatal.
pub fn reconstruct_intervals(
    events: &[ChangeEvent],
    created: DateTime<Utc>,
    current_status: &str,
) -> Vec<StatusInterval> {
    let status_events: Vec<&ChangeEvent> = events
        .iter()
        .filter(|event| event.field == FieldKind::Status)
        .collect();

    let mut intervals = Vec::with_capacity(status_events.len() + 1);
    let mut cursor = created;
    let mut status = match status_events.first() {
        Some(first) => first
            .from
            .clone()
            .unwrap_or_else(|| current_status.to_string()),
        None => current_status.to_string(),
    };

    for event in &status_events {
        intervals.push(StatusInterval {
            status,
            start: cursor,
            end: Some(event.occurred_at),
        });
        cursor = event.occurred_at;
        status = event.to.clone();
    }

    if status != current_status {
        log::warn!(
            "changelog ends in status {status:?} but the issue reports {current_status:?}; \
             history may be incomplete"
        );
    }

    intervals.push(StatusInterval {
        status,
        start: cursor,
        end: None,
    });

    intervals
}

/// Total whole days spent in any of the idle statuses (case-sensitive exact
/// match), rounded up from the summed milliseconds.
pub fn idle_days(
    intervals: &[StatusInterval],
    idle_statuses: &[String],
    now: DateTime<Utc>,
) -> f64 {
    let total_ms: i64 = intervals
        .iter()
        .filter(|interval| idle_statuses.iter().any(|idle| *idle == interval.status))
        .map(|interval| interval.duration_ms(now).max(0))
        .sum();
    ceil_days(total_ms) as f64
}
