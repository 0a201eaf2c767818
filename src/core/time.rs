//! Timestamp parsing and day-rounding helpers shared across the engine.

use chrono::{DateTime, Utc};

use crate::errors::{FrictionError, Result};

pub const MS_PER_DAY: i64 = 86_400_000;

/// Parse a tracker-exported timestamp into UTC.
///
/// Accepts RFC 3339 (`2024-03-01T10:15:30+00:00`, `...Z`) as well as the
/// colon-less offset form many trackers emit (`2024-03-01T10:15:30.000+0000`).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.3f%z")
        .map(|parsed| parsed.with_timezone(&Utc))
        .map_err(|err| FrictionError::data(format!("unparsable timestamp {raw:?}: {err}")))
}

/// Round a millisecond span up to whole days. Negative spans clamp to zero.
pub fn ceil_days(ms: i64) -> u64 {
    if ms <= 0 {
        0
    } else {
        (ms as u64).div_ceil(MS_PER_DAY as u64)
    }
}
