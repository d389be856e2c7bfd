use chrono::{DateTime, Utc};
use std::time::Duration;

/// Nanoseconds since the Unix epoch, saturating outside the range an `i64`
/// can hold (roughly the years 1677 to 2262).
pub fn unix_nanos(t: &DateTime<Utc>) -> i64 {
    t.timestamp_nanos_opt().unwrap_or(
        if t.timestamp() < 0 { i64::MIN } else { i64::MAX }
    )
}

/// A `Duration` in nanoseconds, saturating at `i64::MAX`.
pub fn duration_nanos(d: Duration) -> i64 {
    i64::try_from(d.as_nanos()).unwrap_or(i64::MAX)
}

pub fn now_nanos() -> i64 {
    unix_nanos(&Utc::now())
}
