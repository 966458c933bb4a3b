//! Clock-time parsing and the minute arithmetic the engine runs on.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveTime, Utc};

/// Minutes since the Unix epoch; the pairing engine's working unit.
pub fn epoch_minutes(ts: DateTime<Utc>) -> i64 {
    ts.timestamp().div_euclid(60)
}

/// Parse `HH:MM` or `HH:MM:SS`.
pub fn parse_clock(s: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| AppError::InvalidTimeFormat(s.to_string()))
}
