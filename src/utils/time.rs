//! Time-of-day parsing: `HH:MM[:SS]` strings to fractional hours.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// End of day, which `NaiveTime` cannot represent.
const END_OF_DAY: [&str; 2] = ["24:00", "24:00:00"];

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M:%S"))
        .ok()
}

/// Parse a time-of-day into fractional hours in `[0, 24]`.
///
/// `"06:30"` → `6.5`, `"24:00"` → `24.0`.
pub fn parse_hours(t: &str) -> AppResult<f64> {
    let t = t.trim();

    if END_OF_DAY.contains(&t) {
        return Ok(24.0);
    }

    let time = parse_time(t)
        .ok_or_else(|| AppError::malformed_time(t, "expected HH:MM, HH:MM:SS or 24:00"))?;

    Ok(time_to_hours(time))
}

pub fn time_to_hours(time: NaiveTime) -> f64 {
    time.hour() as f64 + time.minute() as f64 / 60.0 + time.second() as f64 / 3600.0
}

/// Inverse of `parse_hours` for display, rounded to the minute.
pub fn format_hours(hours: f64) -> String {
    let total = (hours * 60.0).round() as i64;
    format!("{:02}:{:02}", total / 60, total % 60)
}
