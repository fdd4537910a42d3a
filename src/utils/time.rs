//! Time utilities: parsing HH:MM, timestamp parsing, formatting minutes.

use crate::errors::{AppError, AppResult};
use crate::models::event::TIMESTAMP_FORMAT;
use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Parse the `--at` argument of `add`: either a full timestamp
/// (`YYYY-MM-DD HH:MM[:SS]`) or a bare time of day resolved against `today`.
pub fn parse_event_timestamp(input: &str, today: chrono::NaiveDate) -> AppResult<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT) {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return Ok(dt);
    }
    if let Some(t) = parse_time(input) {
        return Ok(today.and_time(t));
    }
    Err(AppError::InvalidTimestamp(input.to_string()))
}

/// Minutes since midnight (0–1439), seconds discarded.
pub fn clock_minutes(t: NaiveTime) -> i64 {
    i64::from(t.hour()) * 60 + i64::from(t.minute())
}

pub fn format_clock_minutes(mins: i64) -> String {
    format!("{:02}:{:02}", mins / 60, mins % 60)
}
