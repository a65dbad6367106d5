//! Lenient date parsing for values coming from browsers and the model.
//!
//! Clients send either plain calendar dates (`2025-03-14`) or full ISO-8601
//! timestamps as produced by `Date.toISOString()`; both are accepted.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::domain::types::TypeConstraintError;

/// Parse a calendar date from `YYYY-MM-DD` or an ISO-8601 timestamp.
///
/// Timestamps keep the date part as written, without time zone conversion,
/// so that `2025-03-14T00:00:00.000Z` maps to March 14th.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_local().date());
    }
    value
        .parse::<NaiveDateTime>()
        .ok()
        .map(|timestamp| timestamp.date())
}

/// Parse a UTC timestamp; plain dates resolve to midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.naive_utc());
    }
    if let Ok(timestamp) = value.parse::<NaiveDateTime>() {
        return Some(timestamp);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse the upper bound of a timestamp range; plain dates cover the whole day.
pub fn parse_timestamp_end(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.and_hms_milli_opt(23, 59, 59, 999),
        Err(_) => parse_timestamp(value),
    }
}

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting an end that precedes the start.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TypeConstraintError> {
        if end < start {
            return Err(TypeConstraintError::InvalidValue(format!(
                "date range ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Whether `date` falls inside the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Inclusive range of timestamps used for trend validity queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Build a window, rejecting an end that precedes the start.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, TypeConstraintError> {
        if end < start {
            return Err(TypeConstraintError::InvalidValue(format!(
                "time window ends ({end}) before it starts ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// A zero-length window at a single instant.
    pub fn at(instant: NaiveDateTime) -> Self {
        Self {
            start: instant,
            end: instant,
        }
    }

    /// Whether `[from, to]` overlaps this window.
    pub fn overlaps(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        from <= self.end && to >= self.start
    }
}
