use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::domain::dates::{TimeWindow, parse_timestamp, parse_timestamp_end};
use crate::domain::types::TypeConstraintError;
use crate::repository::TrendListQuery;

/// Optional validity window for the trend listing.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TrendRangeQuery {
    /// Resolve into a repository query; missing bounds fall back to `now`.
    pub fn into_list_query(
        self,
        now: NaiveDateTime,
    ) -> Result<TrendListQuery, TypeConstraintError> {
        if self.start_date.is_none() && self.end_date.is_none() {
            return Ok(TrendListQuery::active_at(now));
        }
        let start = match self.start_date.as_deref() {
            Some(raw) => parse_timestamp(raw).ok_or_else(|| {
                TypeConstraintError::InvalidValue(format!("unrecognised startDate: {raw}"))
            })?,
            None => now,
        };
        let end = match self.end_date.as_deref() {
            Some(raw) => parse_timestamp_end(raw).ok_or_else(|| {
                TypeConstraintError::InvalidValue(format!("unrecognised endDate: {raw}"))
            })?,
            None => now,
        };
        Ok(TrendListQuery::overlapping(TimeWindow::new(start, end)?))
    }
}
