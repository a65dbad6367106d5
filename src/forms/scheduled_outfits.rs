use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::dates::{DateRange, parse_calendar_date};
use crate::domain::scheduled_outfit::NewScheduledOutfit;
use crate::domain::types::{OutfitId, ScheduleNotes, TypeConstraintError};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOutfitForm {
    #[validate(range(min = 1))]
    pub outfit_id: i32,
    #[validate(length(min = 1))]
    pub date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleOutfitFormPayload {
    pub outfit_id: OutfitId,
    pub date: NaiveDate,
    pub notes: Option<ScheduleNotes>,
}

impl ScheduleOutfitFormPayload {
    pub fn into_new_scheduled_outfit(self, created_at: NaiveDateTime) -> NewScheduledOutfit {
        NewScheduledOutfit {
            outfit_id: self.outfit_id,
            date: self.date,
            notes: self.notes,
            created_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScheduleOutfitFormError {
    #[error("Scheduled outfit validation failed: {0}")]
    Validation(String),
    #[error("Scheduled outfit contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for ScheduleOutfitFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for ScheduleOutfitFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<ScheduleOutfitForm> for ScheduleOutfitFormPayload {
    type Error = ScheduleOutfitFormError;

    fn try_from(value: ScheduleOutfitForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let date = parse_calendar_date(&value.date).ok_or_else(|| {
            TypeConstraintError::InvalidValue(format!("unrecognised date: {}", value.date))
        })?;
        // Blank notes are the same as no notes.
        let notes = value
            .notes
            .filter(|notes| !notes.trim().is_empty())
            .map(ScheduleNotes::new)
            .transpose()?;

        Ok(Self {
            outfit_id: OutfitId::new(value.outfit_id)?,
            date,
            notes,
        })
    }
}

/// Query string of the calendar range lookup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledOutfitRangeQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl TryFrom<ScheduledOutfitRangeQuery> for DateRange {
    type Error = TypeConstraintError;

    fn try_from(value: ScheduledOutfitRangeQuery) -> Result<Self, Self::Error> {
        let parse = |raw: Option<String>, field: &str| {
            raw.as_deref().and_then(parse_calendar_date).ok_or_else(|| {
                TypeConstraintError::InvalidValue(format!("{field} must be a date"))
            })
        };
        let start = parse(value.start_date, "startDate")?;
        let end = parse(value.end_date, "endDate")?;
        DateRange::new(start, end)
    }
}
