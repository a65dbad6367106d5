use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::scheduled_outfit::{
    NewScheduledOutfit as DomainNewScheduledOutfit, ScheduledOutfit as DomainScheduledOutfit,
};
use crate::domain::types::{ScheduleNotes, TypeConstraintError};

/// Diesel model representing a row in the `scheduled_outfits` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::scheduled_outfits)]
pub struct ScheduledOutfit {
    pub id: i32,
    pub outfit_id: i32,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`ScheduledOutfit`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::scheduled_outfits)]
pub struct NewScheduledOutfit<'a> {
    pub outfit_id: i32,
    pub date: NaiveDate,
    pub notes: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ScheduledOutfit> for DomainScheduledOutfit {
    type Error = TypeConstraintError;

    fn try_from(scheduled: ScheduledOutfit) -> Result<Self, Self::Error> {
        Ok(Self {
            id: scheduled.id.try_into()?,
            outfit_id: scheduled.outfit_id.try_into()?,
            date: scheduled.date,
            // Blank notes are tolerated in storage and surface as absent.
            notes: scheduled.notes.and_then(|notes| ScheduleNotes::new(notes).ok()),
            created_at: scheduled.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewScheduledOutfit> for NewScheduledOutfit<'a> {
    fn from(scheduled: &'a DomainNewScheduledOutfit) -> Self {
        Self {
            outfit_id: scheduled.outfit_id.get(),
            date: scheduled.date,
            notes: scheduled.notes.as_ref().map(|notes| notes.as_str()),
            created_at: scheduled.created_at,
        }
    }
}
