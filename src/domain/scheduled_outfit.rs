use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::domain::types::{OutfitId, ScheduleNotes, ScheduledOutfitId};

/// An outfit planned for a calendar day.
///
/// The same outfit may be scheduled on any number of dates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledOutfit {
    pub id: ScheduledOutfitId,
    pub outfit_id: OutfitId,
    pub date: NaiveDate,
    pub notes: Option<ScheduleNotes>,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`ScheduledOutfit`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewScheduledOutfit {
    pub outfit_id: OutfitId,
    pub date: NaiveDate,
    pub notes: Option<ScheduleNotes>,
    pub created_at: NaiveDateTime,
}
