use diesel::prelude::*;

use crate::domain::dates::DateRange;
use crate::domain::scheduled_outfit::{NewScheduledOutfit, ScheduledOutfit};
use crate::domain::types::ScheduledOutfitId;
use crate::models::scheduled_outfit::{
    NewScheduledOutfit as DbNewScheduledOutfit, ScheduledOutfit as DbScheduledOutfit,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ScheduledOutfitReader, ScheduledOutfitWriter};

impl ScheduledOutfitReader for DieselRepository {
    fn list_scheduled_outfits(&self, range: DateRange) -> RepositoryResult<Vec<ScheduledOutfit>> {
        use crate::schema::scheduled_outfits;

        let mut conn = self.conn()?;

        let items = scheduled_outfits::table
            .filter(scheduled_outfits::date.between(range.start, range.end))
            .order((scheduled_outfits::date.asc(), scheduled_outfits::id.asc()))
            .load::<DbScheduledOutfit>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ScheduledOutfit>, _>>()?;

        Ok(items)
    }

    fn get_scheduled_outfit_by_id(
        &self,
        id: ScheduledOutfitId,
    ) -> RepositoryResult<Option<ScheduledOutfit>> {
        use crate::schema::scheduled_outfits;

        let mut conn = self.conn()?;

        let scheduled = scheduled_outfits::table
            .filter(scheduled_outfits::id.eq(id.get()))
            .first::<DbScheduledOutfit>(&mut conn)
            .optional()?;

        let scheduled = scheduled.map(TryInto::try_into).transpose()?;
        Ok(scheduled)
    }
}

impl ScheduledOutfitWriter for DieselRepository {
    fn schedule_outfit(&self, scheduled: &NewScheduledOutfit) -> RepositoryResult<ScheduledOutfit> {
        use crate::schema::scheduled_outfits;

        let mut conn = self.conn()?;
        let db_scheduled: DbNewScheduledOutfit = scheduled.into();

        let created = diesel::insert_into(scheduled_outfits::table)
            .values(&db_scheduled)
            .get_result::<DbScheduledOutfit>(&mut conn)?;

        let created: ScheduledOutfit = created.try_into()?;
        Ok(created)
    }

    fn unschedule_outfit(&self, id: ScheduledOutfitId) -> RepositoryResult<usize> {
        use crate::schema::scheduled_outfits;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(scheduled_outfits::table.filter(scheduled_outfits::id.eq(id.get())))
                .execute(&mut conn)?;

        Ok(affected)
    }
}
