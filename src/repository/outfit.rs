use diesel::prelude::*;

use crate::domain::outfit::{NewOutfit, Outfit};
use crate::domain::types::OutfitId;
use crate::models::outfit::{NewOutfit as DbNewOutfit, Outfit as DbOutfit};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, OutfitReader, OutfitWriter};

impl OutfitReader for DieselRepository {
    fn list_outfits(&self) -> RepositoryResult<Vec<Outfit>> {
        use crate::schema::outfits;

        let mut conn = self.conn()?;

        let items = outfits::table
            .order((outfits::created_at.desc(), outfits::id.desc()))
            .load::<DbOutfit>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Outfit>, _>>()?;

        Ok(items)
    }

    fn get_outfit_by_id(&self, id: OutfitId) -> RepositoryResult<Option<Outfit>> {
        use crate::schema::outfits;

        let mut conn = self.conn()?;

        let outfit = outfits::table
            .filter(outfits::id.eq(id.get()))
            .first::<DbOutfit>(&mut conn)
            .optional()?;

        let outfit = outfit.map(TryInto::try_into).transpose()?;
        Ok(outfit)
    }
}

impl OutfitWriter for DieselRepository {
    fn create_outfit(&self, outfit: &NewOutfit) -> RepositoryResult<Outfit> {
        use crate::schema::outfits;

        let mut conn = self.conn()?;
        let db_outfit: DbNewOutfit = outfit.into();

        let created = diesel::insert_into(outfits::table)
            .values(&db_outfit)
            .get_result::<DbOutfit>(&mut conn)?;

        let created: Outfit = created.try_into()?;
        Ok(created)
    }
}
