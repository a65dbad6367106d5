use diesel::prelude::*;

use crate::domain::clothing_item::{ClothingItem, NewClothingItem};
use crate::domain::types::ClothingItemId;
use crate::models::clothing_item::{
    ClothingItem as DbClothingItem, NewClothingItem as DbNewClothingItem,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClothingItemReader, ClothingItemWriter, DieselRepository};

impl ClothingItemReader for DieselRepository {
    fn list_clothing_items(&self) -> RepositoryResult<Vec<ClothingItem>> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;

        let items = clothing_items::table
            .order(clothing_items::id.asc())
            .load::<DbClothingItem>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<ClothingItem>, _>>()?;

        Ok(items)
    }

    fn get_clothing_item_by_id(
        &self,
        id: ClothingItemId,
    ) -> RepositoryResult<Option<ClothingItem>> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;

        let item = clothing_items::table
            .filter(clothing_items::id.eq(id.get()))
            .first::<DbClothingItem>(&mut conn)
            .optional()?;

        let item = item.map(TryInto::try_into).transpose()?;
        Ok(item)
    }
}

impl ClothingItemWriter for DieselRepository {
    fn create_clothing_item(&self, item: &NewClothingItem) -> RepositoryResult<ClothingItem> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;
        let db_item: DbNewClothingItem = item.into();

        let created = diesel::insert_into(clothing_items::table)
            .values(&db_item)
            .get_result::<DbClothingItem>(&mut conn)?;

        let created: ClothingItem = created.try_into()?;
        Ok(created)
    }

    fn delete_clothing_item(&self, id: ClothingItemId) -> RepositoryResult<usize> {
        use crate::schema::clothing_items;

        let mut conn = self.conn()?;

        let affected =
            diesel::delete(clothing_items::table.filter(clothing_items::id.eq(id.get())))
                .execute(&mut conn)?;

        Ok(affected)
    }
}
