use diesel::prelude::*;

use crate::domain::clothing_item::{
    ClothingItem as DomainClothingItem, NewClothingItem as DomainNewClothingItem,
};
use crate::domain::types::{
    ColorName, ItemImage, ItemName, ItemType, Occasion, Season, TypeConstraintError,
};

/// Diesel model representing a row in the `clothing_items` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::clothing_items)]
pub struct ClothingItem {
    pub id: i32,
    pub name: String,
    pub item_type: String,
    pub color: String,
    pub season: String,
    pub occasion: String,
    pub image_url: String,
}

/// Insertable form of [`ClothingItem`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::clothing_items)]
pub struct NewClothingItem<'a> {
    pub name: &'a str,
    pub item_type: &'a str,
    pub color: &'a str,
    pub season: &'a str,
    pub occasion: &'a str,
    pub image_url: &'a str,
}

impl TryFrom<ClothingItem> for DomainClothingItem {
    type Error = TypeConstraintError;

    fn try_from(item: ClothingItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: item.id.try_into()?,
            name: ItemName::new(item.name)?,
            item_type: ItemType::new(item.item_type)?,
            color: ColorName::new(item.color)?,
            season: Season::new(item.season)?,
            occasion: Occasion::new(item.occasion)?,
            image_url: ItemImage::new(item.image_url)?,
        })
    }
}

impl<'a> From<&'a DomainNewClothingItem> for NewClothingItem<'a> {
    fn from(item: &'a DomainNewClothingItem) -> Self {
        Self {
            name: item.name.as_str(),
            item_type: item.item_type.as_str(),
            color: item.color.as_str(),
            season: item.season.as_str(),
            occasion: item.occasion.as_str(),
            image_url: item.image_url.as_str(),
        }
    }
}
