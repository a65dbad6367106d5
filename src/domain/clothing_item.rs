use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ClothingItemId, ColorName, ItemImage, ItemName, ItemType, Occasion, Season,
};

/// A garment in the user's wardrobe.
///
/// Items are immutable once created; the only mutation is deletion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClothingItem {
    pub id: ClothingItemId,
    pub name: ItemName,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub color: ColorName,
    pub season: Season,
    pub occasion: Occasion,
    pub image_url: ItemImage,
}

/// Data required to insert a new [`ClothingItem`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewClothingItem {
    pub name: ItemName,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub color: ColorName,
    pub season: Season,
    pub occasion: Occasion,
    pub image_url: ItemImage,
}
