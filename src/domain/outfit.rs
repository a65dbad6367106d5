use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{ClothingItemId, Occasion, OutfitId, WeatherLabel};

/// A saved combination of clothing items together with the context it was
/// picked for.
///
/// `items` reference [`crate::domain::clothing_item::ClothingItem`] ids; the
/// references are not kept in sync when items are deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Outfit {
    pub id: OutfitId,
    pub items: Vec<ClothingItemId>,
    pub occasion: Occasion,
    pub weather: WeatherLabel,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Outfit`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewOutfit {
    pub items: Vec<ClothingItemId>,
    pub occasion: Occasion,
    pub weather: WeatherLabel,
    pub created_at: NaiveDateTime,
}
