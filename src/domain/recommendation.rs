use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ColorName, ImageUrl, ItemType, ProductName, ProductPrice, ProductUrl, RecommendationCategory,
    RecommendationId, RecommendationReason,
};

/// A product suggested to fill a gap in, or complement, the wardrobe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecommendation {
    pub id: RecommendationId,
    pub name: ProductName,
    #[serde(rename = "type")]
    pub product_type: ItemType,
    pub color: ColorName,
    pub price: ProductPrice,
    pub image_url: ImageUrl,
    pub product_url: ProductUrl,
    pub reason: RecommendationReason,
    pub category: RecommendationCategory,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`ProductRecommendation`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProductRecommendation {
    pub name: ProductName,
    #[serde(rename = "type")]
    pub product_type: ItemType,
    pub color: ColorName,
    pub price: ProductPrice,
    pub image_url: ImageUrl,
    pub product_url: ProductUrl,
    pub reason: RecommendationReason,
    pub category: RecommendationCategory,
    pub created_at: NaiveDateTime,
}
