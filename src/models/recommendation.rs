use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::recommendation::{
    NewProductRecommendation as DomainNewRecommendation,
    ProductRecommendation as DomainRecommendation,
};
use crate::domain::types::{
    ColorName, ImageUrl, ItemType, ProductName, ProductPrice, ProductUrl, RecommendationCategory,
    RecommendationReason, TypeConstraintError,
};

/// Diesel model representing a row in the `product_recommendations` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::product_recommendations)]
pub struct ProductRecommendation {
    pub id: i32,
    pub name: String,
    pub product_type: String,
    pub color: String,
    pub price: f64,
    pub image_url: String,
    pub product_url: String,
    pub reason: String,
    pub category: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`ProductRecommendation`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::product_recommendations)]
pub struct NewProductRecommendation<'a> {
    pub name: &'a str,
    pub product_type: &'a str,
    pub color: &'a str,
    pub price: f64,
    pub image_url: &'a str,
    pub product_url: &'a str,
    pub reason: &'a str,
    pub category: &'static str,
    pub created_at: NaiveDateTime,
}

impl TryFrom<ProductRecommendation> for DomainRecommendation {
    type Error = TypeConstraintError;

    fn try_from(row: ProductRecommendation) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.try_into()?,
            name: ProductName::new(row.name)?,
            product_type: ItemType::new(row.product_type)?,
            color: ColorName::new(row.color)?,
            price: ProductPrice::new(row.price)?,
            image_url: ImageUrl::new(row.image_url)?,
            product_url: ProductUrl::new(row.product_url)?,
            reason: RecommendationReason::new(row.reason)?,
            category: RecommendationCategory::try_from(row.category)?,
            created_at: row.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewRecommendation> for NewProductRecommendation<'a> {
    fn from(recommendation: &'a DomainNewRecommendation) -> Self {
        Self {
            name: recommendation.name.as_str(),
            product_type: recommendation.product_type.as_str(),
            color: recommendation.color.as_str(),
            price: recommendation.price.get(),
            image_url: recommendation.image_url.as_str(),
            product_url: recommendation.product_url.as_str(),
            reason: recommendation.reason.as_str(),
            category: recommendation.category.as_str(),
            created_at: recommendation.created_at,
        }
    }
}
