use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::trend::{FashionTrend as DomainTrend, NewFashionTrend as DomainNewTrend};
use crate::domain::types::{
    ImageUrl, Season, TrendCategory, TrendDescription, TrendSource, TrendTitle,
    TypeConstraintError,
};

/// Diesel model representing a row in the `fashion_trends` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::fashion_trends)]
pub struct FashionTrend {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub category: String,
    pub season: String,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`FashionTrend`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::fashion_trends)]
pub struct NewFashionTrend<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub season: &'a str,
    pub image_url: Option<&'a str>,
    pub source: Option<&'a str>,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl TryFrom<FashionTrend> for DomainTrend {
    type Error = TypeConstraintError;

    fn try_from(row: FashionTrend) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.try_into()?,
            title: TrendTitle::new(row.title)?,
            description: TrendDescription::new(row.description)?,
            category: TrendCategory::new(row.category)?,
            season: Season::new(row.season)?,
            image_url: row.image_url.map(ImageUrl::new).transpose()?,
            source: row.source.map(TrendSource::new).transpose()?,
            valid_from: row.valid_from,
            valid_to: row.valid_to,
            created_at: row.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewTrend> for NewFashionTrend<'a> {
    fn from(trend: &'a DomainNewTrend) -> Self {
        Self {
            title: trend.title.as_str(),
            description: trend.description.as_str(),
            category: trend.category.as_str(),
            season: trend.season.as_str(),
            image_url: trend.image_url.as_ref().map(|url| url.as_str()),
            source: trend.source.as_ref().map(|source| source.as_str()),
            valid_from: trend.valid_from,
            valid_to: trend.valid_to,
            created_at: trend.created_at,
        }
    }
}
