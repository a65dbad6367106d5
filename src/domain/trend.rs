use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    ImageUrl, Season, TrendCategory, TrendDescription, TrendId, TrendSource, TrendTitle,
    TypeConstraintError,
};

/// A fashion trend summary valid for a bounded period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FashionTrend {
    pub id: TrendId,
    pub title: TrendTitle,
    pub description: TrendDescription,
    pub category: TrendCategory,
    pub season: Season,
    pub image_url: Option<ImageUrl>,
    pub source: Option<TrendSource>,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl FashionTrend {
    /// Whether the trend is valid at `instant`, bounds included.
    pub fn is_valid_at(&self, instant: NaiveDateTime) -> bool {
        self.valid_from <= instant && instant <= self.valid_to
    }
}

/// Data required to insert a new [`FashionTrend`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewFashionTrend {
    pub title: TrendTitle,
    pub description: TrendDescription,
    pub category: TrendCategory,
    pub season: Season,
    pub image_url: Option<ImageUrl>,
    pub source: Option<TrendSource>,
    pub valid_from: NaiveDateTime,
    pub valid_to: NaiveDateTime,
    pub created_at: NaiveDateTime,
}

impl NewFashionTrend {
    /// Ensures the validity window is not inverted.
    pub fn check_window(&self) -> Result<(), TypeConstraintError> {
        if self.valid_to < self.valid_from {
            return Err(TypeConstraintError::InvalidValue(format!(
                "trend \"{}\" expires before it starts",
                self.title
            )));
        }
        Ok(())
    }
}
