use chrono::NaiveDateTime;

use crate::db::{DbConnection, DbPool};
use crate::domain::clothing_item::{ClothingItem, NewClothingItem};
use crate::domain::dates::{DateRange, TimeWindow};
use crate::domain::outfit::{NewOutfit, Outfit};
use crate::domain::preferences::{NewPreferences, Preferences};
use crate::domain::recommendation::{NewProductRecommendation, ProductRecommendation};
use crate::domain::scheduled_outfit::{NewScheduledOutfit, ScheduledOutfit};
use crate::domain::trend::{FashionTrend, NewFashionTrend};
use crate::domain::types::{
    ClothingItemId, OutfitId, RecommendationId, ScheduledOutfitId, TrendId,
};

use errors::RepositoryResult;

pub mod clothing_item;
pub mod errors;
pub mod outfit;
pub mod preferences;
pub mod recommendation;
pub mod scheduled_outfit;
#[cfg(test)]
pub mod test;
pub mod trend;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters for listing fashion trends.
#[derive(Debug, Clone, Copy)]
pub struct TrendListQuery {
    /// Only trends whose validity window overlaps this one are returned.
    pub window: TimeWindow,
}

impl TrendListQuery {
    /// Trends valid at `instant`.
    pub fn active_at(instant: NaiveDateTime) -> Self {
        Self {
            window: TimeWindow::at(instant),
        }
    }

    /// Trends whose validity overlaps `window`.
    pub fn overlapping(window: TimeWindow) -> Self {
        Self { window }
    }
}

/// Read-only operations for clothing items.
pub trait ClothingItemReader {
    /// List every item in the wardrobe, oldest first.
    fn list_clothing_items(&self) -> RepositoryResult<Vec<ClothingItem>>;
    /// Retrieve an item by its identifier.
    fn get_clothing_item_by_id(&self, id: ClothingItemId)
    -> RepositoryResult<Option<ClothingItem>>;
}

/// Write operations for clothing items.
pub trait ClothingItemWriter {
    /// Persist a new item and return it with its assigned id.
    fn create_clothing_item(&self, item: &NewClothingItem) -> RepositoryResult<ClothingItem>;
    /// Delete an item, returning the number of removed rows.
    fn delete_clothing_item(&self, id: ClothingItemId) -> RepositoryResult<usize>;
}

/// Read-only operations for saved outfits.
pub trait OutfitReader {
    /// List outfits, newest first.
    fn list_outfits(&self) -> RepositoryResult<Vec<Outfit>>;
    /// Retrieve an outfit by its identifier.
    fn get_outfit_by_id(&self, id: OutfitId) -> RepositoryResult<Option<Outfit>>;
}

/// Write operations for saved outfits.
pub trait OutfitWriter {
    /// Persist a new outfit and return it with its assigned id.
    fn create_outfit(&self, outfit: &NewOutfit) -> RepositoryResult<Outfit>;
}

/// Read-only operations for calendar entries.
pub trait ScheduledOutfitReader {
    /// Entries whose date lies in `range`, bounds included, ordered by date.
    fn list_scheduled_outfits(&self, range: DateRange) -> RepositoryResult<Vec<ScheduledOutfit>>;
    /// Retrieve a calendar entry by its identifier.
    fn get_scheduled_outfit_by_id(
        &self,
        id: ScheduledOutfitId,
    ) -> RepositoryResult<Option<ScheduledOutfit>>;
}

/// Write operations for calendar entries.
pub trait ScheduledOutfitWriter {
    /// Persist a new calendar entry.
    fn schedule_outfit(&self, scheduled: &NewScheduledOutfit) -> RepositoryResult<ScheduledOutfit>;
    /// Remove a calendar entry, returning the number of removed rows.
    fn unschedule_outfit(&self, id: ScheduledOutfitId) -> RepositoryResult<usize>;
}

/// Read access to the preferences singleton.
pub trait PreferencesReader {
    /// The stored preferences, if any were ever saved.
    fn get_preferences(&self) -> RepositoryResult<Option<Preferences>>;
}

/// Write access to the preferences singleton.
pub trait PreferencesWriter {
    /// Replace whatever is stored with `preferences`.
    fn update_preferences(&self, preferences: &NewPreferences) -> RepositoryResult<Preferences>;
}

/// Read-only operations for shopping recommendations.
pub trait RecommendationReader {
    /// List recommendations, newest first.
    fn list_recommendations(&self) -> RepositoryResult<Vec<ProductRecommendation>>;
}

/// Write operations for shopping recommendations.
pub trait RecommendationWriter {
    /// Persist a batch of recommendations, returning the stored rows.
    fn create_recommendations(
        &self,
        recommendations: &[NewProductRecommendation],
    ) -> RepositoryResult<Vec<ProductRecommendation>>;
    /// Delete a recommendation, returning the number of removed rows.
    fn delete_recommendation(&self, id: RecommendationId) -> RepositoryResult<usize>;
}

/// Read-only operations for fashion trends.
pub trait TrendReader {
    /// List trends matching `query`, most recently started first.
    fn list_trends(&self, query: TrendListQuery) -> RepositoryResult<Vec<FashionTrend>>;
}

/// Write operations for fashion trends.
pub trait TrendWriter {
    /// Persist a batch of trends, returning the stored rows.
    fn create_trends(&self, trends: &[NewFashionTrend]) -> RepositoryResult<Vec<FashionTrend>>;
    /// Delete a trend, returning the number of removed rows.
    fn delete_trend(&self, id: TrendId) -> RepositoryResult<usize>;
}
