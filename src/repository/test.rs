use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use crate::domain::clothing_item::{ClothingItem, NewClothingItem};
use crate::domain::dates::DateRange;
use crate::domain::outfit::{NewOutfit, Outfit};
use crate::domain::preferences::{NewPreferences, Preferences};
use crate::domain::recommendation::{NewProductRecommendation, ProductRecommendation};
use crate::domain::scheduled_outfit::{NewScheduledOutfit, ScheduledOutfit};
use crate::domain::trend::{FashionTrend, NewFashionTrend};
use crate::domain::types::{
    ClothingItemId, OutfitId, PreferencesId, RecommendationId, ScheduledOutfitId, TrendId,
};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClothingItemReader, ClothingItemWriter, OutfitReader, OutfitWriter, PreferencesReader,
    PreferencesWriter, RecommendationReader, RecommendationWriter, ScheduledOutfitReader,
    ScheduledOutfitWriter, TrendListQuery, TrendReader, TrendWriter,
};

#[derive(Default)]
struct State {
    next_id: i32,
    clothing_items: BTreeMap<ClothingItemId, ClothingItem>,
    outfits: BTreeMap<OutfitId, Outfit>,
    scheduled_outfits: BTreeMap<ScheduledOutfitId, ScheduledOutfit>,
    preferences: Option<Preferences>,
    recommendations: BTreeMap<RecommendationId, ProductRecommendation>,
    trends: BTreeMap<TrendId, FashionTrend>,
}

impl State {
    /// Ids are shared across tables; they only need to be unique and increasing.
    fn allocate_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }
}

/// Simple in-memory repository used for unit tests.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<State>,
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clothing_items(self, items: Vec<NewClothingItem>) -> Self {
        for item in &items {
            self.create_clothing_item(item)
                .expect("in-memory insert cannot fail");
        }
        self
    }

    pub fn with_trends(self, trends: Vec<NewFashionTrend>) -> Self {
        self.create_trends(&trends)
            .expect("in-memory insert cannot fail");
        self
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().expect("test repository mutex poisoned")
    }

    fn id<T: TryFrom<i32>>(raw: i32) -> T
    where
        T::Error: std::fmt::Debug,
    {
        T::try_from(raw).expect("allocated ids are positive")
    }
}

impl ClothingItemReader for TestRepository {
    fn list_clothing_items(&self) -> RepositoryResult<Vec<ClothingItem>> {
        Ok(self.state().clothing_items.values().cloned().collect())
    }

    fn get_clothing_item_by_id(
        &self,
        id: ClothingItemId,
    ) -> RepositoryResult<Option<ClothingItem>> {
        Ok(self.state().clothing_items.get(&id).cloned())
    }
}

impl ClothingItemWriter for TestRepository {
    fn create_clothing_item(&self, item: &NewClothingItem) -> RepositoryResult<ClothingItem> {
        let mut state = self.state();
        let id: ClothingItemId = Self::id(state.allocate_id());
        let created = ClothingItem {
            id,
            name: item.name.clone(),
            item_type: item.item_type.clone(),
            color: item.color.clone(),
            season: item.season.clone(),
            occasion: item.occasion.clone(),
            image_url: item.image_url.clone(),
        };
        state.clothing_items.insert(id, created.clone());
        Ok(created)
    }

    fn delete_clothing_item(&self, id: ClothingItemId) -> RepositoryResult<usize> {
        Ok(self.state().clothing_items.remove(&id).map_or(0, |_| 1))
    }
}

impl OutfitReader for TestRepository {
    fn list_outfits(&self) -> RepositoryResult<Vec<Outfit>> {
        Ok(self.state().outfits.values().rev().cloned().collect())
    }

    fn get_outfit_by_id(&self, id: OutfitId) -> RepositoryResult<Option<Outfit>> {
        Ok(self.state().outfits.get(&id).cloned())
    }
}

impl OutfitWriter for TestRepository {
    fn create_outfit(&self, outfit: &NewOutfit) -> RepositoryResult<Outfit> {
        let mut state = self.state();
        let id: OutfitId = Self::id(state.allocate_id());
        let created = Outfit {
            id,
            items: outfit.items.clone(),
            occasion: outfit.occasion.clone(),
            weather: outfit.weather.clone(),
            created_at: outfit.created_at,
        };
        state.outfits.insert(id, created.clone());
        Ok(created)
    }
}

impl ScheduledOutfitReader for TestRepository {
    fn list_scheduled_outfits(&self, range: DateRange) -> RepositoryResult<Vec<ScheduledOutfit>> {
        let mut items: Vec<ScheduledOutfit> = self
            .state()
            .scheduled_outfits
            .values()
            .filter(|s| range.contains(s.date))
            .cloned()
            .collect();
        items.sort_by_key(|s| (s.date, s.id));
        Ok(items)
    }

    fn get_scheduled_outfit_by_id(
        &self,
        id: ScheduledOutfitId,
    ) -> RepositoryResult<Option<ScheduledOutfit>> {
        Ok(self.state().scheduled_outfits.get(&id).cloned())
    }
}

impl ScheduledOutfitWriter for TestRepository {
    fn schedule_outfit(&self, scheduled: &NewScheduledOutfit) -> RepositoryResult<ScheduledOutfit> {
        let mut state = self.state();
        let id: ScheduledOutfitId = Self::id(state.allocate_id());
        let created = ScheduledOutfit {
            id,
            outfit_id: scheduled.outfit_id,
            date: scheduled.date,
            notes: scheduled.notes.clone(),
            created_at: scheduled.created_at,
        };
        state.scheduled_outfits.insert(id, created.clone());
        Ok(created)
    }

    fn unschedule_outfit(&self, id: ScheduledOutfitId) -> RepositoryResult<usize> {
        Ok(self.state().scheduled_outfits.remove(&id).map_or(0, |_| 1))
    }
}

impl PreferencesReader for TestRepository {
    fn get_preferences(&self) -> RepositoryResult<Option<Preferences>> {
        Ok(self.state().preferences.clone())
    }
}

impl PreferencesWriter for TestRepository {
    fn update_preferences(&self, preferences: &NewPreferences) -> RepositoryResult<Preferences> {
        let mut state = self.state();
        let id: PreferencesId = Self::id(state.allocate_id());
        let stored = Preferences {
            id,
            style_preferences: preferences.style_preferences.clone(),
            color_preferences: preferences.color_preferences.clone(),
        };
        state.preferences = Some(stored.clone());
        Ok(stored)
    }
}

impl RecommendationReader for TestRepository {
    fn list_recommendations(&self) -> RepositoryResult<Vec<ProductRecommendation>> {
        Ok(self.state().recommendations.values().rev().cloned().collect())
    }
}

impl RecommendationWriter for TestRepository {
    fn create_recommendations(
        &self,
        recommendations: &[NewProductRecommendation],
    ) -> RepositoryResult<Vec<ProductRecommendation>> {
        let mut state = self.state();
        let mut stored = Vec::with_capacity(recommendations.len());
        for recommendation in recommendations {
            let id: RecommendationId = Self::id(state.allocate_id());
            let created = ProductRecommendation {
                id,
                name: recommendation.name.clone(),
                product_type: recommendation.product_type.clone(),
                color: recommendation.color.clone(),
                price: recommendation.price,
                image_url: recommendation.image_url.clone(),
                product_url: recommendation.product_url.clone(),
                reason: recommendation.reason.clone(),
                category: recommendation.category,
                created_at: recommendation.created_at,
            };
            state.recommendations.insert(id, created.clone());
            stored.push(created);
        }
        Ok(stored)
    }

    fn delete_recommendation(&self, id: RecommendationId) -> RepositoryResult<usize> {
        Ok(self.state().recommendations.remove(&id).map_or(0, |_| 1))
    }
}

impl TrendReader for TestRepository {
    fn list_trends(&self, query: TrendListQuery) -> RepositoryResult<Vec<FashionTrend>> {
        let mut items: Vec<FashionTrend> = self
            .state()
            .trends
            .values()
            .filter(|t| query.window.overlaps(t.valid_from, t.valid_to))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.valid_from.cmp(&a.valid_from).then(b.id.cmp(&a.id)));
        Ok(items)
    }
}

impl TrendWriter for TestRepository {
    fn create_trends(&self, trends: &[NewFashionTrend]) -> RepositoryResult<Vec<FashionTrend>> {
        let mut state = self.state();
        let mut stored = Vec::with_capacity(trends.len());
        for trend in trends {
            let id: TrendId = Self::id(state.allocate_id());
            let created = FashionTrend {
                id,
                title: trend.title.clone(),
                description: trend.description.clone(),
                category: trend.category.clone(),
                season: trend.season.clone(),
                image_url: trend.image_url.clone(),
                source: trend.source.clone(),
                valid_from: trend.valid_from,
                valid_to: trend.valid_to,
                created_at: trend.created_at,
            };
            state.trends.insert(id, created.clone());
            stored.push(created);
        }
        Ok(stored)
    }

    fn delete_trend(&self, id: TrendId) -> RepositoryResult<usize> {
        Ok(self.state().trends.remove(&id).map_or(0, |_| 1))
    }
}
