//! Text generation adapter.
//!
//! Builds prompts from wardrobe data, asks a hosted model for a JSON reply and
//! parses it into typed results. Rate limiting by the provider is absorbed
//! into a neutral result instead of an error.

use std::future::Future;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::clothing_item::ClothingItem;
use crate::domain::dates::{parse_timestamp, parse_timestamp_end};
use crate::domain::preferences::Preferences;
use crate::domain::recommendation::NewProductRecommendation;
use crate::domain::trend::NewFashionTrend;
use crate::domain::types::{
    ClothingItemId, ColorName, ImageUrl, ItemType, ProductName, ProductPrice, ProductUrl,
    RecommendationCategory, RecommendationReason, Season, TrendCategory, TrendDescription,
    TrendSource, TrendTitle, TypeConstraintError,
};

pub mod client;
pub mod prompts;

pub use client::OpenAiClient;

/// Reasoning returned when suggestions are unavailable because of provider
/// rate limiting.
pub const SUGGESTION_UNAVAILABLE: &str =
    "Outfit suggestions are temporarily unavailable. Please try again later.";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("network error: {0}")]
    Transport(String),
    #[error("timeout")]
    Timeout,
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("rate limited")]
    RateLimited,
    #[error("invalid api key")]
    InvalidApiKey,
    #[error("empty response from model")]
    EmptyResponse,
    #[error("json error: {0}")]
    Decode(String),
}

/// A model that answers a prompt with the text of a JSON object.
pub trait TextGenerator {
    fn generate_json(&self, prompt: &str)
    -> impl Future<Output = Result<String, GenerationError>>;
}

/// Outfit picked by the model from the existing wardrobe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutfitSuggestion {
    pub items: Vec<ClothingItemId>,
    pub reasoning: String,
}

impl OutfitSuggestion {
    pub fn unavailable() -> Self {
        Self {
            items: Vec::new(),
            reasoning: SUGGESTION_UNAVAILABLE.to_string(),
        }
    }
}

/// A product recommendation as written by the model, not yet validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedRecommendation {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub color: String,
    pub price: f64,
    pub image_url: String,
    pub product_url: String,
    pub reason: String,
    pub category: String,
}

impl GeneratedRecommendation {
    pub fn into_new_recommendation(
        self,
        created_at: NaiveDateTime,
    ) -> Result<NewProductRecommendation, TypeConstraintError> {
        Ok(NewProductRecommendation {
            name: ProductName::new(self.name)?,
            product_type: ItemType::new(self.product_type)?,
            color: ColorName::new(self.color)?,
            price: ProductPrice::new(self.price)?,
            image_url: ImageUrl::new(self.image_url)?,
            product_url: ProductUrl::new(self.product_url)?,
            reason: RecommendationReason::new(self.reason)?,
            category: RecommendationCategory::try_from(self.category)?,
            created_at,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedRecommendations {
    #[serde(default)]
    pub recommendations: Vec<GeneratedRecommendation>,
}

/// A fashion trend as written by the model, not yet validated.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTrend {
    pub title: String,
    pub description: String,
    pub category: String,
    pub season: String,
    pub image_url: Option<String>,
    pub source: Option<String>,
    pub valid_from: String,
    pub valid_to: String,
}

impl GeneratedTrend {
    pub fn into_new_trend(
        self,
        created_at: NaiveDateTime,
    ) -> Result<NewFashionTrend, TypeConstraintError> {
        let valid_from = parse_timestamp(&self.valid_from).ok_or_else(|| {
            TypeConstraintError::InvalidValue(format!(
                "unrecognised validFrom: {}",
                self.valid_from
            ))
        })?;
        let valid_to = parse_timestamp_end(&self.valid_to).ok_or_else(|| {
            TypeConstraintError::InvalidValue(format!("unrecognised validTo: {}", self.valid_to))
        })?;
        let optional = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let trend = NewFashionTrend {
            title: TrendTitle::new(self.title)?,
            description: TrendDescription::new(self.description)?,
            category: TrendCategory::new(self.category)?,
            season: Season::new(self.season)?,
            image_url: optional(self.image_url).map(ImageUrl::new).transpose()?,
            source: optional(self.source).map(TrendSource::new).transpose()?,
            valid_from,
            valid_to,
            created_at,
        };
        trend.check_window()?;
        Ok(trend)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneratedTrends {
    #[serde(default)]
    pub trends: Vec<GeneratedTrend>,
}

/// Send `prompt` and decode the JSON reply.
async fn request_json<G, T>(generator: &G, prompt: &str) -> Result<T, GenerationError>
where
    G: TextGenerator,
    T: DeserializeOwned,
{
    let text = generator.generate_json(prompt).await?;
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    serde_json::from_str(&text).map_err(|e| GenerationError::Decode(e.to_string()))
}

/// Ask the model to combine existing wardrobe items for `weather` and
/// `occasion`.
pub async fn suggest_outfit<G: TextGenerator>(
    generator: &G,
    items: &[ClothingItem],
    preferences: Option<&Preferences>,
    weather: &str,
    occasion: &str,
) -> Result<OutfitSuggestion, GenerationError> {
    let prompt = prompts::outfit_prompt(items, preferences, weather, occasion);
    match request_json(generator, &prompt).await {
        Err(GenerationError::RateLimited) => {
            log::warn!("Outfit suggestion rate limited by provider");
            Ok(OutfitSuggestion::unavailable())
        }
        other => other,
    }
}

/// Ask the model for products that complement the wardrobe.
pub async fn recommend_products<G: TextGenerator>(
    generator: &G,
    items: &[ClothingItem],
    preferences: Option<&Preferences>,
) -> Result<GeneratedRecommendations, GenerationError> {
    let prompt = prompts::recommendations_prompt(items, preferences);
    match request_json(generator, &prompt).await {
        Err(GenerationError::RateLimited) => {
            log::warn!("Product recommendations rate limited by provider");
            Ok(GeneratedRecommendations::default())
        }
        other => other,
    }
}

/// Ask the model for a summary of current fashion trends.
pub async fn summarize_trends<G: TextGenerator>(
    generator: &G,
    today: NaiveDate,
) -> Result<GeneratedTrends, GenerationError> {
    let prompt = prompts::trends_prompt(today);
    match request_json(generator, &prompt).await {
        Err(GenerationError::RateLimited) => {
            log::warn!("Trend summary rate limited by provider");
            Ok(GeneratedTrends::default())
        }
        other => other,
    }
}
