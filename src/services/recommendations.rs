use chrono::Utc;

use crate::domain::recommendation::{NewProductRecommendation, ProductRecommendation};
use crate::domain::types::RecommendationId;
use crate::generation::{self, TextGenerator};
use crate::repository::{
    ClothingItemReader, PreferencesReader, RecommendationReader, RecommendationWriter,
};

use super::{ServiceError, ServiceResult};

pub fn list_recommendations<R>(repo: &R) -> ServiceResult<Vec<ProductRecommendation>>
where
    R: RecommendationReader,
{
    repo.list_recommendations().map_err(|e| {
        log::error!("Failed to list recommendations: {e}");
        ServiceError::Internal
    })
}

/// Generate recommendations for the current wardrobe and store them.
///
/// Returns only what was stored; entries the model got wrong are skipped.
pub async fn generate_recommendations<R, G>(
    repo: &R,
    generator: &G,
) -> ServiceResult<Vec<ProductRecommendation>>
where
    R: ClothingItemReader + PreferencesReader + RecommendationWriter,
    G: TextGenerator,
{
    let items = repo.list_clothing_items().map_err(|e| {
        log::error!("Failed to list clothing items: {e}");
        ServiceError::Internal
    })?;
    let preferences = repo.get_preferences().map_err(|e| {
        log::error!("Failed to get preferences: {e}");
        ServiceError::Internal
    })?;

    let generated = generation::recommend_products(generator, &items, preferences.as_ref())
        .await
        .map_err(|e| {
            log::error!("Failed to generate recommendations: {e}");
            ServiceError::Internal
        })?;

    let now = Utc::now().naive_utc();
    let recommendations: Vec<NewProductRecommendation> = generated
        .recommendations
        .into_iter()
        .filter_map(|generated| {
            let name = generated.name.clone();
            match generated.into_new_recommendation(now) {
                Ok(recommendation) => Some(recommendation),
                Err(e) => {
                    log::warn!("Skipping generated recommendation \"{name}\": {e}");
                    None
                }
            }
        })
        .collect();

    if recommendations.is_empty() {
        return Ok(Vec::new());
    }

    repo.create_recommendations(&recommendations).map_err(|e| {
        log::error!("Failed to store recommendations: {e}");
        ServiceError::Internal
    })
}

/// Delete a recommendation; unknown ids are a no-op.
pub fn delete_recommendation<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: RecommendationWriter,
{
    let Ok(id) = RecommendationId::new(id) else {
        return Ok(());
    };

    match repo.delete_recommendation(id) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete recommendation {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RecommendationCategory;
    use crate::generation::GenerationError;
    use crate::generation::test::StubGenerator;
    use crate::repository::test::TestRepository;
    use crate::services::clothing::tests::new_item;

    const REPLY: &str = r#"{
        "recommendations": [
            {
                "name": "Rain jacket",
                "type": "jacket",
                "color": "navy",
                "price": 89.0,
                "imageUrl": "https://example.com/jacket.jpg",
                "productUrl": "https://example.com/jacket",
                "reason": "No waterproof layer yet",
                "category": "wardrobe_gap"
            },
            {
                "name": "Mystery box",
                "type": "other",
                "color": "any",
                "price": -5,
                "imageUrl": "https://example.com/box.jpg",
                "productUrl": "https://example.com/box",
                "reason": "Surprise",
                "category": "trend"
            }
        ]
    }"#;

    #[actix_web::test]
    async fn stores_valid_generated_recommendations() {
        let repo = TestRepository::new().with_clothing_items(vec![new_item("Tee", "shirt")]);
        let generator = StubGenerator::replying(REPLY);

        let stored = generate_recommendations(&repo, &generator).await.unwrap();

        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].category, RecommendationCategory::WardrobeGap);
        assert_eq!(list_recommendations(&repo).unwrap(), stored);
        assert!(generator.prompts()[0].contains("Tee"));
    }

    #[actix_web::test]
    async fn rate_limit_stores_nothing() {
        let repo = TestRepository::new();
        let generator = StubGenerator::failing(GenerationError::RateLimited);

        let stored = generate_recommendations(&repo, &generator).await.unwrap();

        assert!(stored.is_empty());
        assert!(list_recommendations(&repo).unwrap().is_empty());
    }

    #[actix_web::test]
    async fn deleted_recommendation_is_gone() {
        let repo = TestRepository::new();
        let generator = StubGenerator::replying(REPLY);
        let stored = generate_recommendations(&repo, &generator).await.unwrap();

        delete_recommendation(stored[0].id.get(), &repo).unwrap();

        assert!(list_recommendations(&repo).unwrap().is_empty());
    }
}
