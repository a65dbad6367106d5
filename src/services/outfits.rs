use std::collections::HashSet;

use chrono::Utc;

use crate::domain::outfit::Outfit;
use crate::forms::outfits::{AddOutfitFormPayload, SuggestOutfitFormPayload};
use crate::generation::{self, OutfitSuggestion, TextGenerator};
use crate::repository::{ClothingItemReader, OutfitReader, OutfitWriter, PreferencesReader};

use super::{ServiceError, ServiceResult};

pub fn list_outfits<R>(repo: &R) -> ServiceResult<Vec<Outfit>>
where
    R: OutfitReader,
{
    repo.list_outfits().map_err(|e| {
        log::error!("Failed to list outfits: {e}");
        ServiceError::Internal
    })
}

pub fn add_outfit<R>(payload: AddOutfitFormPayload, repo: &R) -> ServiceResult<Outfit>
where
    R: OutfitWriter,
{
    let outfit = payload.into_new_outfit(Utc::now().naive_utc());
    repo.create_outfit(&outfit).map_err(|e| {
        log::error!("Failed to create outfit: {e}");
        ServiceError::Internal
    })
}

/// Ask the model for an outfit built from the current wardrobe.
///
/// Ids the model invents are dropped from the suggestion.
pub async fn suggest_outfit<R, G>(
    payload: SuggestOutfitFormPayload,
    repo: &R,
    generator: &G,
) -> ServiceResult<OutfitSuggestion>
where
    R: ClothingItemReader + PreferencesReader,
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

    let mut suggestion = generation::suggest_outfit(
        generator,
        &items,
        preferences.as_ref(),
        payload.weather.as_str(),
        payload.occasion.as_str(),
    )
    .await
    .map_err(|e| {
        log::error!("Failed to generate outfit suggestion: {e}");
        ServiceError::Internal
    })?;

    let known: HashSet<_> = items.iter().map(|item| item.id).collect();
    let suggested = suggestion.items.len();
    suggestion.items.retain(|id| known.contains(id));
    if suggestion.items.len() != suggested {
        log::warn!(
            "Dropped {} unknown item ids from outfit suggestion",
            suggested - suggestion.items.len()
        );
    }

    Ok(suggestion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Occasion, WeatherLabel};
    use crate::generation::test::StubGenerator;
    use crate::generation::{GenerationError, SUGGESTION_UNAVAILABLE};
    use crate::repository::test::TestRepository;
    use crate::services::clothing::tests::new_item;

    fn suggest_payload() -> SuggestOutfitFormPayload {
        SuggestOutfitFormPayload {
            weather: WeatherLabel::new("sunny").unwrap(),
            occasion: Occasion::new("casual").unwrap(),
        }
    }

    #[test]
    fn created_outfit_is_listed() {
        let repo = TestRepository::new()
            .with_clothing_items(vec![new_item("Tee", "shirt"), new_item("Chinos", "pants")]);
        let items = repo.list_clothing_items().unwrap();

        let outfit = add_outfit(
            AddOutfitFormPayload {
                items: items.iter().map(|item| item.id).collect(),
                occasion: Occasion::new("casual").unwrap(),
                weather: WeatherLabel::new("sunny").unwrap(),
            },
            &repo,
        )
        .unwrap();

        assert_eq!(outfit.items.len(), 2);
        assert_eq!(list_outfits(&repo).unwrap(), vec![outfit]);
    }

    #[actix_web::test]
    async fn suggestion_keeps_only_known_items() {
        let repo = TestRepository::new()
            .with_clothing_items(vec![new_item("Tee", "shirt"), new_item("Chinos", "pants")]);
        let generator =
            StubGenerator::replying(r#"{"items": [1, 2, 99], "reasoning": "Easy summer look"}"#);

        let suggestion = suggest_outfit(suggest_payload(), &repo, &generator)
            .await
            .unwrap();

        assert_eq!(suggestion.items, vec![1, 2]);
        assert!(generator.prompts()[0].contains("Chinos"));
    }

    #[actix_web::test]
    async fn rate_limited_suggestion_is_empty() {
        let repo = TestRepository::new().with_clothing_items(vec![new_item("Tee", "shirt")]);
        let generator = StubGenerator::failing(GenerationError::RateLimited);

        let suggestion = suggest_outfit(suggest_payload(), &repo, &generator)
            .await
            .unwrap();

        assert!(suggestion.items.is_empty());
        assert_eq!(suggestion.reasoning, SUGGESTION_UNAVAILABLE);
    }

    #[actix_web::test]
    async fn provider_failure_is_internal() {
        let repo = TestRepository::new();
        let generator = StubGenerator::failing(GenerationError::Timeout);

        assert_eq!(
            suggest_outfit(suggest_payload(), &repo, &generator).await,
            Err(ServiceError::Internal)
        );
    }
}
