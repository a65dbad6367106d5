use chrono::NaiveDateTime;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::outfit::NewOutfit;
use crate::domain::types::{ClothingItemId, Occasion, TypeConstraintError, WeatherLabel};

#[derive(Debug, Deserialize, Validate)]
pub struct AddOutfitForm {
    pub items: Vec<i32>,
    #[validate(length(min = 1))]
    pub occasion: String,
    #[validate(length(min = 1))]
    pub weather: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddOutfitFormPayload {
    pub items: Vec<ClothingItemId>,
    pub occasion: Occasion,
    pub weather: WeatherLabel,
}

impl AddOutfitFormPayload {
    pub fn into_new_outfit(self, created_at: NaiveDateTime) -> NewOutfit {
        NewOutfit {
            items: self.items,
            occasion: self.occasion,
            weather: self.weather,
            created_at,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddOutfitFormError {
    #[error("Outfit validation failed: {0}")]
    Validation(String),
    #[error("Outfit contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddOutfitFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddOutfitFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddOutfitForm> for AddOutfitFormPayload {
    type Error = AddOutfitFormError;

    fn try_from(value: AddOutfitForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let items = value
            .items
            .into_iter()
            .map(ClothingItemId::new)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            items,
            occasion: Occasion::new(value.occasion)?,
            weather: WeatherLabel::new(value.weather)?,
        })
    }
}

/// Context for an outfit suggestion.
#[derive(Debug, Deserialize, Validate)]
pub struct SuggestOutfitForm {
    #[validate(length(min = 1))]
    pub weather: String,
    #[validate(length(min = 1))]
    pub occasion: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SuggestOutfitFormPayload {
    pub weather: WeatherLabel,
    pub occasion: Occasion,
}

#[derive(Debug, Error)]
pub enum SuggestOutfitFormError {
    #[error("Outfit suggestion request validation failed: {0}")]
    Validation(String),
    #[error("Outfit suggestion request contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SuggestOutfitFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SuggestOutfitFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SuggestOutfitForm> for SuggestOutfitFormPayload {
    type Error = SuggestOutfitFormError;

    fn try_from(value: SuggestOutfitForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            weather: WeatherLabel::new(value.weather)?,
            occasion: Occasion::new(value.occasion)?,
        })
    }
}
