use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::clothing_item::NewClothingItem;
use crate::domain::types::{
    ColorName, ItemImage, ItemName, ItemType, Occasion, Season, TypeConstraintError,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddClothingItemForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1))]
    pub item_type: String,
    #[validate(length(min = 1))]
    pub color: String,
    #[validate(length(min = 1))]
    pub season: String,
    #[validate(length(min = 1))]
    pub occasion: String,
    /// Blank when the item has no picture.
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AddClothingItemFormPayload {
    pub name: ItemName,
    pub item_type: ItemType,
    pub color: ColorName,
    pub season: Season,
    pub occasion: Occasion,
    pub image_url: ItemImage,
}

impl AddClothingItemFormPayload {
    pub fn into_new_clothing_item(self) -> NewClothingItem {
        NewClothingItem {
            name: self.name,
            item_type: self.item_type,
            color: self.color,
            season: self.season,
            occasion: self.occasion,
            image_url: self.image_url,
        }
    }
}

#[derive(Debug, Error)]
pub enum AddClothingItemFormError {
    #[error("Clothing item validation failed: {0}")]
    Validation(String),
    #[error("Clothing item contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for AddClothingItemFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for AddClothingItemFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<AddClothingItemForm> for AddClothingItemFormPayload {
    type Error = AddClothingItemFormError;

    fn try_from(value: AddClothingItemForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: ItemName::new(value.name)?,
            item_type: ItemType::new(value.item_type)?,
            color: ColorName::new(value.color)?,
            season: Season::new(value.season)?,
            occasion: Occasion::new(value.occasion)?,
            image_url: ItemImage::new(value.image_url)?,
        })
    }
}
