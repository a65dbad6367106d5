use std::collections::BTreeSet;

use serde::Deserialize;
use thiserror::Error;

use crate::domain::preferences::NewPreferences;
use crate::domain::types::{ColorPreference, StylePreference, TypeConstraintError};

/// Replacement preferences; unknown values are rejected, duplicates collapse.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePreferencesForm {
    pub style_preferences: Vec<String>,
    pub color_preferences: Vec<String>,
}

#[derive(Debug, Error)]
pub enum UpdatePreferencesFormError {
    #[error("Preferences contain invalid data: {0}")]
    TypeConstraint(String),
}

impl From<TypeConstraintError> for UpdatePreferencesFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdatePreferencesForm> for NewPreferences {
    type Error = UpdatePreferencesFormError;

    fn try_from(value: UpdatePreferencesForm) -> Result<Self, Self::Error> {
        let style_preferences = value
            .style_preferences
            .into_iter()
            .map(StylePreference::try_from)
            .collect::<Result<BTreeSet<_>, _>>()?;
        let color_preferences = value
            .color_preferences
            .into_iter()
            .map(ColorPreference::try_from)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self {
            style_preferences,
            color_preferences,
        })
    }
}
