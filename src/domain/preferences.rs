use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::types::{ColorPreference, PreferencesId, StylePreference};

/// The user's style and color preferences.
///
/// There is at most one row; saving new preferences replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub id: PreferencesId,
    pub style_preferences: BTreeSet<StylePreference>,
    pub color_preferences: BTreeSet<ColorPreference>,
}

/// Replacement contents for the [`Preferences`] singleton.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPreferences {
    pub style_preferences: BTreeSet<StylePreference>,
    pub color_preferences: BTreeSet<ColorPreference>,
}
