use std::collections::BTreeSet;

use diesel::prelude::*;

use crate::domain::preferences::{
    NewPreferences as DomainNewPreferences, Preferences as DomainPreferences,
};
use crate::domain::types::{ColorPreference, StylePreference, TypeConstraintError};

/// Diesel model representing the `preferences` singleton row.
///
/// Both preference columns hold JSON arrays of snake_case enum values.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::preferences)]
pub struct Preferences {
    pub id: i32,
    pub style_preferences: String,
    pub color_preferences: String,
}

/// Insertable form of [`Preferences`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::preferences)]
pub struct NewPreferences {
    pub style_preferences: String,
    pub color_preferences: String,
}

fn decode_set<T>(raw: &str, field: &str) -> Result<BTreeSet<T>, TypeConstraintError>
where
    T: Ord + TryFrom<String, Error = TypeConstraintError>,
{
    let values: Vec<String> = serde_json::from_str(raw)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("{field}: {e}")))?;
    values.into_iter().map(T::try_from).collect()
}

fn encode_set<'a, T>(
    values: impl IntoIterator<Item = &'a T>,
    as_str: fn(T) -> &'static str,
) -> String
where
    T: Copy + 'a,
{
    let values: Vec<&str> = values.into_iter().map(|value| as_str(*value)).collect();
    serde_json::Value::from(values).to_string()
}

impl TryFrom<Preferences> for DomainPreferences {
    type Error = TypeConstraintError;

    fn try_from(preferences: Preferences) -> Result<Self, Self::Error> {
        Ok(Self {
            id: preferences.id.try_into()?,
            style_preferences: decode_set(&preferences.style_preferences, "style preferences")?,
            color_preferences: decode_set(&preferences.color_preferences, "color preferences")?,
        })
    }
}

impl From<&DomainNewPreferences> for NewPreferences {
    fn from(preferences: &DomainNewPreferences) -> Self {
        Self {
            style_preferences: encode_set(&preferences.style_preferences, StylePreference::as_str),
            color_preferences: encode_set(&preferences.color_preferences, ColorPreference::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_sets_as_json_arrays() {
        let new = DomainNewPreferences {
            style_preferences: [StylePreference::Vintage, StylePreference::Casual].into(),
            color_preferences: BTreeSet::new(),
        };
        let row = NewPreferences::from(&new);
        assert_eq!(row.style_preferences, r#"["casual","vintage"]"#);
        assert_eq!(row.color_preferences, "[]");
    }

    #[test]
    fn decodes_stored_rows() {
        let row = Preferences {
            id: 1,
            style_preferences: r#"["formal"]"#.to_string(),
            color_preferences: r#"["warm","cool"]"#.to_string(),
        };
        let preferences = DomainPreferences::try_from(row).unwrap();
        assert!(preferences.style_preferences.contains(&StylePreference::Formal));
        assert_eq!(preferences.color_preferences.len(), 2);
    }

    #[test]
    fn rejects_unknown_stored_values() {
        let row = Preferences {
            id: 1,
            style_preferences: r#"["gothic"]"#.to_string(),
            color_preferences: "[]".to_string(),
        };
        assert!(DomainPreferences::try_from(row).is_err());
    }
}
