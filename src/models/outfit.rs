use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::outfit::{Outfit as DomainOutfit, NewOutfit as DomainNewOutfit};
use crate::domain::types::{ClothingItemId, Occasion, TypeConstraintError, WeatherLabel};

/// Diesel model representing a row in the `outfits` table.
///
/// `items` holds a JSON array of clothing item ids.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::outfits)]
pub struct Outfit {
    pub id: i32,
    pub items: String,
    pub occasion: String,
    pub weather: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Outfit`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::outfits)]
pub struct NewOutfit<'a> {
    pub items: String,
    pub occasion: &'a str,
    pub weather: &'a str,
    pub created_at: NaiveDateTime,
}

/// Decode the JSON id list stored in the `items` column.
pub(crate) fn decode_item_ids(raw: &str) -> Result<Vec<ClothingItemId>, TypeConstraintError> {
    let ids: Vec<i32> = serde_json::from_str(raw)
        .map_err(|e| TypeConstraintError::InvalidValue(format!("outfit items: {e}")))?;
    ids.into_iter().map(ClothingItemId::new).collect()
}

/// Encode clothing item ids as a JSON array.
pub(crate) fn encode_item_ids(ids: &[ClothingItemId]) -> String {
    let raw: Vec<i32> = ids.iter().map(|id| id.get()).collect();
    serde_json::Value::from(raw).to_string()
}

impl TryFrom<Outfit> for DomainOutfit {
    type Error = TypeConstraintError;

    fn try_from(outfit: Outfit) -> Result<Self, Self::Error> {
        Ok(Self {
            id: outfit.id.try_into()?,
            items: decode_item_ids(&outfit.items)?,
            occasion: Occasion::new(outfit.occasion)?,
            weather: WeatherLabel::new(outfit.weather)?,
            created_at: outfit.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewOutfit> for NewOutfit<'a> {
    fn from(outfit: &'a DomainNewOutfit) -> Self {
        Self {
            items: encode_item_ids(&outfit.items),
            occasion: outfit.occasion.as_str(),
            weather: outfit.weather.as_str(),
            created_at: outfit.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_ids_round_trip_through_json_text() {
        let ids = vec![ClothingItemId::new(1).unwrap(), ClothingItemId::new(12).unwrap()];
        let encoded = encode_item_ids(&ids);
        assert_eq!(encoded, "[1,12]");
        assert_eq!(decode_item_ids(&encoded).unwrap(), ids);
        assert_eq!(encode_item_ids(&[]), "[]");
    }

    #[test]
    fn rejects_corrupt_item_lists() {
        assert!(decode_item_ids("not json").is_err());
        assert!(decode_item_ids("[0]").is_err());
    }
}
