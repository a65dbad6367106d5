//! Prompt text for each generation request.
//!
//! Every prompt ends with an example of the JSON object expected back; the
//! request itself asks the provider for a JSON object reply.

use chrono::NaiveDate;

use crate::domain::clothing_item::ClothingItem;
use crate::domain::preferences::Preferences;

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}

pub fn outfit_prompt(
    items: &[ClothingItem],
    preferences: Option<&Preferences>,
    weather: &str,
    occasion: &str,
) -> String {
    format!(
        r#"Given these clothing items: {items}
And user preferences: {preferences}
Weather: {weather}
Occasion: {occasion}

Suggest an outfit combination. Return a JSON object with:
{{
  "items": [array of clothing item IDs to use],
  "reasoning": "explanation of why these items work well together"
}}"#,
        items = to_json(items),
        preferences = to_json(&preferences),
    )
}

pub fn recommendations_prompt(items: &[ClothingItem], preferences: Option<&Preferences>) -> String {
    format!(
        r#"Given this wardrobe: {items}
And user preferences: {preferences}

Recommend products that would fill gaps in the wardrobe, match the user's style, or follow current trends.
Return a JSON object with:
{{
  "recommendations": [
    {{
      "name": "product name",
      "type": "shirt, pants, shoes, etc.",
      "color": "product color",
      "price": 49.99,
      "imageUrl": "https://example.com/image.jpg",
      "productUrl": "https://example.com/product",
      "reason": "why this product is recommended",
      "category": "wardrobe_gap | style_match | trend"
    }}
  ]
}}"#,
        items = to_json(items),
        preferences = to_json(&preferences),
    )
}

pub fn trends_prompt(today: NaiveDate) -> String {
    format!(
        r#"Today is {today}. Summarize the current fashion trends.
Return a JSON object with:
{{
  "trends": [
    {{
      "title": "trend headline",
      "description": "what the trend is and how to wear it",
      "category": "colors, silhouettes, accessories, etc.",
      "season": "season the trend applies to",
      "imageUrl": "https://example.com/image.jpg or null",
      "source": "where the trend was observed or null",
      "validFrom": "YYYY-MM-DD",
      "validTo": "YYYY-MM-DD"
    }}
  ]
}}"#,
        today = today.format("%Y-%m-%d"),
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::domain::types::{
        ClothingItemId, ColorName, ItemImage, ItemName, ItemType, Occasion, PreferencesId, Season,
        StylePreference,
    };

    fn shirt() -> ClothingItem {
        ClothingItem {
            id: ClothingItemId::new(1).unwrap(),
            name: ItemName::new("Linen shirt").unwrap(),
            item_type: ItemType::new("shirt").unwrap(),
            color: ColorName::new("white").unwrap(),
            season: Season::new("summer").unwrap(),
            occasion: Occasion::new("casual").unwrap(),
            image_url: ItemImage::new("https://example.com/shirt.jpg").unwrap(),
        }
    }

    #[test]
    fn outfit_prompt_embeds_context() {
        let prompt = outfit_prompt(&[shirt()], None, "sunny", "picnic");
        assert!(prompt.contains(r#""type":"shirt""#));
        assert!(prompt.contains("And user preferences: null"));
        assert!(prompt.contains("Weather: sunny"));
        assert!(prompt.contains("Occasion: picnic"));
        assert!(prompt.contains(r#""reasoning""#));
    }

    #[test]
    fn recommendations_prompt_embeds_preferences() {
        let preferences = Preferences {
            id: PreferencesId::new(1).unwrap(),
            style_preferences: BTreeSet::from([StylePreference::Minimalist]),
            color_preferences: BTreeSet::new(),
        };
        let prompt = recommendations_prompt(&[shirt()], Some(&preferences));
        assert!(prompt.contains(r#""stylePreferences":["minimalist"]"#));
        assert!(prompt.contains("wardrobe_gap | style_match | trend"));
    }

    #[test]
    fn trends_prompt_mentions_today() {
        let prompt = trends_prompt(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap());
        assert!(prompt.starts_with("Today is 2025-06-15."));
        assert!(prompt.contains(r#""validTo""#));
    }
}
