//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, text values, URLs and prices are checked once at the boundary
//! (forms, generated payloads, database rows).

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative or not finite.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// An enumerated value was not one of the accepted variants.
    #[error("unknown {0}: {1}")]
    UnknownVariant(&'static str, String),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Macro to generate lightweight newtypes for positive identifiers.
macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i32> for $name {
            fn eq(&self, other: &i32) -> bool {
                self.0 == *other
            }
        }
    };
}

/// Shared accessors for string-backed newtypes.
macro_rules! string_newtype_common {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }
        }

        string_newtype_common!($name);
    };
}

macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if !trimmed.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(trimmed))
            }
        }

        string_newtype_common!($name);
    };
}

id_newtype!(
    ClothingItemId,
    "Unique identifier for a clothing item.",
    "clothing_item_id"
);
id_newtype!(OutfitId, "Unique identifier for an outfit.", "outfit_id");
id_newtype!(
    ScheduledOutfitId,
    "Unique identifier for a calendar entry.",
    "scheduled_outfit_id"
);
id_newtype!(
    PreferencesId,
    "Identifier of the preferences row.",
    "preferences_id"
);
id_newtype!(
    RecommendationId,
    "Unique identifier for a product recommendation.",
    "recommendation_id"
);
id_newtype!(TrendId, "Unique identifier for a fashion trend.", "trend_id");

non_empty_string_newtype!(ItemName, "Clothing item display name.", "name");
non_empty_string_newtype!(
    ItemType,
    "Kind of garment (shirt, pants, shoes, ...).",
    "type"
);
non_empty_string_newtype!(ColorName, "Free-form color description.", "color");
non_empty_string_newtype!(Season, "Season label (summer, winter, ...).", "season");
non_empty_string_newtype!(
    Occasion,
    "Occasion label (casual, formal, ...).",
    "occasion"
);
non_empty_string_newtype!(
    WeatherLabel,
    "Weather an outfit was picked for, as free text.",
    "weather"
);
non_empty_string_newtype!(ScheduleNotes, "Notes attached to a calendar entry.", "notes");
non_empty_string_newtype!(ProductName, "Recommended product name.", "product name");
non_empty_string_newtype!(
    RecommendationReason,
    "Why a product was recommended.",
    "reason"
);
non_empty_string_newtype!(TrendTitle, "Fashion trend headline.", "title");
non_empty_string_newtype!(TrendDescription, "Fashion trend summary.", "description");
non_empty_string_newtype!(TrendCategory, "Fashion trend category.", "category");
non_empty_string_newtype!(TrendSource, "Where a trend was observed.", "source");

url_string_newtype!(ImageUrl, "Image URL.", "image url");
url_string_newtype!(ProductUrl, "Product page URL.", "product url");

/// Picture of a clothing item; blank when none was attached.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ItemImage(String);

impl ItemImage {
    /// Constructs a trimmed value that is either blank or a valid URL.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = value.into().trim().to_string();
        if !trimmed.is_empty() && !trimmed.as_str().validate_url() {
            return Err(TypeConstraintError::InvalidUrl("image url"));
        }
        Ok(Self(trimmed))
    }

    /// Whether no picture was attached.
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

string_newtype_common!(ItemImage);

/// Non-negative price value in standard currency units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct ProductPrice(f64);

impl ProductPrice {
    /// Constructs a finite price that is zero or greater.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("price"))
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for ProductPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl TryFrom<f64> for ProductPrice {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl PartialEq<f64> for ProductPrice {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

/// Generates a closed, snake_case string enum with persistence helpers.
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:expr, { $($variant:ident => $text:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// String representation used in persistence and on the wire.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $text),+
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                match value.trim() {
                    $($text => Ok(Self::$variant),)+
                    other => Err(TypeConstraintError::UnknownVariant($field, other.to_string())),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::try_from(value.as_str())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

string_enum!(
    /// Clothing style a user gravitates to.
    StylePreference, "style preference", {
        Casual => "casual",
        Formal => "formal",
        Sporty => "sporty",
        Vintage => "vintage",
        Minimalist => "minimalist",
    }
);

string_enum!(
    /// Color palette a user prefers.
    ColorPreference, "color preference", {
        Neutral => "neutral",
        Warm => "warm",
        Cool => "cool",
        Bright => "bright",
        Pastel => "pastel",
    }
);

string_enum!(
    /// Why a product ended up in the shopping recommendations.
    RecommendationCategory, "recommendation category", {
        WardrobeGap => "wardrobe_gap",
        StyleMatch => "style_match",
        Trend => "trend",
    }
);

string_enum!(
    /// Coarse weather condition used for outfit suggestions.
    WeatherCondition, "weather condition", {
        Sunny => "sunny",
        Cloudy => "cloudy",
        Rainy => "rainy",
        Snowy => "snowy",
    }
);
