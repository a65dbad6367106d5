//! Diesel row types and their conversions to and from domain entities.

pub mod clothing_item;
#[cfg(feature = "server")]
pub mod config;
pub mod outfit;
pub mod preferences;
pub mod recommendation;
pub mod scheduled_outfit;
pub mod trend;
