//! Domain entities and value objects, independent of persistence and HTTP.

pub mod clothing_item;
pub mod dates;
pub mod outfit;
pub mod preferences;
pub mod recommendation;
pub mod scheduled_outfit;
pub mod trend;
pub mod types;
pub mod weather;
