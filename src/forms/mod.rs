//! JSON request bodies and query strings, validated into typed payloads.

pub mod clothing;
pub mod outfits;
pub mod preferences;
pub mod scheduled_outfits;
pub mod trends;
