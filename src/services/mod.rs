//! Business logic per resource, generic over repository traits so it can be
//! exercised against the in-memory test repository.

pub mod clothing;
pub mod errors;
pub mod outfits;
pub mod preferences;
pub mod recommendations;
pub mod scheduled_outfits;
pub mod trends;
pub mod weather;

pub use errors::{ServiceError, ServiceResult};
