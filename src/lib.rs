//! Core library exports for the wardrobe service.
//!
//! The `data` feature exposes the domain, persistence models and repositories.
//! The `server` feature adds forms, the generation and weather adapters,
//! services and HTTP routes used by the web application.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod generation;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "server")]
pub mod services;
#[cfg(feature = "server")]
pub mod weather;
