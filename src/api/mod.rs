//! Food backend integration module.
//!
//! Provides the REST client and models for the food catalog.

pub mod client;
pub mod error;
pub mod models;

pub use client::{FoodApi, FoodClient};
pub use error::ApiError;
pub use models::{Food, FoodInput};
