//! Remote lookup API module
//!
//! Client for the API Ninjas nutrition and exercise endpoints.

pub mod client;

pub use client::{ApiClient, ApiError, ApiResult, Exercise, NutritionFacts};
