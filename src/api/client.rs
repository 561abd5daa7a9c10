//! API Ninjas client
//!
//! Fetches nutrition facts and exercise listings from the API Ninjas v1
//! endpoints. The key comes from the API_NINJAS_KEY environment variable;
//! without one every call returns [`ApiError::MissingKey`] and callers fall
//! back to the built-in catalog.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Default endpoint base
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of exercises returned per lookup
pub const MAX_EXERCISES: usize = 5;

/// Remote lookup error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("API key not configured (set API_NINJAS_KEY)")]
    MissingKey,

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type for remote lookups
pub type ApiResult<T> = Result<T, ApiError>;

/// Nutrition facts for a single food, per serving.
///
/// The free API tier replaces some numeric fields with an upsell string, so
/// decoding goes through [`NutritionFacts::from_value`] and treats any
/// non-numeric field as absent.
#[derive(Debug, Clone, Serialize)]
pub struct NutritionFacts {
    pub name: String,
    pub calories: Option<f64>,
    pub serving_size_g: Option<f64>,
    pub protein_g: Option<f64>,
    pub carbohydrates_total_g: Option<f64>,
    pub fiber_g: Option<f64>,
    pub sugar_g: Option<f64>,
    pub fat_total_g: Option<f64>,
    pub fat_saturated_g: Option<f64>,
    pub sodium_mg: Option<f64>,
    pub potassium_mg: Option<f64>,
    pub cholesterol_mg: Option<f64>,
}

impl NutritionFacts {
    /// Decode one entry from the nutrition endpoint's response array
    pub fn from_value(value: &Value) -> Option<Self> {
        let name = value.get("name")?.as_str()?.to_string();
        let num = |key: &str| value.get(key).and_then(Value::as_f64);
        Some(Self {
            name,
            calories: num("calories"),
            serving_size_g: num("serving_size_g"),
            protein_g: num("protein_g"),
            carbohydrates_total_g: num("carbohydrates_total_g"),
            fiber_g: num("fiber_g"),
            sugar_g: num("sugar_g"),
            fat_total_g: num("fat_total_g"),
            fat_saturated_g: num("fat_saturated_g"),
            sodium_mg: num("sodium_mg"),
            potassium_mg: num("potassium_mg"),
            cholesterol_mg: num("cholesterol_mg"),
        })
    }
}

/// A single exercise, from the remote endpoint or the built-in catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    #[serde(rename = "type")]
    pub exercise_type: String,
    pub muscle: String,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub instructions: String,
}

/// API Ninjas HTTP client
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Build a client with an explicit endpoint base and key
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        }
    }

    /// Build a client from the environment.
    ///
    /// API_NINJAS_KEY supplies the key; FITCOACH_API_URL overrides the
    /// endpoint base (useful for pointing at a local stub).
    pub fn from_env() -> Self {
        let api_key = std::env::var("API_NINJAS_KEY").ok();
        let base_url =
            std::env::var("FITCOACH_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, api_key)
    }

    /// Whether an API key is configured
    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Endpoint base this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up nutrition facts for a food query
    pub async fn nutrition(&self, query: &str) -> ApiResult<Vec<NutritionFacts>> {
        let key = self.api_key.as_deref().ok_or(ApiError::MissingKey)?;

        let items: Vec<Value> = self
            .http
            .get(format!("{}/nutrition", self.base_url))
            .header("X-Api-Key", key)
            .query(&[("query", query)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(items.iter().filter_map(NutritionFacts::from_value).collect())
    }

    /// Look up exercises by muscle, type, and difficulty.
    ///
    /// With no filters at all the endpoint would return an arbitrary page,
    /// so an unfiltered lookup defaults to chest exercises.
    pub async fn exercises(
        &self,
        muscle: Option<&str>,
        exercise_type: Option<&str>,
        difficulty: Option<&str>,
    ) -> ApiResult<Vec<Exercise>> {
        let key = self.api_key.as_deref().ok_or(ApiError::MissingKey)?;

        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(muscle) = muscle {
            params.push(("muscle", muscle.to_lowercase()));
        }
        if let Some(exercise_type) = exercise_type {
            params.push(("type", exercise_type.to_lowercase()));
        }
        if let Some(difficulty) = difficulty {
            params.push(("difficulty", difficulty.to_lowercase()));
        }
        if params.is_empty() {
            params.push(("muscle", "chest".to_string()));
        }

        let exercises: Vec<Exercise> = self
            .http
            .get(format!("{}/exercises", self.base_url))
            .header("X-Api-Key", key)
            .query(&params)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(exercises.into_iter().take(MAX_EXERCISES).collect())
    }
}
