// ABOUTME: Spoonacular menu item client (via RapidAPI) for food search and detail lookup
// ABOUTME: Static key/host headers, network vs upstream error mapping and a mock for tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food API Client
//!
//! Thin request wrapper around the Spoonacular menu item endpoints hosted on
//! RapidAPI. Two calls are exposed:
//!
//! - `GET /food/menuItems/search?query=..&number=..` returns `{"menuItems": [...]}`
//! - `GET /food/menuItems/{id}` returns one item with its `nutrition` block
//!
//! Every request carries the static `x-rapidapi-key` / `x-rapidapi-host`
//! pair. Failures are never retried; callers show
//! [`AppError::user_message`](calorie_core::errors::AppError::user_message).
//!
//! # Example
//! ```rust,no_run
//! use calorie_tracker::config::FoodApiConfig;
//! use calorie_tracker::external::{FoodApiClient, FoodLookup};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = FoodApiClient::new(FoodApiConfig::from_env())?;
//! let results = client.search_food("burger").await?;
//! if let Some(first) = results.first() {
//!     let food = client.get_food_details(first.id).await?.into_food(&first.image);
//!     println!("{} kcal", food.nutrients.calories);
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::FoodApiConfig;
use async_trait::async_trait;
use calorie_core::constants::food_api::{
    DETAILS_PATH, HOST_HEADER, KEY_HEADER, SEARCH_PATH, SERVICE_NAME,
};
use calorie_core::errors::{AppError, AppResult};
use calorie_core::models::{Food, Nutrients};
use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, warn};
use url::Url;

/// One search hit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodSearchResult {
    /// Menu item id
    pub id: u64,
    /// Display title
    pub title: String,
    /// Thumbnail URL, used when the detail response carries no image
    #[serde(default)]
    pub image: String,
    /// Restaurant chain
    #[serde(default)]
    pub restaurant_chain: String,
}

/// Full menu item as returned by the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodDetails {
    /// Menu item id
    pub id: u64,
    /// Display title
    pub title: String,
    /// Restaurant chain
    #[serde(default)]
    pub restaurant_chain: String,
    /// Macronutrients, normalized from numbers or `"12g"` strings
    #[serde(default)]
    pub nutrition: Nutrients,
    /// Image URLs, best first
    #[serde(default)]
    pub images: Vec<String>,
}

impl FoodDetails {
    /// Build the log entry for this item.
    ///
    /// The first non-empty entry of `images` wins; otherwise `fallback_image`
    /// (normally the search hit's thumbnail) is used.
    #[must_use]
    pub fn into_food(self, fallback_image: &str) -> Food {
        let image = self
            .images
            .into_iter()
            .next()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| fallback_image.to_owned());

        Food {
            id: self.id,
            title: self.title,
            restaurant_chain: self.restaurant_chain,
            image,
            nutrients: self.nutrition,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchResponse {
    #[serde(default)]
    menu_items: Vec<FoodSearchResult>,
}

/// Food search and detail lookup
#[async_trait]
pub trait FoodLookup: Send + Sync {
    /// Search menu items matching `query`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a blank query, `ExternalServiceUnavailable`
    /// when the request cannot be delivered and `ExternalServiceError` on a
    /// non-2xx status or an unreadable body.
    async fn search_food(&self, query: &str) -> AppResult<Vec<FoodSearchResult>>;

    /// Fetch the full record for one menu item
    ///
    /// # Errors
    ///
    /// Same failure modes as [`FoodLookup::search_food`].
    async fn get_food_details(&self, id: u64) -> AppResult<FoodDetails>;
}

/// Live client for the RapidAPI-hosted Spoonacular API
#[derive(Debug, Clone)]
pub struct FoodApiClient {
    config: FoodApiConfig,
    base_url: Url,
    http_client: reqwest::Client,
}

impl FoodApiClient {
    /// Create a client from configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigMissing` without an API key and `ConfigInvalid` when the
    /// base URL or header values are unusable.
    pub fn new(config: FoodApiConfig) -> AppResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::config_missing("RAPIDAPI_KEY is not set"))?;

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::config_invalid(format!("invalid food API base URL {:?}: {e}", config.base_url))
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(
            KEY_HEADER,
            HeaderValue::from_str(api_key)
                .map_err(|e| AppError::config_invalid(format!("invalid API key header: {e}")))?,
        );
        headers.insert(
            HOST_HEADER,
            HeaderValue::from_str(&config.api_host)
                .map_err(|e| AppError::config_invalid(format!("invalid API host header: {e}")))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| {
                AppError::internal(format!("failed to build HTTP client: {e}")).with_source(e)
            })?;

        Ok(Self {
            config,
            base_url,
            http_client,
        })
    }

    /// Configuration the client was built from
    #[must_use]
    pub const fn config(&self) -> &FoodApiConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> AppResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| AppError::internal(format!("invalid endpoint path {path:?}: {e}")))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> AppResult<T> {
        let response = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "food API request failed");
                AppError::network(SERVICE_NAME, e.to_string()).with_source(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, "food API returned an error status");
            return Err(AppError::external_service(
                SERVICE_NAME,
                format!("HTTP {status}: {body}"),
            ));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::external_service(SERVICE_NAME, format!("JSON parse error: {e}"))
        })
    }
}

#[async_trait]
impl FoodLookup for FoodApiClient {
    async fn search_food(&self, query: &str) -> AppResult<Vec<FoodSearchResult>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        let url = self.endpoint(SEARCH_PATH)?;
        let response: SearchResponse = self
            .get_json(
                url,
                &[
                    ("query", query.to_owned()),
                    ("number", self.config.result_limit.to_string()),
                ],
            )
            .await?;

        debug!(query, results = response.menu_items.len(), "food search completed");
        Ok(response.menu_items)
    }

    async fn get_food_details(&self, id: u64) -> AppResult<FoodDetails> {
        let url = self.endpoint(&format!("{DETAILS_PATH}/{id}"))?;
        let details: FoodDetails = self.get_json(url, &[]).await?;
        debug!(id, title = %details.title, "food details fetched");
        Ok(details)
    }
}

/// In-memory lookup for tests (no network)
#[derive(Debug, Default)]
pub struct MockFoodLookup {
    foods: BTreeMap<u64, FoodDetails>,
    failure: Option<fn() -> AppError>,
    search_calls: AtomicUsize,
    detail_calls: AtomicUsize,
}

impl MockFoodLookup {
    /// Mock preloaded with a few menu items
    #[must_use]
    pub fn new() -> Self {
        Self::default()
            .with_food(FoodDetails {
                id: 424_571,
                title: "Big Mac".to_owned(),
                restaurant_chain: "McDonald's".to_owned(),
                nutrition: Nutrients::new(540.0, 25.0, 45.0, 28.0),
                images: vec!["https://images.spoonacular.com/file/wximages/424571-312x231.png".to_owned()],
            })
            .with_food(FoodDetails {
                id: 388_346,
                title: "Grilled Chicken Sandwich".to_owned(),
                restaurant_chain: "Chick-fil-A".to_owned(),
                nutrition: Nutrients::new(390.0, 28.0, 44.0, 12.0),
                images: Vec::new(),
            })
            .with_food(FoodDetails {
                id: 262_682,
                title: "Egg McMuffin".to_owned(),
                restaurant_chain: "McDonald's".to_owned(),
                nutrition: Nutrients::new(310.0, 17.0, 30.0, 13.0),
                images: Vec::new(),
            })
    }

    /// Add or replace a menu item
    #[must_use]
    pub fn with_food(mut self, details: FoodDetails) -> Self {
        self.foods.insert(details.id, details);
        self
    }

    /// Make every call fail with the error built by `failure`
    #[must_use]
    pub fn failing_with(mut self, failure: fn() -> AppError) -> Self {
        self.failure = Some(failure);
        self
    }

    /// Number of search calls received
    #[must_use]
    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    /// Number of detail calls received
    #[must_use]
    pub fn detail_calls(&self) -> usize {
        self.detail_calls.load(Ordering::SeqCst)
    }

    fn check_failure(&self) -> AppResult<()> {
        self.failure.map_or(Ok(()), |failure| Err(failure()))
    }
}

#[async_trait]
impl FoodLookup for MockFoodLookup {
    async fn search_food(&self, query: &str) -> AppResult<Vec<FoodSearchResult>> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Err(AppError::invalid_input("Search query cannot be empty"));
        }

        Ok(self
            .foods
            .values()
            .filter(|food| food.title.to_lowercase().contains(&query))
            .map(|food| FoodSearchResult {
                id: food.id,
                title: food.title.clone(),
                image: format!("https://img.example/{}.jpg", food.id),
                restaurant_chain: food.restaurant_chain.clone(),
            })
            .collect())
    }

    async fn get_food_details(&self, id: u64) -> AppResult<FoodDetails> {
        self.detail_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;

        self.foods
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Menu item {id}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn details_prefer_first_image_over_fallback() {
        let details = FoodDetails {
            id: 1,
            title: "Fries".to_owned(),
            restaurant_chain: "Wendy's".to_owned(),
            nutrition: Nutrients::default(),
            images: vec!["https://img/a.png".to_owned(), "https://img/b.png".to_owned()],
        };
        assert_eq!(details.into_food("https://img/thumb.png").image, "https://img/a.png");
    }

    #[test]
    fn details_without_images_use_fallback() {
        let details = FoodDetails {
            id: 1,
            title: "Fries".to_owned(),
            restaurant_chain: String::new(),
            nutrition: Nutrients::default(),
            images: vec![String::new()],
        };
        assert_eq!(details.into_food("https://img/thumb.png").image, "https://img/thumb.png");
    }

    #[test]
    fn detail_nutrition_accepts_strings_and_numbers() {
        let json = r#"{
            "id": 7,
            "title": "Wrap",
            "restaurantChain": "Subway",
            "nutrition": {"calories": 410, "protein": "22g", "carbs": "48g", "fat": "14g"},
            "images": []
        }"#;
        let details: FoodDetails = serde_json::from_str(json).unwrap();
        assert!((details.nutrition.calories - 410.0).abs() < f64::EPSILON);
        assert!((details.nutrition.protein - 22.0).abs() < f64::EPSILON);
        assert!((details.nutrition.fat - 14.0).abs() < f64::EPSILON);
    }

    #[test]
    fn client_requires_api_key() {
        let err = FoodApiClient::new(FoodApiConfig::default()).unwrap_err();
        assert_eq!(err.code, calorie_core::errors::ErrorCode::ConfigMissing);
    }
}
