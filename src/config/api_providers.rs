// ABOUTME: Remote nutrition API configuration and search box behaviour settings
// ABOUTME: RapidAPI key/host pair, base URL, timeout, result limit and debounce interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::environment::{env_parse_or, env_var_or};
use calorie_core::constants::food_api::{
    DEFAULT_API_HOST, DEFAULT_RESULT_LIMIT, DEFAULT_SEARCH_DEBOUNCE_MS, DEFAULT_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Spoonacular (via RapidAPI) configuration
///
/// The key/host pair is static and attached to every request; there is no
/// token refresh.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodApiConfig {
    /// RapidAPI key; the live client refuses to start without one
    pub api_key: Option<String>,
    /// RapidAPI host header value
    pub api_host: String,
    /// Base URL requests are sent to
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Number of results requested per search
    pub result_limit: u32,
}

impl Default for FoodApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_host: DEFAULT_API_HOST.to_owned(),
            base_url: format!("https://{DEFAULT_API_HOST}"),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            result_limit: DEFAULT_RESULT_LIMIT,
        }
    }
}

impl FoodApiConfig {
    /// Load nutrition API configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        let api_host = env_var_or("RAPIDAPI_HOST", DEFAULT_API_HOST);
        Self {
            api_key: env::var("RAPIDAPI_KEY").ok().filter(|k| !k.trim().is_empty()),
            base_url: env_var_or("FOOD_API_BASE_URL", &format!("https://{api_host}")),
            api_host,
            timeout_secs: env_parse_or("FOOD_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS),
            result_limit: env_parse_or("FOOD_SEARCH_RESULT_LIMIT", DEFAULT_RESULT_LIMIT),
        }
    }

    /// Request timeout as a `Duration`
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Search box behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period after the last input before a search is sent
    pub debounce_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
        }
    }
}

impl SearchConfig {
    /// Load search configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            debounce_ms: env_parse_or("FOOD_SEARCH_DEBOUNCE_MS", DEFAULT_SEARCH_DEBOUNCE_MS),
        }
    }

    /// Debounce interval as a `Duration`
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
