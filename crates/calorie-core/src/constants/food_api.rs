// ABOUTME: Defaults for the RapidAPI-hosted Spoonacular menu item endpoints
// ABOUTME: Host, paths, header names, timeouts and the search debounce interval
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Service name used in error messages and log fields
pub const SERVICE_NAME: &str = "Food API";

/// Default RapidAPI host for the Spoonacular API
pub const DEFAULT_API_HOST: &str = "spoonacular-recipe-food-nutrition-v1.p.rapidapi.com";

/// Header carrying the RapidAPI host
pub const HOST_HEADER: &str = "x-rapidapi-host";

/// Header carrying the RapidAPI key
pub const KEY_HEADER: &str = "x-rapidapi-key";

/// Menu item search path
pub const SEARCH_PATH: &str = "/food/menuItems/search";

/// Menu item detail path prefix (`/food/menuItems/{id}`)
pub const DETAILS_PATH: &str = "/food/menuItems";

/// Number of search results requested per query
pub const DEFAULT_RESULT_LIMIT: u32 = 10;

/// Request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Quiet period after the last keystroke before a search fires
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 1000;
