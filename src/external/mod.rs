// ABOUTME: External API client modules (Spoonacular menu items via RapidAPI)
// ABOUTME: Food search and detail lookup plus the debounced search session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients

/// Menu item search and detail client
pub mod food_api_client;
/// Debounced latest-wins search
pub mod search_session;

pub use food_api_client::{
    FoodApiClient, FoodDetails, FoodLookup, FoodSearchResult, MockFoodLookup,
};
pub use search_session::{SearchOutcome, SearchSession};
