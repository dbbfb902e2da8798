// ABOUTME: Core data models for the calorie tracker
// ABOUTME: Re-exports the food logging types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Food logging models (nutrients, foods, meals, day logs)
pub mod nutrition;

pub use nutrition::{DayLog, Food, FoodLogs, MealType, Nutrients};
