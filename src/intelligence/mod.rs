// ABOUTME: Nutrition intelligence module deriving dashboard metrics from logged foods
// ABOUTME: Re-exports the daily aggregator functions and summary types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Derived nutrition metrics. Everything here is a pure function of a
//! [`calorie_core::models::FoodLogs`] snapshot.

/// Daily totals, target progress and the weekly calorie trend
pub mod daily_aggregator;

pub use daily_aggregator::{
    nutrient_progress, per_meal_calories, percent_achieved, total_calories, total_carbs,
    total_fat, total_protein, weekly_calorie_trend, DailySummary, DailyTargets, DailyTotals,
    Macro, MacroProgress, TrendPoint,
};
