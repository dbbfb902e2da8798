// ABOUTME: Calorie tracker facade wiring durable storage, both stores and the aggregator
// ABOUTME: Selected-date conveniences used by the dashboard and the food search flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Calorie Tracker
//!
//! Entry point for a UI: build it from [`TrackerConfig`], then read the
//! selected date, log foods against it and render its summary and trend.
//!
//! ```rust,no_run
//! use calorie_tracker::config::TrackerConfig;
//! use calorie_tracker::tracker::CalorieTracker;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = CalorieTracker::from_config(&TrackerConfig::from_env()?)?;
//! let summary = tracker.daily_summary();
//! println!("{} kcal ({}%)", summary.totals.calories, summary.percent_achieved);
//! # Ok(())
//! # }
//! ```

use crate::config::TrackerConfig;
use crate::dates::{date_key, parse_date_key};
use crate::intelligence::{weekly_calorie_trend, DailySummary, DailyTargets, TrendPoint};
use crate::storage::{create_storage, InMemoryStorage, KeyValueStorage};
use crate::store::{FoodLogStore, SelectedDateStore};
use calorie_core::errors::AppResult;
use calorie_core::models::{DayLog, Food, MealType};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::info;

/// Both stores plus the fixed daily targets
#[derive(Debug)]
pub struct CalorieTracker {
    food_logs: FoodLogStore,
    selected_date: SelectedDateStore,
    targets: DailyTargets,
}

impl CalorieTracker {
    /// Build the tracker on the storage backend named by `config`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be opened
    pub fn from_config(config: &TrackerConfig) -> AppResult<Self> {
        let storage = create_storage(&config.storage)?;
        Ok(Self::with_storage(storage))
    }

    /// Build the tracker on an existing storage backend, restoring both stores
    #[must_use]
    pub fn with_storage(storage: Arc<dyn KeyValueStorage>) -> Self {
        let food_logs = FoodLogStore::load(Arc::clone(&storage));
        let selected_date = SelectedDateStore::load(storage);
        info!(
            selected_date = %selected_date.selected_date(),
            logged_dates = food_logs.food_logs().len(),
            "calorie tracker ready"
        );
        Self {
            food_logs,
            selected_date,
            targets: DailyTargets::default(),
        }
    }

    /// Tracker whose state lives only in memory
    #[must_use]
    pub fn in_memory() -> Self {
        Self::with_storage(Arc::new(InMemoryStorage::new()))
    }

    /// Food log store
    #[must_use]
    pub const fn food_logs(&self) -> &FoodLogStore {
        &self.food_logs
    }

    /// Selected date store
    #[must_use]
    pub const fn selected_date_store(&self) -> &SelectedDateStore {
        &self.selected_date
    }

    /// Daily targets used for summaries
    #[must_use]
    pub const fn targets(&self) -> &DailyTargets {
        &self.targets
    }

    /// Currently selected date key
    #[must_use]
    pub fn selected_date(&self) -> String {
        self.selected_date.selected_date()
    }

    /// Select a date key as-is
    pub fn set_selected_date(&self, date: impl Into<String>) {
        self.selected_date.set_selected_date(date);
    }

    /// Select a calendar date
    pub fn select_day(&self, date: NaiveDate) {
        self.selected_date.set_selected_date(date_key(date));
    }

    /// Day log of the selected date
    #[must_use]
    pub fn selected_day(&self) -> Arc<DayLog> {
        self.food_logs.get_log(&self.selected_date())
    }

    /// Log `food` under `meal` on the selected date
    pub fn add_food_to_selected(&self, meal: MealType, food: Food) {
        self.food_logs.add_food(&self.selected_date(), meal, food);
    }

    /// Remove the food at `index` of `meal` on the selected date
    pub fn remove_food_from_selected(&self, meal: MealType, index: usize) -> Option<Food> {
        self.food_logs
            .remove_food(&self.selected_date(), meal, index)
    }

    /// Summary for any date key
    #[must_use]
    pub fn summary_for(&self, date: &str) -> DailySummary {
        DailySummary::compute(date, &self.food_logs.get_log(date), &self.targets)
    }

    /// Summary for the selected date
    #[must_use]
    pub fn daily_summary(&self) -> DailySummary {
        self.summary_for(&self.selected_date())
    }

    /// Seven-day calorie trend ending at the selected date
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` when the selected date is not a `YYYY-MM-DD` key
    pub fn weekly_trend(&self) -> AppResult<Vec<TrendPoint>> {
        let end = parse_date_key(&self.selected_date())?;
        Ok(weekly_calorie_trend(&self.food_logs.food_logs(), end))
    }
}
