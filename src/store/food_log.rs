// ABOUTME: Food log store owning the date -> meal -> foods structure
// ABOUTME: Append/remove with structural sharing, persisted under "food-store" after every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Food Log Store
//!
//! Sole owner of the [`FoodLogs`] map. Every mutation produces a new map that
//! shares all untouched days, and within the touched day all untouched meals,
//! with the previous one. Observers compare old and new snapshots by pointer.

use super::container::{StateContainer, SubscriptionId};
use super::persist::Persistence;
use crate::storage::KeyValueStorage;
use calorie_core::constants::FOOD_STORE_KEY;
use calorie_core::models::{DayLog, Food, FoodLogs, MealType};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Persisted state shape: `{"foodLogs": {...}}`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedFoodLogs<L> {
    food_logs: L,
}

/// Store of logged foods per date and meal
#[derive(Debug)]
pub struct FoodLogStore {
    container: StateContainer<FoodLogs>,
    persistence: Persistence,
}

impl FoodLogStore {
    /// Restore the store from `storage`, starting empty when nothing usable
    /// is stored
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let persistence = Persistence::new(storage, FOOD_STORE_KEY);
        let restored = persistence
            .load_or_else(|| PersistedFoodLogs {
                food_logs: FoodLogs::new(),
            })
            .food_logs;
        debug!(dates = restored.len(), "food log store ready");
        Self {
            container: StateContainer::new(restored),
            persistence,
        }
    }

    /// Append `food` to the end of `(date, meal)`.
    ///
    /// Creates the date entry on first use. Never rejects and never
    /// deduplicates.
    pub fn add_food(&self, date: &str, meal: MealType, mut food: Food) {
        let food_id = food.id;
        food.nutrients = food.nutrients.sanitized();
        let committed = self.container.update(|logs| {
            let day = logs.lookup(date);
            let mut foods = day.meal(meal).to_vec();
            foods.push(food);
            Some(logs.with_day(date, Arc::new(day.with_meal(meal, foods.into()))))
        });
        if committed.is_some() {
            debug!(date, %meal, food_id, "food added");
            self.persist();
        }
    }

    /// Remove the food at `index` from `(date, meal)`.
    ///
    /// Later foods shift down by one, so an index taken before this call no
    /// longer names the same food afterwards. Removing from a date or meal
    /// that has nothing logged, or with an out-of-range index, changes
    /// nothing: no date entry is created and nothing is persisted.
    ///
    /// Returns the removed food.
    pub fn remove_food(&self, date: &str, meal: MealType, index: usize) -> Option<Food> {
        let mut removed = None;
        let committed = self.container.update(|logs| {
            let day = logs.get(date)?;
            let foods = day.meal(meal);
            if index >= foods.len() {
                return None;
            }
            let mut remaining = foods.to_vec();
            removed = Some(remaining.remove(index));
            Some(logs.with_day(date, Arc::new(day.with_meal(meal, remaining.into()))))
        });
        match committed {
            Some(_) => {
                debug!(date, %meal, index, "food removed");
                self.persist();
            }
            None => debug!(date, %meal, index, "nothing to remove"),
        }
        removed
    }

    /// Day log for `date`; an all-empty day when nothing is logged
    #[must_use]
    pub fn get_log(&self, date: &str) -> Arc<DayLog> {
        self.container.get().lookup(date)
    }

    /// Snapshot of every logged date
    #[must_use]
    pub fn food_logs(&self) -> Arc<FoodLogs> {
        self.container.get()
    }

    /// Listen for committed changes with `(previous, current)` snapshots
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<FoodLogs>, &Arc<FoodLogs>) + Send + Sync + 'static,
    {
        self.container.subscribe(listener)
    }

    /// Stop a listener registered with [`Self::subscribe`]
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.container.unsubscribe(id)
    }

    fn persist(&self) {
        self.persistence.save_latest_or_warn(|| PersistedFoodLogs {
            food_logs: self.container.get(),
        });
    }
}
