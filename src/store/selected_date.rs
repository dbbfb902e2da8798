// ABOUTME: Selected date store holding the single date currently being viewed
// ABOUTME: Defaults to today's local date and persists under "date-storage"
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::container::{StateContainer, SubscriptionId};
use super::persist::Persistence;
use crate::dates::today_key;
use crate::storage::KeyValueStorage;
use calorie_core::constants::DATE_STORE_KEY;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Persisted state shape: `{"selectedDate": "YYYY-MM-DD"}`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PersistedSelectedDate<D> {
    selected_date: D,
}

/// Store of the currently viewed date.
///
/// The value is stored as given; validating that it is a real calendar date
/// is left to whoever calls [`Self::set_selected_date`].
#[derive(Debug)]
pub struct SelectedDateStore {
    container: StateContainer<String>,
    persistence: Persistence,
}

impl SelectedDateStore {
    /// Restore the store from `storage`, defaulting to today's local date
    #[must_use]
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self::load_with_default(storage, today_key)
    }

    /// Restore the store from `storage`, using `default` when nothing usable
    /// is stored
    #[must_use]
    pub fn load_with_default<F>(storage: Arc<dyn KeyValueStorage>, default: F) -> Self
    where
        F: FnOnce() -> String,
    {
        let persistence = Persistence::new(storage, DATE_STORE_KEY);
        let selected = persistence
            .load_or_else(|| PersistedSelectedDate {
                selected_date: default(),
            })
            .selected_date;
        debug!(selected_date = %selected, "selected date store ready");
        Self {
            container: StateContainer::new(selected),
            persistence,
        }
    }

    /// Currently selected date
    #[must_use]
    pub fn selected_date(&self) -> String {
        self.container.get().as_ref().clone()
    }

    /// Replace the selected date and persist it
    pub fn set_selected_date(&self, date: impl Into<String>) {
        let date = date.into();
        if let Some(current) = self.container.update(|_| Some(date)) {
            debug!(selected_date = %current, "selected date changed");
            self.persistence.save_latest_or_warn(|| PersistedSelectedDate {
                selected_date: self.container.get(),
            });
        }
    }

    /// Listen for changes with `(previous, current)` dates
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&Arc<String>, &Arc<String>) + Send + Sync + 'static,
    {
        self.container.subscribe(listener)
    }

    /// Stop a listener registered with [`Self::subscribe`]
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.container.unsubscribe(id)
    }
}
