// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet test logging, sample foods and storage/store constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::wildcard_in_or_patterns
)]
//! Shared test utilities for `calorie_tracker`

use calorie_tracker::errors::AppResult;
use calorie_tracker::models::{Food, Nutrients};
use calorie_tracker::storage::{InMemoryStorage, KeyValueStorage};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};
use std::thread;
use std::time::Duration;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Food with the given calories and macros
pub fn food(id: u64, title: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> Food {
    Food {
        id,
        title: title.to_owned(),
        restaurant_chain: "Test Kitchen".to_owned(),
        image: format!("https://img.example/{id}.jpg"),
        nutrients: Nutrients::new(calories, protein, carbs, fat),
    }
}

/// Food with only calories set
pub fn food_kcal(id: u64, calories: f64) -> Food {
    food(id, &format!("Food {id}"), calories, 0.0, 0.0, 0.0)
}

/// Fresh shared in-memory storage
pub fn memory_storage() -> Arc<InMemoryStorage> {
    Arc::new(InMemoryStorage::new())
}

/// Upcast for store constructors
pub fn as_dyn(storage: &Arc<InMemoryStorage>) -> Arc<dyn KeyValueStorage> {
    Arc::clone(storage) as Arc<dyn KeyValueStorage>
}

/// Float comparison with a tolerance suited to summed nutrient values
pub fn approx(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() < 1e-9
}

/// In-memory storage whose first write stalls for `first_write_delay`
pub struct SlowFirstWriteStorage {
    inner: InMemoryStorage,
    first_write_delay: Duration,
    writes: AtomicUsize,
}

impl SlowFirstWriteStorage {
    pub fn new(first_write_delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryStorage::new(),
            first_write_delay,
            writes: AtomicUsize::new(0),
        })
    }
}

impl KeyValueStorage for SlowFirstWriteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        if self.writes.fetch_add(1, Ordering::SeqCst) == 0 {
            thread::sleep(self.first_write_delay);
        }
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.inner.remove_item(key)
    }
}
