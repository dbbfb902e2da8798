// ABOUTME: Main library entry point for the calorie tracker
// ABOUTME: Food log and selected date stores, nutrient aggregation and nutrition API lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Calorie Tracker
//!
//! Client-side state and derivation core of a personal calorie tracker.
//!
//! ## Features
//!
//! - **Food log store**: foods per date and meal, append and index-based removal
//! - **Selected date store**: the date the dashboard shows
//! - **Durable persistence**: both stores survive restarts, recovering from bad data
//! - **Aggregation**: daily totals, target progress and a 7-day calorie trend
//! - **Food lookup**: Spoonacular menu item search with a debounced, latest-wins session
//!
//! ## Architecture
//!
//! - **calorie-core**: errors, constants, models and nutrient normalization (no I/O)
//! - **store**: observable copy-on-write stores with persistence
//! - **storage**: durable key-value backends
//! - **intelligence**: pure aggregation over store snapshots
//! - **external**: remote food lookup
//! - **tracker**: facade wiring everything from configuration
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use calorie_tracker::models::{Food, MealType, Nutrients};
//! use calorie_tracker::tracker::CalorieTracker;
//!
//! let tracker = CalorieTracker::in_memory();
//! tracker.add_food_to_selected(
//!     MealType::Breakfast,
//!     Food {
//!         id: 1,
//!         title: "Oatmeal".into(),
//!         restaurant_chain: String::new(),
//!         image: String::new(),
//!         nutrients: Nutrients::new(300.0, 10.0, 54.0, 5.0),
//!     },
//! );
//! assert!((tracker.daily_summary().totals.calories - 300.0).abs() < f64::EPSILON);
//! ```

/// Environment-driven configuration
pub mod config;

/// Date key helpers
pub mod dates;

/// Unified error handling (re-exported from `calorie-core`)
pub mod errors;

/// Remote food lookup and search session
pub mod external;

/// Daily aggregation and trends
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Durable key-value storage backends
pub mod storage;

/// Food log and selected date stores
pub mod store;

/// Tracker facade
pub mod tracker;

pub use calorie_core::{constants, models, normalize};
