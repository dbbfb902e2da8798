// ABOUTME: Configuration management for storage, the nutrition API and search behaviour
// ABOUTME: Environment-only configuration with defaults for everything optional
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **environment**: storage backend selection and the bundled `TrackerConfig`
//! - **`api_providers`**: nutrition API credentials, limits and search debounce

/// Environment and storage configuration
pub mod environment;
/// Nutrition API and search configuration
pub mod api_providers;

pub use api_providers::{FoodApiConfig, SearchConfig};
pub use environment::{StorageBackend, StorageConfig, TrackerConfig};
