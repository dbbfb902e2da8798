// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Defaults, overrides and rejection of unusable values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use calorie_tracker::config::{
    FoodApiConfig, SearchConfig, StorageBackend, StorageConfig, TrackerConfig,
};
use calorie_tracker::constants::food_api::DEFAULT_API_HOST;
use calorie_tracker::errors::ErrorCode;
use calorie_tracker::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const VARS: &[&str] = &[
    "CALORIE_TRACKER_STORAGE",
    "CALORIE_TRACKER_DATA_DIR",
    "RAPIDAPI_KEY",
    "RAPIDAPI_HOST",
    "FOOD_API_BASE_URL",
    "FOOD_API_TIMEOUT_SECS",
    "FOOD_SEARCH_RESULT_LIMIT",
    "FOOD_SEARCH_DEBOUNCE_MS",
    "LOG_FORMAT",
    "SERVICE_NAME",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn defaults_without_environment() {
    clear_env();
    let config = TrackerConfig::from_env().unwrap();

    assert_eq!(config.storage.backend, StorageBackend::File);
    assert!(config.storage.data_dir.ends_with("calorie-tracker"));
    assert!(config.food_api.api_key.is_none());
    assert_eq!(config.food_api.api_host, DEFAULT_API_HOST);
    assert_eq!(config.food_api.base_url, format!("https://{DEFAULT_API_HOST}"));
    assert_eq!(config.food_api.timeout(), Duration::from_secs(10));
    assert_eq!(config.food_api.result_limit, 10);
    assert_eq!(config.search.debounce(), Duration::from_millis(1000));
}

#[test]
#[serial]
fn overrides_are_read() {
    clear_env();
    env::set_var("CALORIE_TRACKER_STORAGE", "Memory");
    env::set_var("CALORIE_TRACKER_DATA_DIR", "/tmp/tracker-data");
    env::set_var("RAPIDAPI_KEY", "secret");
    env::set_var("RAPIDAPI_HOST", "example.p.rapidapi.com");
    env::set_var("FOOD_API_TIMEOUT_SECS", "3");
    env::set_var("FOOD_SEARCH_RESULT_LIMIT", "25");
    env::set_var("FOOD_SEARCH_DEBOUNCE_MS", "250");

    let storage = StorageConfig::from_env().unwrap();
    let api = FoodApiConfig::from_env();
    let search = SearchConfig::from_env();
    clear_env();

    assert_eq!(storage.backend, StorageBackend::Memory);
    assert_eq!(storage.data_dir, PathBuf::from("/tmp/tracker-data"));
    assert_eq!(api.api_key.as_deref(), Some("secret"));
    assert_eq!(api.base_url, "https://example.p.rapidapi.com");
    assert_eq!(api.timeout_secs, 3);
    assert_eq!(api.result_limit, 25);
    assert_eq!(search.debounce_ms, 250);
}

#[test]
#[serial]
fn blank_api_key_counts_as_missing() {
    clear_env();
    env::set_var("RAPIDAPI_KEY", "   ");
    let api = FoodApiConfig::from_env();
    clear_env();
    assert!(api.api_key.is_none());
}

#[test]
#[serial]
fn unparseable_numbers_fall_back_to_defaults() {
    clear_env();
    env::set_var("FOOD_API_TIMEOUT_SECS", "soon");
    env::set_var("FOOD_SEARCH_DEBOUNCE_MS", "-5");
    let api = FoodApiConfig::from_env();
    let search = SearchConfig::from_env();
    clear_env();

    assert_eq!(api.timeout_secs, 10);
    assert_eq!(search.debounce_ms, 1000);
}

#[test]
#[serial]
fn unknown_storage_backend_is_rejected() {
    clear_env();
    env::set_var("CALORIE_TRACKER_STORAGE", "redis");
    let err = TrackerConfig::from_env().unwrap_err();
    clear_env();
    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn logging_config_reads_format_and_service() {
    clear_env();
    env::set_var("LOG_FORMAT", "json");
    env::set_var("SERVICE_NAME", "tracker-under-test");
    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "tracker-under-test");
}
