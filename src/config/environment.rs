// ABOUTME: Environment-driven configuration for the tracker: storage backend and bundled settings
// ABOUTME: Every value has a default except the API key, which is only needed by the live client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::api_providers::{FoodApiConfig, SearchConfig};
use calorie_core::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Directory name used under the platform data directory
const DATA_DIR_NAME: &str = "calorie-tracker";

/// Durable storage backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// One JSON file per storage key in a data directory
    File,
    /// Process memory only; nothing survives a restart
    Memory,
}

impl FromStr for StorageBackend {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            other => Err(AppError::config_invalid(format!(
                "CALORIE_TRACKER_STORAGE must be 'file' or 'memory', got {other:?}"
            ))),
        }
    }
}

/// Durable storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Backend to persist store state into
    pub backend: StorageBackend,
    /// Directory for the file backend
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            data_dir: default_data_dir(),
        }
    }
}

impl StorageConfig {
    /// Load storage configuration from environment
    ///
    /// # Errors
    ///
    /// Returns a `ConfigInvalid` error for an unknown backend name
    pub fn from_env() -> AppResult<Self> {
        let backend = env::var("CALORIE_TRACKER_STORAGE")
            .ok()
            .map(|v| v.parse::<StorageBackend>())
            .transpose()?
            .unwrap_or(StorageBackend::File);

        let data_dir = env::var("CALORIE_TRACKER_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        Ok(Self { backend, data_dir })
    }

    /// In-memory storage, used by tests and throwaway sessions
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: default_data_dir(),
        }
    }
}

/// Platform data directory for the tracker, falling back to the working
/// directory when the platform has none
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Complete tracker configuration
#[derive(Debug, Clone, Default)]
pub struct TrackerConfig {
    /// Durable storage settings
    pub storage: StorageConfig,
    /// Remote nutrition API settings
    pub food_api: FoodApiConfig,
    /// Search box behaviour
    pub search: SearchConfig,
}

impl TrackerConfig {
    /// Load the full configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns a config error when a variable is present but unusable
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            storage: StorageConfig::from_env()?,
            food_api: FoodApiConfig::from_env(),
            search: SearchConfig::from_env(),
        })
    }
}

/// Get environment variable or default value
pub fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse environment variable, falling back to `default` when absent or unparseable
pub fn env_parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or(default)
}
