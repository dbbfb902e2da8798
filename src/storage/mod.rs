// ABOUTME: Durable key-value storage abstraction backing the persisted stores
// ABOUTME: Pluggable backends (in-memory, JSON files) selected from configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Durable local storage
//!
//! A string-keyed, string-valued store in the spirit of browser local
//! storage. Stores write their whole serialized state under a fixed key on
//! every mutation and read it back once at startup.

/// JSON-file-per-key backend
pub mod file;
/// In-memory backend
pub mod memory;

use crate::config::{StorageBackend, StorageConfig};
use calorie_core::errors::AppResult;
use std::sync::Arc;

pub use file::FileStorage;
pub use memory::InMemoryStorage;

/// Key-value storage provider
///
/// Implementations must be cheap to call from the UI thread; writes replace
/// the whole value for a key. There is no cross-process locking: when two
/// writers share a backend, the last write wins.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be read
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete the value stored under `key`; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be written
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// Create the storage backend named by the configuration
///
/// # Errors
///
/// Returns a storage error if the file backend's data directory cannot be created
pub fn create_storage(config: &StorageConfig) -> AppResult<Arc<dyn KeyValueStorage>> {
    match config.backend {
        StorageBackend::Memory => {
            tracing::info!("using in-memory storage; state will not survive a restart");
            Ok(Arc::new(InMemoryStorage::new()))
        }
        StorageBackend::File => {
            tracing::info!(data_dir = %config.data_dir.display(), "using file storage");
            Ok(Arc::new(FileStorage::new(&config.data_dir)?))
        }
    }
}
