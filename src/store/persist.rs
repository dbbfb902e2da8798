// ABOUTME: Load/save discipline shared by the persisted stores
// ABOUTME: Wraps state in a versioned envelope and recovers from unreadable data with defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::KeyValueStorage;
use calorie_core::constants::PERSISTED_STATE_VERSION;
use calorie_core::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, warn};

/// On-disk shape: `{"state": <state>, "version": 0}`
#[derive(Debug, Serialize, Deserialize)]
struct PersistedEnvelope<T> {
    state: T,
    version: u32,
}

/// Persists one store's state under a fixed storage key
#[derive(Clone)]
pub struct Persistence {
    storage: Arc<dyn KeyValueStorage>,
    key: &'static str,
    write_lock: Arc<Mutex<()>>,
}

impl Persistence {
    /// Bind `key` in `storage`
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>, key: &'static str) -> Self {
        Self {
            storage,
            key,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Storage key this persistence writes to
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Read the persisted state.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns a storage error when the backend cannot be read, or a
    /// serialization error when the stored value is malformed or carries an
    /// unknown version
    pub fn load<T: DeserializeOwned>(&self) -> AppResult<Option<T>> {
        let Some(raw) = self.storage.get_item(self.key)? else {
            return Ok(None);
        };
        let envelope: PersistedEnvelope<T> = serde_json::from_str(&raw)?;
        if envelope.version != PERSISTED_STATE_VERSION {
            return Err(AppError::serialization(format!(
                "{} has version {}, expected {PERSISTED_STATE_VERSION}",
                self.key, envelope.version
            )));
        }
        Ok(Some(envelope.state))
    }

    /// Read the persisted state, substituting `default` when it is absent or
    /// unreadable. Never fails.
    pub fn load_or_else<T, F>(&self, default: F) -> T
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        match self.load() {
            Ok(Some(state)) => {
                debug!(key = self.key, "restored persisted state");
                state
            }
            Ok(None) => {
                debug!(key = self.key, "no persisted state, starting from default");
                default()
            }
            Err(e) => {
                warn!(key = self.key, error = %e, "persisted state unreadable, starting from default");
                default()
            }
        }
    }

    /// Serialize and write `state`
    ///
    /// # Errors
    ///
    /// Returns a serialization or storage error if the write fails
    pub fn save<T: Serialize>(&self, state: &T) -> AppResult<()> {
        let envelope = PersistedEnvelope {
            state,
            version: PERSISTED_STATE_VERSION,
        };
        let raw = serde_json::to_string(&envelope)?;
        self.storage.set_item(self.key, &raw)
    }

    /// Write `state`, logging instead of failing. In-memory state stays
    /// authoritative when the write is lost.
    pub fn save_or_warn<T: Serialize>(&self, state: &T) {
        if let Err(e) = self.save(state) {
            warn!(key = self.key, error = %e, "failed to persist state");
        }
    }

    /// Write the latest state, logging instead of failing.
    ///
    /// `latest` is read after the write lock is taken. When several mutators
    /// finish at once, the last write carries the newest committed state.
    pub fn save_latest_or_warn<T, F>(&self, latest: F)
    where
        T: Serialize,
        F: FnOnce() -> T,
    {
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.save_or_warn(&latest());
    }
}

impl fmt::Debug for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persistence").field("key", &self.key).finish()
    }
}
