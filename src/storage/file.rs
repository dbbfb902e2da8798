// ABOUTME: File-backed key-value storage writing one JSON document per key
// ABOUTME: Writes go to a temp file first and are renamed into place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStorage;
use calorie_core::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage keeping each key in `<data_dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory cannot be created
    pub fn new(data_dir: impl AsRef<Path>) -> AppResult<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir).map_err(|e| {
            AppError::storage(format!(
                "cannot create data directory {}: {e}",
                data_dir.display()
            ))
            .with_source(e)
        })?;
        Ok(Self { data_dir })
    }

    /// Directory holding the stored files
    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path for `key`. Keys are fixed identifiers, but anything outside
    /// `[A-Za-z0-9_-]` is replaced so a key can never escape the directory.
    fn path_for(&self, key: &str) -> PathBuf {
        let file_name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.data_dir.join(format!("{file_name}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("cannot read {key:?}: {e}")).with_source(e)),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)
            .and_then(|()| fs::rename(&tmp, &path))
            .map_err(|e| AppError::storage(format!("cannot write {key:?}: {e}")).with_source(e))
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                Err(AppError::storage(format!("cannot remove {key:?}: {e}")).with_source(e))
            }
        }
    }
}
