//! Key/value persistence for program snapshots.
//!
//! [`PersistentStore`] is the narrow storage contract the session relies on.
//! Implementations report failures as errors; the session turns them into a
//! boolean outcome.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde_json::Value;

use crate::{
    db::Database,
    error::{ProgramError, Result},
};

/// Opaque key/value storage for JSON blobs.
pub trait PersistentStore: Send + Sync {
    /// Stores the blob under the key, replacing any previous value.
    fn write(&self, key: &str, blob: &Value) -> Result<()>;

    /// Reads the blob stored under the key.
    fn read(&self, key: &str) -> Result<Option<Value>>;

    /// Deletes the blob stored under the key. Returns true when one existed.
    fn remove(&self, key: &str) -> Result<bool>;
}

/// Store backed by a SQLite database file.
///
/// A connection is opened per call, so the store can be shared freely
/// between blocking tasks.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens the database once to create the schema, then returns the store.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::FileSystem` when the parent directory cannot be
    /// created and `ProgramError::Database` when initialization fails.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let db_path = path.as_ref().to_path_buf();

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ProgramError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Database::new(&db_path)?;
        Ok(Self { db_path })
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }
}

impl PersistentStore for SqliteStore {
    fn write(&self, key: &str, blob: &Value) -> Result<()> {
        let json = serde_json::to_string(blob)?;
        let mut db = Database::new(&self.db_path)?;
        db.put_value(key, &json)
    }

    fn read(&self, key: &str) -> Result<Option<Value>> {
        let db = Database::new(&self.db_path)?;
        db.get_value(key)?
            .map(|json| serde_json::from_str(&json).map_err(ProgramError::from))
            .transpose()
    }

    fn remove(&self, key: &str) -> Result<bool> {
        let mut db = Database::new(&self.db_path)?;
        db.delete_value(key)
    }
}

/// Volatile in-process store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Value>>> {
        self.entries.lock().map_err(|_| ProgramError::Configuration {
            message: "memory store lock poisoned".to_string(),
        })
    }
}

impl PersistentStore for MemoryStore {
    fn write(&self, key: &str, blob: &Value) -> Result<()> {
        self.lock()?.insert(key.to_string(), blob.clone());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        Ok(self.lock()?.remove(key).is_some())
    }
}
