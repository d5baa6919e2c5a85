//! Saving and restoring the program through the session's store.
//!
//! Storage is best effort: every operation reports a boolean and logs the
//! reason of a failure instead of returning it.

use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::task;

use super::Session;
use crate::{
    error::{ProgramError, Result},
    store::PersistentStore,
};

impl Session {
    /// Saves the current program under the session's storage key.
    ///
    /// Returns false without writing when the program is empty, and false
    /// when the snapshot cannot be written.
    pub async fn save_program(&self) -> bool {
        if self.program.is_empty() {
            debug!("Not saving an empty program");
            return false;
        }

        let blob = match serde_json::to_value(self.program.serialize()) {
            Ok(blob) => blob,
            Err(e) => {
                error!("Failed to serialize the program: {e}");
                return false;
            }
        };

        match self
            .with_store(move |store, key| store.write(key, &blob))
            .await
        {
            Ok(()) => {
                info!("Saved program with {} courses", self.program.len());
                true
            }
            Err(e) => {
                error!("Failed to save the program: {e}");
                false
            }
        }
    }

    /// Replaces the program with the saved snapshot, if there is a usable
    /// one.
    ///
    /// Returns false and leaves the program untouched when nothing is saved,
    /// the snapshot is malformed or the store fails.
    pub async fn restore_saved_program(&mut self) -> bool {
        let blob = match self.with_store(|store, key| store.read(key)).await {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!("No saved program under '{}'", self.storage_key);
                return false;
            }
            Err(e) => {
                warn!("Failed to read the saved program: {e}");
                return false;
            }
        };

        match self.program.restore(&blob) {
            Ok(snapshot) => {
                info!("Restored program with {} courses", snapshot.courses.len());
                true
            }
            Err(e) => {
                warn!("Ignoring saved program: {e}");
                false
            }
        }
    }

    /// Deletes the saved snapshot. Returns true when one was deleted.
    pub async fn discard_saved_program(&self) -> bool {
        match self.with_store(|store, key| store.remove(key)).await {
            Ok(removed) => {
                if removed {
                    info!("Discarded saved program");
                }
                removed
            }
            Err(e) => {
                error!("Failed to discard the saved program: {e}");
                false
            }
        }
    }

    /// Runs a store operation on a blocking task.
    async fn with_store<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&dyn PersistentStore, &str) -> Result<T> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let key = self.storage_key.clone();

        task::spawn_blocking(move || op(&*store, &key))
            .await
            .map_err(|e| ProgramError::Configuration {
                message: format!("Task join error: {e}"),
            })?
    }
}
