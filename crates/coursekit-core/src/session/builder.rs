//! Builder for creating and configuring Session instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Session;
use crate::{
    catalog::{Catalog, CatalogSource},
    error::{ProgramError, Result},
    store::{PersistentStore, SqliteStore},
};

/// Key the program snapshot is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "saved-program";

const XDG_PREFIX: &str = "coursekit";

/// Builder for creating and configuring Session instances.
#[derive(Default)]
pub struct SessionBuilder {
    database_path: Option<PathBuf>,
    catalog_path: Option<PathBuf>,
    catalog: Option<Catalog>,
    store: Option<Arc<dyn PersistentStore>>,
    storage_key: Option<String>,
}

impl SessionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/coursekit/coursekit.db` or
    /// `~/.local/share/coursekit/coursekit.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets a custom catalog file.
    ///
    /// If not specified, `courses.json` is looked up in the XDG data
    /// directories and the built-in sample catalog is used when none exists.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses an already loaded catalog. Takes precedence over a catalog path.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Uses the given store instead of opening a SQLite database.
    pub fn with_store(mut self, store: Arc<dyn PersistentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Sets the key the program snapshot is stored under.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = Some(key.into());
        self
    }

    /// Builds the configured session.
    ///
    /// A catalog file that cannot be used is not an error: the sample
    /// catalog is used instead and the fallback is reported through
    /// [`Session::catalog_source`].
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::InvalidInput` if the storage key is blank
    /// Returns `ProgramError::XdgDirectory` if no default database location
    /// can be determined
    /// Returns `ProgramError::FileSystem` or `ProgramError::Database` if
    /// database initialization fails
    pub async fn build(self) -> Result<Session> {
        let storage_key = self
            .storage_key
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        if storage_key.trim().is_empty() {
            return Err(ProgramError::invalid_input("storage_key")
                .with_reason("Storage key cannot be empty"));
        }

        let database_path = match (&self.store, self.database_path) {
            (Some(_), _) => None,
            (None, Some(path)) => Some(path),
            (None, None) => Some(Self::default_database_path()?),
        };
        let provided = self.catalog;
        let catalog_path = self.catalog_path.or_else(Self::default_catalog_path);

        let (catalog, catalog_source, opened) = task::spawn_blocking(move || {
            let opened = database_path.map(SqliteStore::open).transpose()?;
            let (catalog, source) = match provided {
                Some(catalog) => (catalog, CatalogSource::Provided),
                None => Catalog::load_or_sample(catalog_path.as_deref()),
            };
            Ok::<_, ProgramError>((catalog, source, opened))
        })
        .await
        .map_err(|e| ProgramError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let store: Arc<dyn PersistentStore> = match (self.store, opened) {
            (Some(store), _) => store,
            (None, Some(sqlite)) => {
                debug!("Using program store at {}", sqlite.path().display());
                Arc::new(sqlite)
            }
            (None, None) => {
                return Err(ProgramError::Configuration {
                    message: "No program store configured".to_string(),
                })
            }
        };

        debug!(
            "Session ready with {} courses from {:?}",
            catalog.len(),
            catalog_source
        );
        Ok(Session::new(catalog, catalog_source, store, storage_key))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_data_file("coursekit.db")
            .map_err(|e| ProgramError::XdgDirectory(e.to_string()))
    }

    /// Returns the first `courses.json` found in the XDG data directories.
    fn default_catalog_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX).find_data_file("courses.json")
    }
}
