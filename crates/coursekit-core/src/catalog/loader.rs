//! Loading catalogs from JSON files.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::Catalog;
use crate::{
    error::{ProgramError, Result},
    models::{Course, PredefinedProgram},
};

/// On-disk catalog format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub programs: BTreeMap<String, PredefinedProgram>,
}

/// Where a catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Loaded from the given file
    File(PathBuf),
    /// No catalog file was configured; the built-in sample is used
    Sample,
    /// The configured file could not be used; the built-in sample is used
    Fallback { path: PathBuf, reason: String },
    /// Supplied directly by the caller
    Provided,
}

impl Catalog {
    /// Parses a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::Serialization` for malformed JSON and
    /// `ProgramError::InvalidInput` when the course graph is inconsistent.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.courses, file.programs)
    }

    /// Reads and parses a catalog file.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::FileSystem` when the file cannot be read, plus
    /// the errors of [`Catalog::from_json_str`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| ProgramError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        let catalog = Self::from_json_str(&json)?;
        debug!("Loaded {} courses from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Loads the catalog file when given, falling back to the built-in sample
    /// catalog when there is no file or it cannot be used.
    pub fn load_or_sample(path: Option<&Path>) -> (Self, CatalogSource) {
        let Some(path) = path else {
            return (Self::sample(), CatalogSource::Sample);
        };

        match Self::load(path) {
            Ok(catalog) => (catalog, CatalogSource::File(path.to_path_buf())),
            Err(e) => {
                warn!("Using sample catalog, failed to load {}: {e}", path.display());
                (
                    Self::sample(),
                    CatalogSource::Fallback {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    },
                )
            }
        }
    }

    /// Serializes the catalog back into its file format.
    pub fn to_file(&self) -> CatalogFile {
        CatalogFile {
            courses: self.courses().iter().map(|course| (**course).clone()).collect(),
            programs: self.programs().clone(),
        }
    }

    /// Renders the catalog as pretty-printed JSON that [`Catalog::load`]
    /// reads back.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::Serialization` if a course cannot be encoded.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_file())?)
    }
}
