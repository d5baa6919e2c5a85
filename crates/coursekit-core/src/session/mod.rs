//! The session: one user's catalog, program and storage.
//!
//! A [`Session`] is what an interface holds on to. It owns the [`Catalog`],
//! the [`ProgramBuilder`] built from it and the [`PersistentStore`] the
//! program is saved to.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   program_ops   │    │ ProgramBuilder  │    │     Catalog     │
//! │  (sync, by ID)  │───▶│  (state, rules) │───▶│  (read-only)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ┌─────────────────┐    ┌─────────────────┐
//! │   storage_ops   │───▶│ PersistentStore │
//! │ (async, bool)   │    │ (spawn_blocking)│
//! └─────────────────┘    └─────────────────┘
//! ```
//!
//! Program mutations are synchronous and never span an `.await`. Storage
//! operations hand a clone of the store handle to a blocking task and
//! report their outcome as a boolean, logging the underlying error.
//!
//! # Examples
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use coursekit_core::{params::Id, store::MemoryStore, SessionBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .await?;
//!
//! session.add_course_by_id(&Id { id: 1 })?;
//! assert!(session.save_program().await);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::{
    catalog::{Catalog, CatalogSource},
    program::{ProgramBuilder, ProgramListener},
    store::PersistentStore,
};

pub mod builder;
pub mod program_ops;
pub mod storage_ops;

#[cfg(test)]
mod tests;

pub use builder::{SessionBuilder, DEFAULT_STORAGE_KEY};

/// Owner of the catalog, the program under construction and its storage.
pub struct Session {
    pub(crate) catalog: Catalog,
    pub(crate) catalog_source: CatalogSource,
    pub(crate) program: ProgramBuilder,
    pub(crate) store: Arc<dyn PersistentStore>,
    pub(crate) storage_key: String,
}

impl Session {
    pub(crate) fn new(
        catalog: Catalog,
        catalog_source: CatalogSource,
        store: Arc<dyn PersistentStore>,
        storage_key: String,
    ) -> Self {
        Self {
            catalog,
            catalog_source,
            program: ProgramBuilder::new(),
            store,
            storage_key,
        }
    }

    /// The course catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Where the catalog was loaded from.
    pub fn catalog_source(&self) -> &CatalogSource {
        &self.catalog_source
    }

    /// The program under construction.
    pub fn program(&self) -> &ProgramBuilder {
        &self.program
    }

    /// The key the program is saved under.
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Registers a listener for program changes.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: ProgramListener + Send + 'static,
    {
        self.program.subscribe(listener);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("catalog_source", &self.catalog_source)
            .field("courses", &self.catalog.len())
            .field("program", &self.program.course_ids())
            .field("storage_key", &self.storage_key)
            .finish()
    }
}
