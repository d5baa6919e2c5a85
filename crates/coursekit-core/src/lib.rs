//! Core library for the coursekit training program builder.
//!
//! This crate provides the business logic for assembling training programs
//! from a course catalog: the catalog itself, the program builder with its
//! prerequisite rules, validation and export, and persistence of programs
//! between runs.
//!
//! # Architecture
//!
//! - **Catalog** ([`catalog`]): Read-only course and predefined program data,
//!   loaded from JSON or the built-in sample
//! - **Program Builder** ([`program`]): Ordered, deduplicated course
//!   selection that enforces direct prerequisites and notifies listeners
//! - **Session** ([`session`]): Owns catalog, builder and store for one
//!   user; the entry point for interfaces
//! - **Storage** ([`store`], [`db`]): Key/value persistence of program
//!   snapshots in SQLite
//! - **Display** ([`display`]): Markdown formatting through
//!   [`std::fmt::Display`] for terminal rendering
//!
//! # Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use coursekit_core::{
//!     params::{Id, LoadProgram},
//!     store::MemoryStore,
//!     SessionBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut session = SessionBuilder::new()
//!     .with_store(Arc::new(MemoryStore::new()))
//!     .build()
//!     .await?;
//!
//! session.load_predefined_program(&LoadProgram {
//!     name: "basic".to_string(),
//! })?;
//! session.add_course_by_id(&Id { id: 6 })?;
//!
//! println!("{}", session.summary());
//! println!("{}", session.validate());
//! session.save_program().await;
//! # Ok(())
//! # }
//! ```

pub mod catalog;
pub mod db;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod operations;
pub mod params;
pub mod program;
pub mod session;
pub mod store;

// Re-export commonly used types
pub use catalog::{Catalog, CatalogSource, CourseFilter};
pub use display::{Courses, Notification, NotificationLevel, ProgramListing, Programs};
pub use error::{ProgramError, Result};
pub use export::{ClipboardSink, WriterSink};
pub use models::{
    Course, Difficulty, PredefinedProgram, ProgramSnapshot, ProgramSummary, ValidationError,
    ValidationReport, ValidationWarning,
};
pub use program::{EventLog, ProgramBuilder, ProgramEvent, ProgramListener};
pub use session::{Session, SessionBuilder};
pub use store::{MemoryStore, PersistentStore, SqliteStore};
