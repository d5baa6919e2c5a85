//! Data models for courses and programs.
//!
//! This module contains the domain models of the coursekit system: catalog
//! courses, predefined program definitions, and the derived views the program
//! builder produces (summaries, validation reports, persisted snapshots).
//! Display implementations for these models live in
//! [`crate::display::models`] to keep data structures and presentation apart.
//!
//! # Serialization
//!
//! Every model round-trips through JSON. Field names follow the catalog file
//! format (`practicalTasks`, `createdAt`, `totalDuration`, ...), so a catalog
//! exported by other tools can be loaded unchanged.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeSet;
//!
//! use coursekit_core::models::{Course, Difficulty};
//!
//! let course = Course {
//!     id: 1,
//!     title: "Introduction to AI".to_string(),
//!     description: "History, capabilities and limits of modern AI".to_string(),
//!     category: Some("basic".to_string()),
//!     duration: 60,
//!     tools: vec!["General theory".to_string()],
//!     topics: vec!["History of AI".to_string()],
//!     practical_tasks: vec![],
//!     prerequisites: BTreeSet::new(),
//!     difficulty: Difficulty::Beginner,
//!     price: 0.0,
//! };
//! assert!(course.has_tool("General theory"));
//! ```

pub mod course;
pub mod difficulty;
pub mod program;
pub mod snapshot;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod tests;

pub use course::Course;
pub use difficulty::Difficulty;
pub use program::PredefinedProgram;
pub use snapshot::ProgramSnapshot;
pub use summary::ProgramSummary;
pub use validation::{ValidationError, ValidationReport, ValidationWarning};
