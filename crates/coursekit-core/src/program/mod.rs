//! The program builder: an ordered, deduplicated selection of catalog
//! courses.
//!
//! [`ProgramBuilder`] is the core state machine of the library. It keeps the
//! selected courses in insertion order and enforces the dependency rules of
//! the catalog at the points where they can be checked cheaply:
//!
//! - a course can only be added once, and only after all of its direct
//!   prerequisites are present;
//! - a course cannot be removed while a present course lists it as a direct
//!   prerequisite.
//!
//! Reordering, bulk loads and restores do not re-check prerequisites.
//!
//! Every operation either applies its full effect or leaves the program
//! unchanged. Successful mutations are reported to subscribed
//! [`ProgramListener`]s.
//!
//! ## Submodules
//!
//! - [`events`]: Change notifications
//! - [`membership`]: Add, remove, reorder and clear
//! - [`predefined`]: Loading predefined programs from the catalog
//! - [`persistence`]: Snapshots for persistent storage
//! - [`report`]: Summaries and validation
//!
//! # Examples
//!
//! ```rust
//! use coursekit_core::{Catalog, ProgramBuilder, ProgramError};
//!
//! let catalog = Catalog::sample();
//! let mut program = ProgramBuilder::new();
//!
//! let intro = catalog.get_by_id(1).unwrap().clone();
//! let chatgpt = catalog.get_by_id(2).unwrap().clone();
//!
//! // Course 2 requires course 1
//! assert!(matches!(
//!     program.add(chatgpt.clone()),
//!     Err(ProgramError::UnmetPrerequisite { .. })
//! ));
//!
//! program.add(intro)?;
//! program.add(chatgpt)?;
//! assert_eq!(program.summarize().total_duration, 120);
//! # Ok::<(), ProgramError>(())
//! ```

use std::{fmt, sync::Arc};

use crate::models::Course;

pub mod events;
pub mod membership;
pub mod persistence;
pub mod predefined;
pub mod report;

#[cfg(test)]
mod tests;

pub use events::{EventLog, ProgramEvent, ProgramListener};

/// Ordered collection of selected courses with prerequisite enforcement.
#[derive(Default)]
pub struct ProgramBuilder {
    selected: Vec<Arc<Course>>,
    listeners: Vec<Box<dyn ProgramListener + Send>>,
}

impl ProgramBuilder {
    /// Creates an empty program without listeners.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener that is notified after every successful change.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: ProgramListener + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Selected courses in program order.
    pub fn courses(&self) -> &[Arc<Course>] {
        &self.selected
    }

    /// IDs of the selected courses in program order.
    pub fn course_ids(&self) -> Vec<u64> {
        self.selected.iter().map(|course| course.id).collect()
    }

    /// Number of selected courses.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns true when no course is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Returns true when the course is part of the program.
    pub fn contains(&self, id: u64) -> bool {
        self.position(id).is_some()
    }

    /// Zero-based position of the course in the program.
    pub fn position(&self, id: u64) -> Option<usize> {
        self.selected.iter().position(|course| course.id == id)
    }

    /// Looks up a selected course by ID.
    pub fn get(&self, id: u64) -> Option<&Arc<Course>> {
        self.selected.iter().find(|course| course.id == id)
    }

    pub(crate) fn emit(&mut self, event: ProgramEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}

impl fmt::Debug for ProgramBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgramBuilder")
            .field("selected", &self.course_ids())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
