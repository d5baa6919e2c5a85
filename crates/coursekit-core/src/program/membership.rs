//! Membership operations: add, remove, reorder and clear.

use std::sync::Arc;

use log::debug;

use super::{ProgramBuilder, ProgramEvent};
use crate::{
    error::{Dependent, ProgramError, Result},
    models::Course,
};

impl ProgramBuilder {
    /// Appends a course to the end of the program.
    ///
    /// # Errors
    ///
    /// - `ProgramError::DuplicateMember` when the course is already present
    /// - `ProgramError::UnmetPrerequisite` when any direct prerequisite is
    ///   missing; the error lists every missing ID
    ///
    /// The program is unchanged on error.
    pub fn add(&mut self, course: Arc<Course>) -> Result<()> {
        if self.contains(course.id) {
            return Err(ProgramError::DuplicateMember {
                id: course.id,
                title: course.title.clone(),
            });
        }

        let missing: Vec<u64> = course
            .prerequisites
            .iter()
            .copied()
            .filter(|id| !self.contains(*id))
            .collect();
        if !missing.is_empty() {
            return Err(ProgramError::UnmetPrerequisite {
                id: course.id,
                title: course.title.clone(),
                missing,
            });
        }

        let course_id = course.id;
        debug!("Adding course {course_id} to program");
        self.selected.push(course);

        self.emit(ProgramEvent::SelectionChanged {
            course_id,
            selected: true,
        });
        self.emit(ProgramEvent::ProgramMutated);
        Ok(())
    }

    /// Removes a course, keeping the order of the remaining ones.
    ///
    /// Returns the removed course, or `None` when it was not in the program.
    ///
    /// # Errors
    ///
    /// `ProgramError::BlockedByDependents` when present courses list this
    /// course as a prerequisite; the error names all of them.
    pub fn remove(&mut self, id: u64) -> Result<Option<Arc<Course>>> {
        let Some(index) = self.position(id) else {
            return Ok(None);
        };

        let dependents: Vec<Dependent> = self
            .selected
            .iter()
            .filter(|course| course.requires(id))
            .map(|course| Dependent {
                id: course.id,
                title: course.title.clone(),
            })
            .collect();
        if !dependents.is_empty() {
            return Err(ProgramError::BlockedByDependents { id, dependents });
        }

        debug!("Removing course {id} from program");
        let removed = self.selected.remove(index);

        self.emit(ProgramEvent::SelectionChanged {
            course_id: id,
            selected: false,
        });
        self.emit(ProgramEvent::ProgramMutated);
        Ok(Some(removed))
    }

    /// Swaps a course with its predecessor.
    ///
    /// Returns false when the course is absent or already first.
    pub fn move_up(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.selected.swap(index - 1, index);
                self.emit(ProgramEvent::ProgramMutated);
                true
            }
            _ => false,
        }
    }

    /// Swaps a course with its successor.
    ///
    /// Returns false when the course is absent or already last.
    pub fn move_down(&mut self, id: u64) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.selected.len() => {
                self.selected.swap(index, index + 1);
                self.emit(ProgramEvent::ProgramMutated);
                true
            }
            _ => false,
        }
    }

    /// Empties the program unconditionally and returns how many courses were
    /// removed. Asking the user for confirmation is up to the caller.
    pub fn clear(&mut self) -> usize {
        if self.selected.is_empty() {
            return 0;
        }

        let removed = std::mem::take(&mut self.selected);
        debug!("Cleared {} courses from program", removed.len());

        for course in &removed {
            self.emit(ProgramEvent::SelectionChanged {
                course_id: course.id,
                selected: false,
            });
        }
        self.emit(ProgramEvent::ProgramMutated);
        removed.len()
    }

    /// Replaces the program wholesale without any prerequisite checks.
    ///
    /// Old members are deselected before the new ones are selected.
    pub(crate) fn replace(&mut self, courses: Vec<Arc<Course>>) {
        let previous = std::mem::replace(&mut self.selected, courses);

        for course in &previous {
            self.emit(ProgramEvent::SelectionChanged {
                course_id: course.id,
                selected: false,
            });
        }
        let ids = self.course_ids();
        for course_id in ids {
            self.emit(ProgramEvent::SelectionChanged {
                course_id,
                selected: true,
            });
        }
        self.emit(ProgramEvent::ProgramMutated);
    }
}
