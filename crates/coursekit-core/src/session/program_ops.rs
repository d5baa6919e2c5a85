//! Program and catalog operations of the Session.
//!
//! These resolve course and program IDs against the catalog and delegate to
//! the [`ProgramBuilder`](crate::ProgramBuilder).

use std::sync::Arc;

use log::{debug, info, warn};

use super::Session;
use crate::{
    error::{ProgramError, Result},
    export::ClipboardSink,
    models::{Course, PredefinedProgram, ProgramSummary, ValidationReport},
    operations,
    params::{ClearProgram, Id, ListCourses, LoadProgram},
};

impl Session {
    /// Lists catalog courses matching the given criteria, in catalog order.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::InvalidInput` for an unknown difficulty name.
    pub fn list_courses(&self, params: &ListCourses) -> Result<Vec<Arc<Course>>> {
        operations::list_courses(&self.catalog, params)
    }

    /// Looks up a catalog course.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::CourseNotFound` if the catalog has no such
    /// course.
    pub fn get_course(&self, params: &Id) -> Result<Arc<Course>> {
        self.catalog
            .get_by_id(params.id)
            .cloned()
            .ok_or(ProgramError::CourseNotFound { id: params.id })
    }

    /// Adds a catalog course to the end of the program.
    ///
    /// # Errors
    ///
    /// - `ProgramError::CourseNotFound` if the catalog has no such course
    /// - `ProgramError::DuplicateMember` if it is already in the program
    /// - `ProgramError::UnmetPrerequisite` if direct prerequisites are missing
    pub fn add_course_by_id(&mut self, params: &Id) -> Result<Arc<Course>> {
        let course = self.get_course(params)?;
        self.program.add(Arc::clone(&course))?;
        info!("Added course {} to the program", course.id);
        Ok(course)
    }

    /// Removes a course from the program. Returns `None` when it was not a
    /// member.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::BlockedByDependents` while other members
    /// require it.
    pub fn remove_course(&mut self, params: &Id) -> Result<Option<Arc<Course>>> {
        let removed = self.program.remove(params.id)?;
        if removed.is_some() {
            info!("Removed course {} from the program", params.id);
        }
        Ok(removed)
    }

    /// Moves a course one position earlier. Returns false at the top or when
    /// the course is not a member.
    pub fn move_course_up(&mut self, params: &Id) -> bool {
        self.program.move_up(params.id)
    }

    /// Moves a course one position later. Returns false at the bottom or when
    /// the course is not a member.
    pub fn move_course_down(&mut self, params: &Id) -> bool {
        self.program.move_down(params.id)
    }

    /// Removes every course from the program and returns how many were
    /// removed.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::InvalidInput` unless the caller confirmed the
    /// operation.
    pub fn clear_program(&mut self, params: &ClearProgram) -> Result<usize> {
        if !params.confirmed {
            return Err(ProgramError::invalid_input("confirm")
                .with_reason("Clearing the program must be confirmed"));
        }
        let removed = self.program.clear();
        info!("Cleared {removed} courses from the program");
        Ok(removed)
    }

    /// Replaces the program with one of the catalog's predefined programs.
    ///
    /// Returns the predefined program and the number of loaded courses.
    ///
    /// # Errors
    ///
    /// - `ProgramError::ProgramNotFound` if the catalog has no such program
    /// - `ProgramError::EmptyResolution` if none of its courses exist
    pub fn load_predefined_program(
        &mut self,
        params: &LoadProgram,
    ) -> Result<(&PredefinedProgram, usize)> {
        let loaded = self.program.load_predefined(&params.name, &self.catalog)?;
        let program = self
            .catalog
            .get_predefined_program(&params.name)
            .ok_or_else(|| ProgramError::ProgramNotFound {
                name: params.name.clone(),
            })?;
        info!("Loaded program '{}' with {loaded} courses", params.name);
        Ok((program, loaded))
    }

    /// Predefined programs of the catalog, ordered by ID.
    pub fn predefined_programs(&self) -> Vec<(&str, &PredefinedProgram)> {
        self.catalog
            .programs()
            .iter()
            .map(|(id, program)| (id.as_str(), program))
            .collect()
    }

    /// Totals of the current program.
    pub fn summary(&self) -> ProgramSummary {
        self.program.summarize()
    }

    /// Completeness report of the current program.
    pub fn validate(&self) -> ValidationReport {
        self.program.validate()
    }

    /// The current program as plain text.
    pub fn export_text(&self) -> String {
        self.program.export_text()
    }

    /// Writes the exported program to the sink.
    ///
    /// Returns false without touching the sink when the program is empty,
    /// and false when the sink fails.
    pub fn export_program(&self, sink: &mut dyn ClipboardSink) -> bool {
        if self.program.is_empty() {
            debug!("Nothing to export, the program is empty");
            return false;
        }

        match sink.write_text(&self.program.export_text()) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to export the program: {e}");
                false
            }
        }
    }
}
