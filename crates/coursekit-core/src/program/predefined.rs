//! Loading predefined programs from the catalog.

use std::{collections::HashSet, sync::Arc};

use log::debug;

use super::ProgramBuilder;
use crate::{
    catalog::Catalog,
    error::{ProgramError, Result},
    models::Course,
};

impl ProgramBuilder {
    /// Replaces the program with a predefined program of the catalog.
    ///
    /// Course IDs the catalog cannot resolve are skipped, as are repeated IDs.
    /// Prerequisites are not checked: predefined programs are trusted.
    /// Returns the number of loaded courses.
    ///
    /// # Errors
    ///
    /// - `ProgramError::ProgramNotFound` when the catalog has no such program
    /// - `ProgramError::EmptyResolution` when none of its courses resolve; the
    ///   current program is kept in that case
    pub fn load_predefined(&mut self, program_id: &str, catalog: &Catalog) -> Result<usize> {
        let program = catalog
            .get_predefined_program(program_id)
            .ok_or_else(|| ProgramError::ProgramNotFound {
                name: program_id.to_string(),
            })?;

        let mut seen = HashSet::with_capacity(program.courses.len());
        let resolved: Vec<Arc<Course>> = program
            .courses
            .iter()
            .filter(|id| seen.insert(**id))
            .filter_map(|id| {
                let course = catalog.get_by_id(*id);
                if course.is_none() {
                    debug!("Program '{program_id}' references unknown course {id}, skipping");
                }
                course.cloned()
            })
            .collect();

        if resolved.is_empty() {
            return Err(ProgramError::EmptyResolution {
                program: program_id.to_string(),
            });
        }

        let loaded = resolved.len();
        debug!("Loading program '{program_id}' with {loaded} courses");
        self.replace(resolved);
        Ok(loaded)
    }
}
