//! Course catalog: the read-only set of courses and predefined programs.
//!
//! The catalog owns every [`Course`] behind an [`Arc`] so the program builder
//! can hold shared references to catalog entries without copying them. It is
//! responsible for the integrity of the course graph (unique IDs, existing
//! prerequisites), which the builder relies on but never re-checks.
//!
//! ## Submodules
//!
//! - [`filters`]: Filtering and keyword search
//! - [`loader`]: Loading catalogs from JSON files with sample fallback
//! - [`sample`]: Built-in demonstration catalog

use std::{
    collections::{BTreeMap, HashSet},
    sync::Arc,
};

use crate::{
    error::{ProgramError, Result},
    models::{Course, PredefinedProgram},
};

pub mod filters;
pub mod loader;
pub mod sample;


pub use filters::CourseFilter;
pub use loader::{CatalogFile, CatalogSource};

/// The full set of available courses plus named predefined programs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    courses: Vec<Arc<Course>>,
    programs: BTreeMap<String, PredefinedProgram>,
}

impl Catalog {
    /// Creates a catalog after checking the integrity of the course graph.
    ///
    /// # Errors
    ///
    /// Returns `ProgramError::InvalidInput` when course IDs repeat, a course
    /// has a zero duration or an invalid price, or a prerequisite references
    /// a course that does not exist (or the course itself).
    pub fn new(courses: Vec<Course>, programs: BTreeMap<String, PredefinedProgram>) -> Result<Self> {
        let mut ids = HashSet::with_capacity(courses.len());
        for course in &courses {
            if !ids.insert(course.id) {
                return Err(ProgramError::invalid_input("courses")
                    .with_reason(format!("duplicate course ID {}", course.id)));
            }
            if course.duration == 0 {
                return Err(ProgramError::invalid_input("duration")
                    .with_reason(format!("course {} has a zero duration", course.id)));
            }
            if !course.price.is_finite() || course.price < 0.0 {
                return Err(ProgramError::invalid_input("price")
                    .with_reason(format!("course {} has an invalid price", course.id)));
            }
        }

        for course in &courses {
            if course.requires(course.id) {
                return Err(ProgramError::invalid_input("prerequisites")
                    .with_reason(format!("course {} lists itself as a prerequisite", course.id)));
            }
            if let Some(missing) = course.prerequisites.iter().find(|id| !ids.contains(*id)) {
                return Err(ProgramError::invalid_input("prerequisites").with_reason(format!(
                    "course {} requires unknown course {missing}",
                    course.id
                )));
            }
        }

        Ok(Self {
            courses: courses.into_iter().map(Arc::new).collect(),
            programs,
        })
    }

    /// Looks up a course by ID.
    pub fn get_by_id(&self, id: u64) -> Option<&Arc<Course>> {
        self.courses.iter().find(|course| course.id == id)
    }

    /// Looks up a predefined program by its ID (e.g. `basic`).
    pub fn get_predefined_program(&self, name: &str) -> Option<&PredefinedProgram> {
        self.programs.get(name)
    }

    /// All courses in catalog order.
    pub fn courses(&self) -> &[Arc<Course>] {
        &self.courses
    }

    /// All predefined programs keyed by program ID.
    pub fn programs(&self) -> &BTreeMap<String, PredefinedProgram> {
        &self.programs
    }

    /// Number of courses in the catalog.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Returns true when the catalog has no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
