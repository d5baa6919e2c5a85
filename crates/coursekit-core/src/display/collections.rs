//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of courses and
//! programs with consistent structure and empty collection handling.

use std::{collections::BTreeSet, fmt, ops::Index, sync::Arc};

use super::format::{format_duration, format_price};
use crate::models::{Course, PredefinedProgram, ProgramSummary};

/// Catalog listing with optional selection markers.
///
/// # Examples
///
/// ```rust
/// use coursekit_core::{display::Courses, Catalog};
///
/// let catalog = Catalog::sample();
/// let listing = Courses::new(catalog.courses().to_vec()).with_selected([1]);
/// let output = listing.to_string();
/// assert!(output.contains("✓"));
/// ```
pub struct Courses {
    courses: Vec<Arc<Course>>,
    selected: BTreeSet<u64>,
}

impl Courses {
    /// Wrap a list of courses without selection markers.
    pub fn new(courses: Vec<Arc<Course>>) -> Self {
        Self {
            courses,
            selected: BTreeSet::new(),
        }
    }

    /// Mark the given course IDs as selected.
    pub fn with_selected(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.selected = ids.into_iter().collect();
        self
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Get the number of courses in the collection.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Get an iterator over the courses.
    pub fn iter(&self) -> std::slice::Iter<'_, Arc<Course>> {
        self.courses.iter()
    }
}

impl Index<usize> for Courses {
    type Output = Course;

    fn index(&self, index: usize) -> &Self::Output {
        &self.courses[index]
    }
}

impl fmt::Display for Courses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.courses.is_empty() {
            return writeln!(f, "No courses found. Try changing the filters.");
        }

        for course in &self.courses {
            let marker = if self.selected.contains(&course.id) {
                "✓"
            } else {
                "○"
            };
            writeln!(f, "## {marker} {} (ID: {})", course.title, course.id)?;
            writeln!(f)?;
            writeln!(
                f,
                "- {} · {} · {}",
                format_duration(course.duration),
                course.difficulty.label(),
                format_price(course.price)
            )?;
            if !course.tools.is_empty() {
                writeln!(f, "- **Tools**: {}", course.tools.join(", "))?;
            }
            if !course.prerequisites.is_empty() {
                let ids: Vec<String> = course.prerequisites.iter().map(u64::to_string).collect();
                writeln!(f, "- **Requires**: {}", ids.join(", "))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// The ordered members of a program followed by its totals.
pub struct ProgramListing<'a>(pub &'a [Arc<Course>]);

impl fmt::Display for ProgramListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Program")?;
        writeln!(f)?;

        if self.0.is_empty() {
            writeln!(f, "Add courses to build a program.")?;
            return Ok(());
        }

        for (index, course) in self.0.iter().enumerate() {
            writeln!(
                f,
                "{}. **{}** (ID: {}) · {} · {} · {}",
                index + 1,
                course.title,
                course.id,
                format_duration(course.duration),
                course.tools.join(", "),
                course.difficulty.label()
            )?;
        }

        writeln!(f, "\n## Summary")?;
        writeln!(f)?;
        write!(f, "{}", ProgramSummary::from_courses(self.0.iter().map(|course| &**course)))
    }
}

/// Listing of the predefined programs of a catalog, keyed by program ID.
pub struct Programs<'a>(pub Vec<(&'a str, &'a PredefinedProgram)>);

impl fmt::Display for Programs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No predefined programs available.");
        }

        for (id, program) in &self.0 {
            writeln!(f, "- **{id}**: {program}")?;
        }
        Ok(())
    }
}
