//! Derived views of a program: totals, validation and text export.

use super::ProgramBuilder;
use crate::{
    export::format_program_text,
    models::{
        validation::{MAX_RECOMMENDED_DURATION, MIN_RECOMMENDED_DURATION},
        Difficulty, ProgramSummary, ValidationError, ValidationReport, ValidationWarning,
    },
};

impl ProgramBuilder {
    /// Computes duration, lesson and price totals over the current members.
    pub fn summarize(&self) -> ProgramSummary {
        ProgramSummary::from_courses(self.selected.iter().map(|course| &**course))
    }

    /// Checks the program for completeness.
    ///
    /// An empty program is invalid. Otherwise the report only carries
    /// warnings: advanced courses without any beginner course, and total
    /// durations outside the recommended range.
    pub fn validate(&self) -> ValidationReport {
        if self.selected.is_empty() {
            return ValidationReport::new(Vec::new(), vec![ValidationError::Empty]);
        }

        let mut warnings = Vec::new();

        let has_difficulty =
            |level: Difficulty| self.selected.iter().any(|course| course.difficulty == level);
        if has_difficulty(Difficulty::Advanced) && !has_difficulty(Difficulty::Beginner) {
            warnings.push(ValidationWarning::AdvancedWithoutBeginner);
        }

        let total_duration = self.summarize().total_duration;
        if total_duration < MIN_RECOMMENDED_DURATION {
            warnings.push(ValidationWarning::TooShort { total_duration });
        } else if total_duration > MAX_RECOMMENDED_DURATION {
            warnings.push(ValidationWarning::TooLong { total_duration });
        }

        ValidationReport::new(warnings, Vec::new())
    }

    /// Renders the program as plain text for sharing.
    ///
    /// An empty program renders as [`crate::export::EMPTY_PROGRAM_TEXT`].
    pub fn export_text(&self) -> String {
        format_program_text(&self.selected)
    }
}
