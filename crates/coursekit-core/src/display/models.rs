//! Display implementations for domain models.
//!
//! The implementations produce markdown for the terminal renderer:
//! - courses show their metadata as a bullet list followed by topics and tasks
//! - summaries and validation reports render as short sections

use std::fmt;

use super::{
    datetime::LocalDateTime,
    format::{format_duration, format_price},
};
use crate::models::{
    Course, Difficulty, PredefinedProgram, ProgramSnapshot, ProgramSummary, ValidationError,
    ValidationReport, ValidationWarning,
};

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        writeln!(f, "- Duration: {}", format_duration(self.duration))?;
        writeln!(f, "- Level: {}", self.difficulty.label())?;
        if !self.tools.is_empty() {
            writeln!(f, "- Tools: {}", self.tools.join(", "))?;
        }
        if let Some(category) = &self.category {
            writeln!(f, "- Category: {category}")?;
        }
        writeln!(f, "- Price: {}", format_price(self.price))?;
        if !self.prerequisites.is_empty() {
            let ids: Vec<String> = self.prerequisites.iter().map(u64::to_string).collect();
            writeln!(f, "- Requires: {}", ids.join(", "))?;
        }

        if let Some(desc) = self.description() {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        if !self.topics.is_empty() {
            writeln!(f, "\n## Topics")?;
            writeln!(f)?;
            for topic in &self.topics {
                writeln!(f, "- {topic}")?;
            }
        }

        if !self.practical_tasks.is_empty() {
            writeln!(f, "\n## Practical tasks")?;
            writeln!(f)?;
            for task in &self.practical_tasks {
                writeln!(f, "- {task}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for ProgramSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- **Duration**: {}", format_duration(self.total_duration))?;
        writeln!(f, "- **Lessons**: {}", self.total_lessons)?;
        writeln!(f, "- **Price**: {}", format_price(self.total_price))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Empty => write!(f, "Program has no lessons"),
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::AdvancedWithoutBeginner => {
                write!(f, "Consider adding beginner lessons before advanced ones")
            }
            ValidationWarning::TooShort { .. } => {
                write!(f, "Program is too short (under 1 hour)")
            }
            ValidationWarning::TooLong { .. } => write!(
                f,
                "Program is very long (over 8 hours), consider splitting it into several sessions"
            ),
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid {
            writeln!(f, "Program is valid.")?;
        } else {
            writeln!(f, "Program is not valid.")?;
        }

        if !self.errors.is_empty() {
            writeln!(f, "\n## Errors")?;
            writeln!(f)?;
            for error in &self.errors {
                writeln!(f, "- {error}")?;
            }
        }

        if !self.warnings.is_empty() {
            writeln!(f, "\n## Warnings")?;
            writeln!(f)?;
            for warning in &self.warnings {
                writeln!(f, "- {warning}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PredefinedProgram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.courses.iter().map(u64::to_string).collect();
        write!(
            f,
            "{} ({}, courses: {})",
            self.name,
            format_duration(self.duration),
            ids.join(", ")
        )
    }
}

impl fmt::Display for ProgramSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} lessons, {}",
            self.courses.len(),
            format_duration(self.total_duration)
        )?;
        if let Some(created_at) = &self.created_at {
            write!(f, ", saved {}", LocalDateTime(created_at))?;
        }
        Ok(())
    }
}
