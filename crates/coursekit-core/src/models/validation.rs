//! Program validation report types.

use serde::{Deserialize, Serialize};

/// Minimum recommended program length in minutes.
pub const MIN_RECOMMENDED_DURATION: u32 = 60;

/// Maximum recommended program length in minutes.
pub const MAX_RECOMMENDED_DURATION: u32 = 480;

/// Conditions that make a program unusable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// The program has no lessons
    Empty,
}

/// Non-fatal observations about a program.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ValidationWarning {
    /// Advanced courses are present but no beginner course is
    AdvancedWithoutBeginner,
    /// Total duration is below [`MIN_RECOMMENDED_DURATION`]
    TooShort { total_duration: u32 },
    /// Total duration is above [`MAX_RECOMMENDED_DURATION`]
    TooLong { total_duration: u32 },
}

/// Result of validating a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// False when `errors` is non-empty
    pub is_valid: bool,
    /// Advisory findings that do not affect validity
    pub warnings: Vec<ValidationWarning>,
    /// Blocking findings
    pub errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Build a report, deriving `is_valid` from the errors.
    pub fn new(warnings: Vec<ValidationWarning>, errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            warnings,
            errors,
        }
    }
}
