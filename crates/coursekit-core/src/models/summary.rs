//! Derived program totals.

use serde::{Deserialize, Serialize};

use super::Course;

/// Totals computed over the members of a program.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgramSummary {
    /// Sum of course durations in minutes, saturating at `u32::MAX`
    pub total_duration: u32,
    /// Number of courses
    pub total_lessons: usize,
    /// Sum of course prices
    pub total_price: f64,
}

impl ProgramSummary {
    /// Fold the totals over a sequence of courses.
    pub fn from_courses<'a, I>(courses: I) -> Self
    where
        I: IntoIterator<Item = &'a Course>,
    {
        courses
            .into_iter()
            .fold(Self::default(), |mut summary, course| {
                summary.total_duration = summary.total_duration.saturating_add(course.duration);
                summary.total_lessons += 1;
                summary.total_price += course.price;
                summary
            })
    }
}
