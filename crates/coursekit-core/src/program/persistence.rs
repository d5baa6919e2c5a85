//! Program snapshots for persistent storage.

use std::{collections::HashSet, sync::Arc};

use jiff::Timestamp;
use serde_json::Value;

use super::ProgramBuilder;
use crate::{
    error::{ProgramError, Result},
    models::{Course, ProgramSnapshot},
};

impl ProgramBuilder {
    /// Takes a snapshot of the current program.
    ///
    /// Totals are computed now and stored alongside the members.
    pub fn serialize(&self) -> ProgramSnapshot {
        let summary = self.summarize();
        ProgramSnapshot {
            courses: self.selected.iter().map(|course| (**course).clone()).collect(),
            created_at: Some(Timestamp::now()),
            total_duration: summary.total_duration,
            total_price: summary.total_price,
        }
    }

    /// Replaces the program with the contents of a persisted snapshot.
    ///
    /// Only the course list is required; a missing or unreadable timestamp
    /// or total is ignored. Every restored course is announced as selected.
    ///
    /// # Errors
    ///
    /// `ProgramError::MalformedSnapshot` when the blob has no non-empty
    /// `courses` array, an entry is not a course, or course IDs repeat. The
    /// program is unchanged on error.
    pub fn restore(&mut self, blob: &Value) -> Result<ProgramSnapshot> {
        let entries = blob
            .get("courses")
            .and_then(Value::as_array)
            .ok_or_else(|| ProgramError::malformed_snapshot("no course list"))?;
        if entries.is_empty() {
            return Err(ProgramError::malformed_snapshot("course list is empty"));
        }

        let courses: Vec<Course> = entries
            .iter()
            .map(|entry| serde_json::from_value(entry.clone()))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| ProgramError::malformed_snapshot(format!("invalid course entry: {e}")))?;

        let mut seen = HashSet::with_capacity(courses.len());
        if let Some(duplicate) = courses.iter().find(|course| !seen.insert(course.id)) {
            return Err(ProgramError::malformed_snapshot(format!(
                "course {} appears more than once",
                duplicate.id
            )));
        }

        let snapshot = ProgramSnapshot {
            created_at: blob
                .get("createdAt")
                .and_then(|value| serde_json::from_value(value.clone()).ok()),
            total_duration: blob
                .get("totalDuration")
                .and_then(Value::as_u64)
                .and_then(|total| u32::try_from(total).ok())
                .unwrap_or_default(),
            total_price: blob
                .get("totalPrice")
                .and_then(Value::as_f64)
                .unwrap_or_default(),
            courses,
        };

        self.replace(snapshot.courses.iter().cloned().map(Arc::new).collect());
        Ok(snapshot)
    }
}
