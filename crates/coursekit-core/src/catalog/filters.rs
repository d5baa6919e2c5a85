//! Catalog filtering and keyword search.

use std::{collections::BTreeSet, sync::Arc};

use super::Catalog;
use crate::models::{Course, Difficulty};

/// Filter criteria for catalog listings. Unset fields match every course.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    /// Only courses of this difficulty
    pub difficulty: Option<Difficulty>,
    /// Only courses that list this tool (exact match)
    pub tool: Option<String>,
    /// Only courses no longer than this many minutes
    pub max_duration: Option<u32>,
}

impl CourseFilter {
    /// Returns true when no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.difficulty.is_none() && self.tool.is_none() && self.max_duration.is_none()
    }

    /// Returns true when the course satisfies every set criterion.
    pub fn matches(&self, course: &Course) -> bool {
        if let Some(difficulty) = self.difficulty {
            if course.difficulty != difficulty {
                return false;
            }
        }

        if let Some(tool) = &self.tool {
            if !course.has_tool(tool) {
                return false;
            }
        }

        if let Some(max_duration) = self.max_duration {
            if course.duration > max_duration {
                return false;
            }
        }

        true
    }
}

impl Catalog {
    /// Courses matching the filter, in catalog order.
    pub fn filter(&self, filter: &CourseFilter) -> Vec<Arc<Course>> {
        self.courses()
            .iter()
            .filter(|course| filter.matches(course))
            .cloned()
            .collect()
    }

    /// Courses that list the given tool.
    pub fn by_tool(&self, tool: &str) -> Vec<Arc<Course>> {
        self.filter(&CourseFilter {
            tool: Some(tool.to_string()),
            ..Default::default()
        })
    }

    /// Courses of the given difficulty.
    pub fn by_difficulty(&self, difficulty: Difficulty) -> Vec<Arc<Course>> {
        self.filter(&CourseFilter {
            difficulty: Some(difficulty),
            ..Default::default()
        })
    }

    /// Case-insensitive keyword search over title, description, topics and
    /// tools.
    pub fn search(&self, keyword: &str) -> Vec<Arc<Course>> {
        let needle = keyword.trim().to_lowercase();
        self.courses()
            .iter()
            .filter(|course| course.matches_keyword(&needle))
            .cloned()
            .collect()
    }

    /// Distinct tool names across the catalog, sorted.
    pub fn tools(&self) -> Vec<String> {
        self.courses()
            .iter()
            .flat_map(|course| course.tools.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
