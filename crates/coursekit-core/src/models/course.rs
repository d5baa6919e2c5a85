//! Course model definition and related functionality.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Difficulty;

/// A single training item of the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Unique identifier of the course within the catalog
    pub id: u64,

    /// Title of the course
    pub title: String,

    /// Free-form description; empty when the course has none
    #[serde(default)]
    pub description: String,

    /// Grouping label used by the catalog (basic, intermediate, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Length of the course in minutes
    pub duration: u32,

    /// Tools covered by the course, in display order
    #[serde(default)]
    pub tools: Vec<String>,

    /// Topics covered by the course, in display order
    #[serde(default)]
    pub topics: Vec<String>,

    /// Hands-on assignments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub practical_tasks: Vec<String>,

    /// IDs of courses that must already be in a program before this one
    #[serde(default)]
    pub prerequisites: BTreeSet<u64>,

    /// Difficulty level
    pub difficulty: Difficulty,

    /// Price of the course, zero for free courses
    #[serde(default)]
    pub price: f64,
}

impl Course {
    /// Returns true when the course lists `id` as a direct prerequisite.
    pub fn requires(&self, id: u64) -> bool {
        self.prerequisites.contains(&id)
    }

    /// Returns true when `tool` is one of the course tools (exact match).
    pub fn has_tool(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }

    /// Returns the description, or `None` when it is empty.
    pub fn description(&self) -> Option<&str> {
        let trimmed = self.description.trim();
        (!trimmed.is_empty()).then_some(self.description.as_str())
    }

    /// Case-insensitive keyword match over title, description, topics and
    /// tools. `needle` must already be lowercase.
    pub(crate) fn matches_keyword(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .topics
                .iter()
                .any(|topic| topic.to_lowercase().contains(needle))
            || self
                .tools
                .iter()
                .any(|tool| tool.to_lowercase().contains(needle))
    }
}
