//! Difficulty levels of catalog courses.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of course difficulty levels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Entry-level course without assumed background
    Beginner,

    /// Course building on the basics
    Intermediate,

    /// Course for experienced users
    Advanced,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    /// All difficulty levels from easiest to hardest.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    /// Machine-readable name, as used in catalog files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }

    /// Human-readable label for listings and exports.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use coursekit_core::models::Difficulty;
    ///
    /// assert_eq!(Difficulty::Beginner.label(), "Beginner");
    /// assert_eq!(Difficulty::Advanced.label(), "Advanced");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}
