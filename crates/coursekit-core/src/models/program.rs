//! Predefined program definitions shipped with a catalog.

use serde::{Deserialize, Serialize};

/// A named, ordered list of course IDs that can be loaded into the builder
/// in one step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PredefinedProgram {
    /// Display name of the program
    pub name: String,

    /// Course IDs in program order
    pub courses: Vec<u64>,

    /// Advertised duration in minutes
    #[serde(default)]
    pub duration: u32,
}
