//! Parameter structures for coursekit operations
//!
//! These structures are shared by every interface (the CLI today) and carry
//! no framework-specific derives. Interface layers define their own argument
//! types and convert into these with `From` implementations:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```
//!
//! ```ignore
//! #[derive(Args)]
//! pub struct AddCourseArgs {
//!     pub id: u64,
//! }
//!
//! impl From<AddCourseArgs> for Id {
//!     fn from(val: AddCourseArgs) -> Self {
//!         Id { id: val.id }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just a course ID.
///
/// Used for show, add, remove and the move operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the course to operate on
    pub id: u64,
}

/// Parameters for listing catalog courses.
///
/// All criteria are optional and combine with AND.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListCourses {
    /// Difficulty name (beginner, intermediate, advanced)
    pub difficulty: Option<String>,
    /// Exact tool name
    pub tool: Option<String>,
    /// Maximum course duration in minutes
    pub max_duration: Option<u32>,
    /// Case-insensitive keyword
    pub search: Option<String>,
}

/// Parameters for loading a predefined program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadProgram {
    /// Program ID as listed by the catalog (e.g. `basic`)
    pub name: String,
}

/// Parameters for clearing the program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearProgram {
    /// Whether the user confirmed the clear operation
    #[serde(default)]
    pub confirmed: bool,
}
