//! Error types for the coursekit library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// A present program member that blocks the removal of one of its
/// prerequisites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependent {
    /// ID of the dependent course
    pub id: u64,
    /// Title of the dependent course
    pub title: String,
}

impl fmt::Display for Dependent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" (ID: {})", self.title, self.id)
    }
}

/// Comprehensive error type for catalog, program and storage operations.
#[derive(Error, Debug)]
pub enum ProgramError {
    /// The course is already part of the program
    #[error("Course \"{title}\" (ID: {id}) is already in the program")]
    DuplicateMember { id: u64, title: String },
    /// One or more direct prerequisites are not in the program yet
    #[error(
        "Course \"{title}\" (ID: {id}) requires courses {} to be added first",
        join_ids(.missing)
    )]
    UnmetPrerequisite {
        id: u64,
        title: String,
        missing: Vec<u64>,
    },
    /// Other program members list this course as a prerequisite
    #[error(
        "Course with ID {id} cannot be removed, it is required by: {}",
        join_dependents(.dependents)
    )]
    BlockedByDependents { id: u64, dependents: Vec<Dependent> },
    /// None of the courses of a predefined program exist in the catalog
    #[error("No courses of program '{program}' were found in the catalog")]
    EmptyResolution { program: String },
    /// A persisted program snapshot could not be used
    #[error("Malformed program snapshot: {reason}")]
    MalformedSnapshot { reason: String },
    /// Course not found in the catalog
    #[error("Course with ID {id} not found")]
    CourseNotFound { id: u64 },
    /// Predefined program not found in the catalog
    #[error("Program '{name}' not found")]
    ProgramNotFound { name: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_dependents(dependents: &[Dependent]) -> String {
    dependents
        .iter()
        .map(Dependent::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ProgramError {
        ProgramError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ProgramError {
        ProgramError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ProgramError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a malformed snapshot error with the given reason.
    pub fn malformed_snapshot(reason: impl Into<String>) -> Self {
        Self::MalformedSnapshot {
            reason: reason.into(),
        }
    }

    /// Returns true for the local, recoverable program-builder conditions.
    ///
    /// These leave the builder untouched and are meant to be reported to the
    /// user rather than treated as failures of the application itself.
    pub fn is_program_rule(&self) -> bool {
        matches!(
            self,
            Self::DuplicateMember { .. }
                | Self::UnmetPrerequisite { .. }
                | Self::BlockedByDependents { .. }
                | Self::EmptyResolution { .. }
                | Self::MalformedSnapshot { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ProgramError::database(message).with_source(e))
    }
}

/// Result type alias for coursekit operations
pub type Result<T> = std::result::Result<T, ProgramError>;
