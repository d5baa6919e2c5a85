//! Command-line argument definitions using clap
//!
//! Each command has its own argument structure with clap derives and a
//! `From` conversion into the matching core parameter type, so core
//! parameters stay free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Session
//! ```

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use coursekit_core::{params::*, Difficulty};

/// List catalog courses
///
/// All filters are optional and combine: a course is listed only when it
/// matches every given filter. Courses already in the program are marked
/// with ✓.
#[derive(Args)]
pub struct ListCoursesArgs {
    /// Only list courses of this difficulty
    #[arg(short, long)]
    pub difficulty: Option<DifficultyArg>,
    /// Only list courses covering this tool (exact name)
    #[arg(short, long)]
    pub tool: Option<String>,
    /// Only list courses of at most this many minutes
    #[arg(short = 'm', long)]
    pub max_duration: Option<u32>,
    /// Case-insensitive keyword matched against title, description, topics
    /// and tools
    #[arg(short, long)]
    pub search: Option<String>,
}

impl From<ListCoursesArgs> for ListCourses {
    fn from(val: ListCoursesArgs) -> Self {
        ListCourses {
            difficulty: val.difficulty.map(|d| Difficulty::from(d).as_str().to_string()),
            tool: val.tool,
            max_duration: val.max_duration,
            search: val.search,
        }
    }
}

/// Show details of a catalog course
#[derive(Args)]
pub struct ShowCourseArgs {
    /// ID of the course to display
    #[arg(help = "Unique identifier of the course to show details for")]
    pub id: u64,
}

impl From<ShowCourseArgs> for Id {
    fn from(val: ShowCourseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Write the catalog as JSON
///
/// The output is a valid `--catalog-file`, so it can serve as the starting
/// point for a custom catalog.
#[derive(Args)]
pub struct ExportCatalogArgs {
    /// Write the catalog to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// List catalog courses
    #[command(aliases = ["l", "ls"])]
    List(ListCoursesArgs),
    /// Show details of a course
    #[command(alias = "s")]
    Show(ShowCourseArgs),
    /// List the tools covered by the catalog
    #[command(alias = "t")]
    Tools,
    /// Write the catalog as JSON
    Export(ExportCatalogArgs),
}

/// Add a course to the end of the program
///
/// Every prerequisite of the course must already be in the program.
#[derive(Args)]
pub struct AddCourseArgs {
    /// ID of the course to add
    #[arg(help = "Unique identifier of the catalog course to add")]
    pub id: u64,
}

impl From<AddCourseArgs> for Id {
    fn from(val: AddCourseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Remove a course from the program
///
/// A course cannot be removed while other courses of the program require it.
#[derive(Args)]
pub struct RemoveCourseArgs {
    /// ID of the course to remove
    #[arg(help = "Unique identifier of the course to remove")]
    pub id: u64,
}

impl From<RemoveCourseArgs> for Id {
    fn from(val: RemoveCourseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Move a course one position within the program
#[derive(Args)]
pub struct MoveCourseArgs {
    /// ID of the course to move
    #[arg(help = "Unique identifier of the course to move")]
    pub id: u64,
}

impl From<MoveCourseArgs> for Id {
    fn from(val: MoveCourseArgs) -> Self {
        Id { id: val.id }
    }
}

/// Remove every course from the program
#[derive(Args)]
pub struct ClearProgramArgs {
    /// Confirm clearing (required to prevent accidental loss)
    #[arg(long)]
    pub confirm: bool,
}

impl From<ClearProgramArgs> for ClearProgram {
    fn from(val: ClearProgramArgs) -> Self {
        ClearProgram {
            confirmed: val.confirm,
        }
    }
}

/// Replace the program with a predefined program
#[derive(Args)]
pub struct LoadProgramArgs {
    /// ID of the predefined program (see `program presets`)
    #[arg(help = "Identifier of the predefined program, e.g. basic")]
    pub name: String,
}

impl From<LoadProgramArgs> for LoadProgram {
    fn from(val: LoadProgramArgs) -> Self {
        LoadProgram { name: val.name }
    }
}

/// Export the program as plain text
#[derive(Args)]
pub struct ExportProgramArgs {
    /// Write the export to this file instead of standard output
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ProgramCommands {
    /// Show the program and its totals
    #[command(alias = "s")]
    Show,
    /// Add a course to the program
    #[command(alias = "a")]
    Add(AddCourseArgs),
    /// Remove a course from the program
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveCourseArgs),
    /// Move a course one position up
    Up(MoveCourseArgs),
    /// Move a course one position down
    Down(MoveCourseArgs),
    /// Remove every course from the program
    Clear(ClearProgramArgs),
    /// Replace the program with a predefined program
    #[command(alias = "l")]
    Load(LoadProgramArgs),
    /// List the predefined programs
    #[command(alias = "p")]
    Presets,
    /// Check the program for completeness
    #[command(alias = "v")]
    Validate,
    /// Show the program totals
    Summary,
    /// Export the program as plain text
    #[command(alias = "e")]
    Export(ExportProgramArgs),
}

/// Command-line representation of course difficulty levels
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum DifficultyArg {
    /// Entry-level courses
    Beginner,
    /// Courses building on the basics
    Intermediate,
    /// Courses for experienced users
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(val: DifficultyArg) -> Self {
        match val {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}
