use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CourseCommands, ProgramCommands};

/// Build training programs from a course catalog
///
/// Coursekit keeps an ordered training program assembled from catalog
/// courses. Courses can only be added once their prerequisites are in the
/// program, and cannot be removed while other courses depend on them. The
/// program is saved after every change and restored on the next run.
#[derive(Parser)]
#[command(version, about, name = "coursekit")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/coursekit/coursekit.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON course catalog. Defaults to
    /// $XDG_DATA_HOME/coursekit/courses.json, or the built-in sample catalog
    #[arg(long, global = true)]
    pub catalog_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the coursekit CLI
///
/// - `course`: Browse the catalog
/// - `program`: Build, check and export the training program
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the course catalog
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Build and inspect the training program (shows it by default)
    #[command(alias = "p")]
    Program {
        #[command(subcommand)]
        command: Option<ProgramCommands>,
    },
}
