//! Command handlers for the CLI.
//!
//! [`Handler`] owns the session for the lifetime of one invocation. Each
//! handler converts its arguments into core parameters, calls the session
//! and renders the outcome as markdown. After a command, [`Handler::persist`]
//! saves the program when it changed.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};
use coursekit_core::{
    display::{Courses, Notification, ProgramListing, Programs},
    export::WriterSink,
    operations::notification_for_error,
    params::{ClearProgram, Id, ListCourses, LoadProgram},
    ProgramError, Session,
};
use log::debug;

use crate::{
    cli::{CourseCommands, ExportCatalogArgs, ExportProgramArgs, ProgramCommands},
    listener::ChangeTracker,
    renderer::TerminalRenderer,
};

pub struct Handler {
    session: Session,
    renderer: TerminalRenderer,
    changes: ChangeTracker,
}

impl Handler {
    /// Wraps a session whose saved program was already restored.
    pub fn new(mut session: Session, renderer: TerminalRenderer) -> Self {
        let changes = ChangeTracker::new();
        session.subscribe(changes.clone());
        Self {
            session,
            renderer,
            changes,
        }
    }

    pub fn handle_course_command(&self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::List(args) => self.list_courses(&args.into()),
            CourseCommands::Show(args) => self.show_course(&args.into()),
            CourseCommands::Tools => self.list_tools(),
            CourseCommands::Export(args) => self.export_catalog(args),
        }
    }

    pub fn handle_program_command(&mut self, command: ProgramCommands) -> Result<()> {
        match command {
            ProgramCommands::Show => self.show_program(),
            ProgramCommands::Add(args) => self.add_course(&args.into()),
            ProgramCommands::Remove(args) => self.remove_course(&args.into()),
            ProgramCommands::Up(args) => self.move_course(&args.into(), true),
            ProgramCommands::Down(args) => self.move_course(&args.into(), false),
            ProgramCommands::Clear(args) => self.clear_program(&args.into()),
            ProgramCommands::Load(args) => self.load_program(&args.into()),
            ProgramCommands::Presets => self.list_presets(),
            ProgramCommands::Validate => self.validate_program(),
            ProgramCommands::Summary => self.show_summary(),
            ProgramCommands::Export(args) => self.export_program(args),
        }
    }

    fn list_courses(&self, params: &ListCourses) -> Result<()> {
        let courses = self.session.list_courses(params)?;
        let listing = Courses::new(courses).with_selected(self.session.program().course_ids());
        self.renderer.render(&listing.to_string())
    }

    fn show_course(&self, params: &Id) -> Result<()> {
        let course = self.session.get_course(params)?;
        self.renderer.render(&course.to_string())?;
        if self.session.program().contains(course.id) {
            self.renderer
                .notify(&Notification::info("This course is in your program"))?;
        }
        Ok(())
    }

    fn list_tools(&self) -> Result<()> {
        let tools = self.session.catalog().tools();
        let mut output = String::from("# Tools\n\n");
        for tool in &tools {
            output.push_str(&format!("- {tool}\n"));
        }
        self.renderer.render(&output)
    }

    fn export_catalog(&self, args: ExportCatalogArgs) -> Result<()> {
        let json = self.session.catalog().to_json_string()?;
        match args.output {
            Some(path) => {
                fs::write(&path, format!("{json}\n"))
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                self.renderer.notify(&Notification::success(format!(
                    "Catalog exported to {}",
                    path.display()
                )))
            }
            None => {
                writeln!(io::stdout().lock(), "{json}").context("Failed to write the catalog")?;
                Ok(())
            }
        }
    }

    pub fn show_program(&self) -> Result<()> {
        let listing = ProgramListing(self.session.program().courses());
        self.renderer.render(&listing.to_string())
    }

    fn add_course(&mut self, params: &Id) -> Result<()> {
        let course = self.session.add_course_by_id(params)?;
        self.renderer.notify(&Notification::success(format!(
            "Added \"{}\" to the program",
            course.title
        )))?;
        self.show_program()
    }

    fn remove_course(&mut self, params: &Id) -> Result<()> {
        match self.session.remove_course(params)? {
            Some(course) => {
                self.renderer.notify(&Notification::success(format!(
                    "Removed \"{}\" from the program",
                    course.title
                )))?;
                self.show_program()
            }
            None => self.renderer.notify(&Notification::info(format!(
                "Course with ID {} is not in the program",
                params.id
            ))),
        }
    }

    fn move_course(&mut self, params: &Id, up: bool) -> Result<()> {
        let moved = if up {
            self.session.move_course_up(params)
        } else {
            self.session.move_course_down(params)
        };

        if moved {
            self.show_program()
        } else {
            let direction = if up { "up" } else { "down" };
            self.renderer.notify(&Notification::info(format!(
                "Course with ID {} cannot be moved {direction}",
                params.id
            )))
        }
    }

    fn clear_program(&mut self, params: &ClearProgram) -> Result<()> {
        let removed = self.session.clear_program(params)?;
        self.renderer.notify(&Notification::success(format!(
            "Removed {removed} courses from the program"
        )))
    }

    fn load_program(&mut self, params: &LoadProgram) -> Result<()> {
        let (program, loaded) = self.session.load_predefined_program(params)?;
        let message = format!("Loaded \"{}\" with {loaded} courses", program.name);
        self.renderer.notify(&Notification::success(message))?;
        self.show_program()
    }

    fn list_presets(&self) -> Result<()> {
        let programs = Programs(self.session.predefined_programs());
        self.renderer
            .render(&format!("# Predefined programs\n\n{programs}"))
    }

    fn validate_program(&self) -> Result<()> {
        self.renderer.render(&self.session.validate().to_string())
    }

    fn show_summary(&self) -> Result<()> {
        let summary = self.session.summary();
        self.renderer.render(&format!("# Summary\n\n{summary}"))
    }

    fn export_program(&self, args: ExportProgramArgs) -> Result<()> {
        if self.session.program().is_empty() {
            return self
                .renderer
                .notify(&Notification::warning("Nothing to export, the program is empty"));
        }

        match args.output {
            Some(path) => {
                let file = File::create(&path)
                    .with_context(|| format!("Failed to create {}", path.display()))?;
                self.export_to(&mut WriterSink(file), Some(&path))
            }
            None => self.export_to(&mut WriterSink(io::stdout().lock()), None),
        }
    }

    fn export_to<W: io::Write>(&self, sink: &mut WriterSink<W>, path: Option<&Path>) -> Result<()> {
        if !self.session.export_program(sink) {
            anyhow::bail!("Failed to export the program");
        }
        match path {
            Some(path) => self.renderer.notify(&Notification::success(format!(
                "Program exported to {}",
                path.display()
            ))),
            None => Ok(()),
        }
    }

    /// Saves the program if the command changed it. An emptied program
    /// discards the saved snapshot instead.
    pub async fn persist(&self) -> Result<()> {
        if !self.changes.is_mutated() {
            debug!("Program unchanged, nothing to save");
            return Ok(());
        }

        if self.session.program().is_empty() {
            self.session.discard_saved_program().await;
            return Ok(());
        }

        if !self.session.save_program().await {
            self.renderer
                .notify(&Notification::warning("The program could not be saved"))?;
        }
        Ok(())
    }

    /// Reports a failed command. Program errors become notifications, other
    /// errors are returned.
    pub fn report(&self, error: anyhow::Error) -> Result<()> {
        match error.downcast_ref::<ProgramError>() {
            Some(program_error) => self.renderer.notify(&notification_for_error(program_error)),
            None => Err(error),
        }
    }
}
