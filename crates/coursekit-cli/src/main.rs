//! Coursekit CLI Application
//!
//! Command-line interface for building training programs from a course
//! catalog.

mod args;
mod cli;
mod handler;
mod listener;
mod renderer;

use std::process::ExitCode;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use coursekit_core::{display::Notification, CatalogSource, SessionBuilder};
use handler::Handler;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    env_logger::init();

    let Args {
        database_file,
        catalog_file,
        no_color,
        command,
    } = Args::parse();

    let mut session = SessionBuilder::new()
        .with_database_path(database_file)
        .with_catalog_path(catalog_file)
        .build()
        .await
        .context("Failed to initialize session")?;

    let renderer = TerminalRenderer::new(!no_color);

    if let CatalogSource::Fallback { path, reason } = session.catalog_source() {
        renderer.notify(&Notification::warning(format!(
            "Using the sample catalog, {} could not be loaded: {reason}",
            path.display()
        )))?;
    }

    session.restore_saved_program().await;
    info!("Coursekit started");

    let mut handler = Handler::new(session, renderer);

    let outcome = match command {
        Some(Course { command }) => handler.handle_course_command(command),
        Some(Program {
            command: Some(command),
        }) => handler.handle_program_command(command),
        Some(Program { command: None }) | None => handler.show_program(),
    };

    handler.persist().await?;

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            handler.report(error)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
