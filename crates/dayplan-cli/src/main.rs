//! Dayplan CLI Application
//!
//! Command-line interface for importing generated nutrition and workout plans
//! and tracking their daily checklists.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use dayplan_core::{TrackerBuilder, Vocabulary};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        language,
        vocabulary,
        repeat_cycle,
        command,
    } = Args::parse();

    let vocabulary = match vocabulary {
        Some(path) => Vocabulary::from_json_file(&path)
            .with_context(|| format!("Failed to load vocabulary from {}", path.display()))?,
        None => Vocabulary::for_language(language.into()),
    };

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_vocabulary(vocabulary)
        .with_repeat_cycle(repeat_cycle)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let cli = Cli::new(tracker, TerminalRenderer::new(!no_color));

    info!("Dayplan started");

    match command {
        Document { command } => cli.handle_document_command(command).await,
        Plan { command } => cli.handle_plan_command(command).await,
        Todo { command } => cli.handle_todo_command(command).await,
    }
}
