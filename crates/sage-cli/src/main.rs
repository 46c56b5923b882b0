//! Sage CLI Application
//!
//! Command-line interface for the Sage study-planning tool.

mod args;
mod cli;
mod collab;
mod renderer;

use std::sync::Arc;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use collab::CommandGenerator;
use log::info;
use renderer::TerminalRenderer;
use sage_core::EngineBuilder;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        user,
        generator_cmd,
        command,
    } = Args::parse();

    let mut builder = EngineBuilder::new().with_database_path(database_file);
    if let Some(command_line) = generator_cmd {
        builder = builder.with_generator(Arc::new(CommandGenerator::new(command_line)));
    }
    let engine = builder.build().await.context("Failed to initialize engine")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Sage started");

    let cli = Cli::new(engine, renderer, user);
    match command {
        Commands::Generate(args) => cli.generate(args).await,
        Commands::Tasks(args) => cli.tasks(args).await,
        Commands::Plans => cli.plans().await,
        Commands::Date(args) => cli.date(args).await,
        Commands::Review => cli.review().await,
        Commands::Yesterday => cli.yesterday().await,
        Commands::Materials(args) => cli.materials(args).await,
        Commands::Complete(args) => cli.complete(args).await,
    }
}
