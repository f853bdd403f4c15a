//! Pacer CLI Application
//!
//! Command-line interface for compiling, playing and journaling workout
//! sessions.

mod args;
mod cli;
mod mcp;
mod play;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, PacerMcpServer};
use pacer_core::JournalBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let journal = JournalBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize journal")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Pacer started");

    match command {
        Some(Compile(args)) => Cli::new(journal, renderer).compile(args).await,
        Some(Play(args)) => Cli::new(journal, renderer).play(args).await,
        Some(History { command }) => {
            Cli::new(journal, renderer)
                .handle_history_command(command)
                .await
        }
        Some(Records(args)) => Cli::new(journal, renderer).records(args).await,
        Some(Serve) => {
            info!("Starting Pacer MCP server");
            run_stdio_server(PacerMcpServer::new(journal))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(journal, renderer).handle_history_command(None).await,
    }
}
