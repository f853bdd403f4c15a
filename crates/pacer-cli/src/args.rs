use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CompileArgs, HistoryCommands, PlayArgs, RecordsArgs};

/// Terminal workout player and training journal
///
/// Pacer compiles a declarative workout session (JSON) into a timed queue of
/// work and rest steps, plays it back with a countdown, and records finished
/// workouts and personal records in a local SQLite journal. It can also run
/// as an MCP (Model Context Protocol) server for AI assistant integration.
#[derive(Parser)]
#[command(version, about, name = "pacer")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/pacer/pacer.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Pacer CLI
///
/// - `compile`: Show the step queue a session file expands into
/// - `play`: Run a session interactively and record it when finished
/// - `history`: Browse completed workouts
/// - `records`: Show personal records
/// - `serve`: Start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Compile a session file and print its step queue
    #[command(alias = "c")]
    Compile(CompileArgs),
    /// Play a session file
    #[command(alias = "p")]
    Play(PlayArgs),
    /// Browse completed workouts
    #[command(alias = "h")]
    History {
        #[command(subcommand)]
        command: Option<HistoryCommands>,
    },
    /// Show personal records
    #[command(alias = "r")]
    Records(RecordsArgs),
    /// Start the MCP server
    Serve,
}
