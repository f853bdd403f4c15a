//! Command argument wrappers and their handlers
//!
//! Each clap `Args` struct converts into a core parameter type from
//! `pacer_core::params`, so the CLI and the MCP server feed the journal the
//! same values:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Journal / Player
//! ```

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use pacer_core::{
    display::{OperationStatus, Queue},
    params::{Id, ListHistory, ShowRecord},
    queue, Journal, PacerError, WorkoutSession,
};

use crate::{
    play::{self, PlaybackOptions},
    renderer::TerminalRenderer,
};

/// Compile a session file
#[derive(Args)]
pub struct CompileArgs {
    /// Path to a workout session JSON file
    pub file: PathBuf,
    /// Print the compiled queue as JSON instead of markdown
    #[arg(long)]
    pub json: bool,
}

/// Play a session file
///
/// While playing, type a command and press enter: an empty line or `n`
/// completes the current step, `s` skips it, `p` pauses or resumes, `f`
/// finishes and records the session now, `q` aborts without recording.
#[derive(Args)]
pub struct PlayArgs {
    /// Path to a workout session JSON file
    pub file: PathBuf,
    /// Length of one session second in milliseconds
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: u64,
    /// Complete rep-based steps automatically on the next tick
    #[arg(long)]
    pub auto_reps: bool,
}

impl From<&PlayArgs> for PlaybackOptions {
    fn from(val: &PlayArgs) -> Self {
        PlaybackOptions {
            tick: Duration::from_millis(val.tick_ms),
            auto_reps: val.auto_reps,
        }
    }
}

/// List completed workouts
#[derive(Args, Default)]
pub struct ListHistoryArgs {
    /// Show at most this many workouts
    #[arg(short, long)]
    pub limit: Option<u32>,
}

impl From<ListHistoryArgs> for ListHistory {
    fn from(val: ListHistoryArgs) -> Self {
        ListHistory { limit: val.limit }
    }
}

/// Show one completed workout
#[derive(Args)]
pub struct ShowWorkoutArgs {
    /// ID of the workout
    pub id: u64,
}

impl From<ShowWorkoutArgs> for Id {
    fn from(val: ShowWorkoutArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List completed workouts, newest first
    #[command(aliases = ["l", "ls"])]
    List(ListHistoryArgs),
    /// Show one completed workout
    #[command(alias = "s")]
    Show(ShowWorkoutArgs),
}

/// Show personal records
#[derive(Args)]
pub struct RecordsArgs {
    /// Only show the record of this exercise (case-insensitive)
    pub exercise: Option<String>,
}

impl From<RecordsArgs> for Option<ShowRecord> {
    fn from(val: RecordsArgs) -> Self {
        val.exercise.map(|exercise| ShowRecord { exercise })
    }
}

/// Command handlers sharing one journal and renderer.
pub struct Cli {
    journal: Journal,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(journal: Journal, renderer: TerminalRenderer) -> Self {
        Self { journal, renderer }
    }

    pub async fn compile(&self, args: CompileArgs) -> Result<()> {
        debug!("compile: {}", args.file.display());

        let session = load_session(&args.file)?;
        let steps = queue::compile(&session);

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&steps).context("Failed to serialize queue")?
            );
            return Ok(());
        }

        self.renderer
            .render(&format!("{session}\n## Queue\n\n{}", Queue(steps)))
    }

    pub async fn play(&self, args: PlayArgs) -> Result<()> {
        let session = load_session(&args.file)?;
        play::run(session, &self.journal, &self.renderer, PlaybackOptions::from(&args)).await
    }

    pub async fn handle_history_command(&self, command: Option<HistoryCommands>) -> Result<()> {
        match command.unwrap_or(HistoryCommands::List(ListHistoryArgs::default())) {
            HistoryCommands::List(args) => {
                let workouts = self
                    .journal
                    .history(&args.into())
                    .await
                    .context("Failed to list workouts")?;
                self.renderer
                    .render(&format!("# Workout History\n\n{workouts}"))
            }
            HistoryCommands::Show(args) => {
                let id: Id = args.into();
                match self.journal.show_workout(&id).await {
                    Ok(workout) => self.renderer.render(&format!(
                        "# Workout {}\n\n{}",
                        workout.id, workout.summary
                    )),
                    Err(PacerError::WorkoutNotFound { id }) => self.renderer.render(
                        &OperationStatus::failure(format!("Workout with ID {id} not found"))
                            .to_string(),
                    ),
                    Err(e) => Err(e).context("Failed to show workout"),
                }
            }
        }
    }

    pub async fn records(&self, args: RecordsArgs) -> Result<()> {
        match Option::<ShowRecord>::from(args) {
            Some(params) => {
                let record = self
                    .journal
                    .get_record(&params)
                    .await
                    .context("Failed to look up record")?;
                match record {
                    Some(record) => self.renderer.render(&record.to_string()),
                    None => self.renderer.render(
                        &OperationStatus::failure(format!(
                            "No personal record for '{}'",
                            params.exercise
                        ))
                        .to_string(),
                    ),
                }
            }
            None => {
                let records = self
                    .journal
                    .records()
                    .await
                    .context("Failed to list records")?;
                self.renderer
                    .render(&format!("# Personal Records\n\n{records}"))
            }
        }
    }
}

fn load_session(path: &Path) -> Result<WorkoutSession> {
    WorkoutSession::load(path)
        .with_context(|| format!("Failed to load session from {}", path.display()))
}
