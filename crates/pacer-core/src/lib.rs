//! Core library for the Pacer workout player.
//!
//! A declarative [`WorkoutSession`] is compiled by [`queue::compile`] into a
//! flat list of work and rest steps. The [`Player`] walks that list with a
//! single cursor and a countdown, and hands the summary of a finished session
//! to a [`CompletionSink`]. The SQLite-backed [`Journal`] keeps completed
//! workouts and the personal records derived from them.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ WorkoutSession  │    │     Player      │    │     Journal     │
//! │  (JSON input)   │───▶│ (compiled queue │───▶│ (history and    │
//! │                 │    │  + countdown)   │    │  records)       │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The compiler and the player do no I/O and have no clock of their own;
//! callers drive [`Player::tick`] once per second.
//!
//! # Quick Start
//!
//! ```rust
//! use pacer_core::{Player, SessionStatus, WorkoutSession, WorkoutSummary};
//!
//! # fn main() -> Result<(), pacer_core::PacerError> {
//! let session = WorkoutSession::from_json(
//!     r#"{
//!         "title": "Quick Core",
//!         "blocks": [{
//!             "type": "circuit",
//!             "rounds": 2,
//!             "exercises": [
//!                 { "name": "Plank", "durationSeconds": 2, "restSeconds": 0 },
//!                 { "name": "Crunch", "reps": 10, "restSeconds": 0 }
//!             ]
//!         }]
//!     }"#,
//! )?;
//!
//! let mut player = Player::new();
//! player.start(session)?;
//!
//! while player.status() == SessionStatus::Active {
//!     match player.current_step() {
//!         Some(step) if step.is_timed() => {
//!             player.tick();
//!         }
//!         _ => {
//!             player.complete_step();
//!         }
//!     }
//! }
//!
//! let mut finished: Vec<WorkoutSummary> = Vec::new();
//! let summary = player.finish(true, &mut finished)?.expect("summary");
//! assert_eq!(summary.sets_completed(), 4);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod journal;
pub mod models;
pub mod params;
pub mod player;
pub mod queue;
pub mod records;

// Re-export commonly used types
pub use db::Database;
pub use display::{Clock, LocalDateTime, OperationStatus, Queue, RecordResult, Records, Workouts};
pub use error::{PacerError, Result};
pub use journal::{Journal, JournalBuilder};
pub use models::{
    CompletedWorkout, Exercise, PersonalRecord, SessionStep, WorkoutBlock, WorkoutSession,
    WorkoutSummary,
};
pub use params::{CompileSession, Id, ListHistory, ShowRecord};
pub use player::{CompletionSink, Player, PlayerEvent, SessionStatus};
pub use records::{RecordOutcome, RecordUpdate};
