//! Data models for sessions, compiled steps, summaries and records.
//!
//! The models fall into three groups:
//!
//! - **Input** ([`WorkoutSession`], [`WorkoutBlock`], [`Exercise`]): the
//!   declarative workout, deserialized from camelCase JSON.
//! - **Queue** ([`SessionStep`], [`WorkStep`], [`RestStep`], [`Target`],
//!   [`NextUp`]): the compiler's output, consumed by the player.
//! - **Results** ([`WorkoutSummary`], [`CompletedWorkout`],
//!   [`PersonalRecord`]): what a finished session produces and the journal
//!   stores.
//!
//! Markdown `Display` implementations live in [`crate::display`].

pub mod kinds;
pub mod record;
pub mod session;
pub mod step;
pub mod summary;


pub use kinds::{BlockKind, Difficulty, ExerciseKind, TargetKind};
pub use record::{PersonalRecord, RecordEntry};
pub use session::{Exercise, WorkoutBlock, WorkoutSession};
pub use step::{NextUp, NextUpKind, RestStep, SessionStep, Target, WorkStep, SECONDS_PER_REP};
pub use summary::{
    estimate_calories, CompletedExercise, CompletedWorkout, LoggedSet, WorkoutSummary,
    CALORIES_PER_MINUTE,
};
