//! Completion summaries and the per-exercise set log.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{TargetKind, WorkStep};

/// Calories per minute of planned active work used for estimates.
pub const CALORIES_PER_MINUTE: f64 = 8.0;

/// One set recorded when a work step is completed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggedSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    pub completed_at: Timestamp,
}

impl LoggedSet {
    /// Records a work step as performed exactly as prescribed.
    pub fn from_step(step: &WorkStep, completed_at: Timestamp) -> Self {
        let (reps, duration_seconds) = match step.target.kind {
            TargetKind::Reps => (Some(step.target.value), None),
            TargetKind::Time => (None, Some(step.target.value)),
        };

        Self {
            reps,
            duration_seconds,
            weight: step.target.weight,
            completed_at,
        }
    }
}

/// All sets logged for one exercise during a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CompletedExercise {
    pub exercise_id: String,
    pub name: String,
    pub sets: Vec<LoggedSet>,
}

/// What a finished session hands to the completion sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSummary {
    pub session_id: String,
    pub title: String,
    pub completed_at: Timestamp,

    /// Seconds the session clock ran while active and not paused
    pub duration_seconds: u64,

    #[serde(default)]
    pub exercises: Vec<CompletedExercise>,

    pub estimated_calories: u32,
}

impl WorkoutSummary {
    /// Number of exercises with at least one logged set.
    pub fn exercises_completed(&self) -> u32 {
        self.exercises.iter().filter(|e| !e.sets.is_empty()).count() as u32
    }

    /// Number of logged sets across all exercises.
    pub fn sets_completed(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets.len() as u32).sum()
    }
}

/// A workout summary as stored in the journal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedWorkout {
    /// Journal row identifier
    pub id: u64,

    #[serde(flatten)]
    pub summary: WorkoutSummary,
}

/// Estimates calories from planned active seconds.
///
/// # Examples
///
/// ```rust
/// use pacer_core::models::estimate_calories;
///
/// assert_eq!(estimate_calories(0), 0);
/// assert_eq!(estimate_calories(90), 12);
/// ```
pub fn estimate_calories(active_seconds: u64) -> u32 {
    (active_seconds as f64 / 60.0 * CALORIES_PER_MINUTE).round() as u32
}
