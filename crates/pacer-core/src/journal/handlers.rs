//! Journal operations that return display wrappers.
//!
//! Both the CLI and the MCP server print these directly, so the wording of a
//! missing workout or an empty history is the same everywhere.

use super::Journal;
use crate::{
    display::{RecordResult, Records, Workouts},
    error::{PacerError, Result},
    models::{CompletedWorkout, WorkoutSummary},
    params::{Id, ListHistory},
};

impl Journal {
    /// Handle recording a workout, returning a printable result.
    pub async fn record_workout_result(&self, summary: &WorkoutSummary) -> Result<RecordResult> {
        self.record_workout(summary).await.map(RecordResult::new)
    }

    /// Handle listing the workout history.
    pub async fn history(&self, params: &ListHistory) -> Result<Workouts> {
        self.list_workouts(params).await.map(Workouts)
    }

    /// Handle showing one workout.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::WorkoutNotFound` when no workout has the ID.
    pub async fn show_workout(&self, params: &Id) -> Result<CompletedWorkout> {
        self.get_workout(params)
            .await?
            .ok_or(PacerError::WorkoutNotFound { id: params.id })
    }

    /// Handle listing personal records.
    pub async fn records(&self) -> Result<Records> {
        self.list_records().await.map(Records)
    }
}
