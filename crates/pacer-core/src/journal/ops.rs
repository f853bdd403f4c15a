//! Journal operations returning models.

use log::info;
use tokio::task;

use super::Journal;
use crate::{
    db::Database,
    error::{PacerError, Result},
    models::{CompletedWorkout, PersonalRecord, WorkoutSummary},
    params::{Id, ListHistory, ShowRecord},
    records::RecordOutcome,
};

impl Journal {
    /// Stores a finished workout and updates personal records in one
    /// transaction.
    pub async fn record_workout(&self, summary: &WorkoutSummary) -> Result<RecordOutcome> {
        let db_path = self.db_path.clone();
        let summary = summary.clone();

        let outcome = task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.record_workout(&summary)
        })
        .await
        .map_err(PacerError::join)??;

        info!(
            "Stored workout {} with {} record updates",
            outcome.workout.id,
            outcome.updates.len()
        );
        Ok(outcome)
    }

    /// Retrieves a completed workout by its ID.
    pub async fn get_workout(&self, params: &Id) -> Result<Option<CompletedWorkout>> {
        let db_path = self.db_path.clone();
        let id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_workout(id)
        })
        .await
        .map_err(PacerError::join)?
    }

    /// Lists completed workouts, newest first.
    pub async fn list_workouts(&self, params: &ListHistory) -> Result<Vec<CompletedWorkout>> {
        let db_path = self.db_path.clone();
        let limit = params.limit;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_workouts(limit)
        })
        .await
        .map_err(PacerError::join)?
    }

    /// Lists every personal record.
    pub async fn list_records(&self) -> Result<Vec<PersonalRecord>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_records()
        })
        .await
        .map_err(PacerError::join)?
    }

    /// Retrieves the record of one exercise, matched case-insensitively.
    pub async fn get_record(&self, params: &ShowRecord) -> Result<Option<PersonalRecord>> {
        let db_path = self.db_path.clone();
        let exercise = params.exercise.trim().to_string();

        if exercise.is_empty() {
            return Err(PacerError::invalid_input("exercise").with_reason("must not be empty"));
        }

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_record(&exercise)
        })
        .await
        .map_err(PacerError::join)?
    }
}
