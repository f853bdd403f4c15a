//! Completed workout storage and queries.

use rusqlite::{params, OptionalExtension};

use super::{
    record_queries::{find_record, save_record},
    utils::{id_column, json_column, timestamp_column, timestamp_text},
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{CompletedWorkout, WorkoutSummary},
    records::{group_by_name, update_personal_record, RecordOutcome},
};

const INSERT_WORKOUT_SQL: &str = "INSERT INTO workouts (session_id, title, completed_at, duration_seconds, estimated_calories, exercises) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const WORKOUT_COLUMNS: &str =
    "id, session_id, title, completed_at, duration_seconds, estimated_calories, exercises";

fn workout_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CompletedWorkout> {
    Ok(CompletedWorkout {
        id: id_column(row, 0)?,
        summary: WorkoutSummary {
            session_id: row.get(1)?,
            title: row.get(2)?,
            completed_at: timestamp_column(row, 3)?,
            duration_seconds: id_column(row, 4)?,
            estimated_calories: row.get(5)?,
            exercises: json_column(row, 6)?,
        },
    })
}

impl super::Database {
    /// Stores a finished workout and folds its sets into the personal
    /// records, all in one transaction.
    pub fn record_workout(&mut self, summary: &WorkoutSummary) -> Result<RecordOutcome> {
        let exercises = serde_json::to_string(&summary.exercises)?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_WORKOUT_SQL,
            params![
                summary.session_id,
                summary.title,
                timestamp_text(&summary.completed_at),
                summary.duration_seconds as i64,
                summary.estimated_calories,
                exercises,
            ],
        )
        .db_context("Failed to insert workout")?;

        let workout_id = tx.last_insert_rowid() as u64;

        let mut updates = Vec::new();
        for exercise in group_by_name(&summary.exercises) {
            let existing = find_record(&tx, &exercise.name)?;
            let Some(mut update) =
                update_personal_record(existing.as_ref(), &exercise, summary.completed_at)
            else {
                continue;
            };

            update.record.id = save_record(&tx, &update.record, workout_id)?;
            updates.push(update);
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(RecordOutcome {
            workout: CompletedWorkout {
                id: workout_id,
                summary: summary.clone(),
            },
            updates,
        })
    }

    /// Retrieves a completed workout by its ID.
    pub fn get_workout(&self, id: u64) -> Result<Option<CompletedWorkout>> {
        let query = format!("SELECT {WORKOUT_COLUMNS} FROM workouts WHERE id = ?1");
        self.connection
            .query_row(&query, params![id as i64], workout_from_row)
            .optional()
            .db_context("Failed to query workout")
    }

    /// Lists completed workouts, newest first.
    pub fn list_workouts(&self, limit: Option<u32>) -> Result<Vec<CompletedWorkout>> {
        // A negative LIMIT means no limit in SQLite.
        let limit = limit.map_or(-1, i64::from);
        let query = format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts ORDER BY completed_at DESC, id DESC LIMIT ?1"
        );

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let workouts = stmt
            .query_map(params![limit], workout_from_row)
            .db_context("Failed to query workouts")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch workouts")?;

        Ok(workouts)
    }
}
