//! SQLite storage for completed workouts and personal records.
//!
//! [`Database`] is synchronous; the async [`crate::journal::Journal`] opens
//! one per operation inside `spawn_blocking`. It also serves as the
//! [`CompletionSink`] for callers that drive the player on a blocking thread.

use std::path::Path;

use rusqlite::Connection;

use crate::{
    error::{DatabaseResultExt, Result},
    models::WorkoutSummary,
    player::CompletionSink,
};

pub mod record_queries;
pub mod schema;
pub mod utils;
pub mod workout_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

impl CompletionSink for Database {
    fn record(&mut self, summary: &WorkoutSummary) -> Result<()> {
        self.record_workout(summary).map(|_| ())
    }
}
