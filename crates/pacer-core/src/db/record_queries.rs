//! Personal record storage and queries.

use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{id_column, timestamp_column, timestamp_text};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{PersonalRecord, RecordEntry},
};

const SELECT_RECORD_BY_NAME_SQL: &str = "SELECT id, exercise_name, one_rep_max, max_volume, last_updated FROM personal_records WHERE exercise_name = ?1 COLLATE NOCASE";
const SELECT_RECORDS_SQL: &str = "SELECT id, exercise_name, one_rep_max, max_volume, last_updated FROM personal_records ORDER BY exercise_name COLLATE NOCASE";
const SELECT_HISTORY_SQL: &str =
    "SELECT date, one_rep_max, volume FROM record_history WHERE record_id = ?1 ORDER BY date, id";
const INSERT_RECORD_SQL: &str = "INSERT INTO personal_records (exercise_name, one_rep_max, max_volume, last_updated) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_RECORD_SQL: &str =
    "UPDATE personal_records SET one_rep_max = ?1, max_volume = ?2, last_updated = ?3 WHERE id = ?4";
const INSERT_HISTORY_SQL: &str = "INSERT INTO record_history (record_id, workout_id, date, one_rep_max, volume) VALUES (?1, ?2, ?3, ?4, ?5)";

fn record_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<PersonalRecord> {
    Ok(PersonalRecord {
        id: id_column(row, 0)?,
        exercise_name: row.get(1)?,
        one_rep_max: row.get(2)?,
        max_volume: row.get(3)?,
        last_updated: timestamp_column(row, 4)?,
        history: Vec::new(),
    })
}

fn load_history(connection: &Connection, record: &mut PersonalRecord) -> Result<()> {
    let mut stmt = connection
        .prepare(SELECT_HISTORY_SQL)
        .db_context("Failed to prepare query")?;

    record.history = stmt
        .query_map(params![record.id as i64], |row| {
            Ok(RecordEntry {
                date: timestamp_column(row, 0)?,
                one_rep_max: row.get(1)?,
                volume: row.get(2)?,
            })
        })
        .db_context("Failed to query record history")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch record history")?;

    Ok(())
}

/// Looks up a record by case-insensitive exercise name, with its history.
pub(crate) fn find_record(connection: &Connection, name: &str) -> Result<Option<PersonalRecord>> {
    let record = connection
        .query_row(SELECT_RECORD_BY_NAME_SQL, params![name], record_from_row)
        .optional()
        .db_context("Failed to query personal record")?;

    match record {
        Some(mut record) => {
            load_history(connection, &mut record)?;
            Ok(Some(record))
        }
        None => Ok(None),
    }
}

/// Inserts or updates a record and appends its newest history entry.
///
/// Returns the record's row ID.
pub(crate) fn save_record(
    connection: &Connection,
    record: &PersonalRecord,
    workout_id: u64,
) -> Result<u64> {
    let last_updated = timestamp_text(&record.last_updated);

    let id = if record.id == 0 {
        connection
            .execute(
                INSERT_RECORD_SQL,
                params![
                    record.exercise_name,
                    record.one_rep_max,
                    record.max_volume,
                    last_updated
                ],
            )
            .db_context("Failed to insert personal record")?;
        connection.last_insert_rowid() as u64
    } else {
        connection
            .execute(
                UPDATE_RECORD_SQL,
                params![
                    record.one_rep_max,
                    record.max_volume,
                    last_updated,
                    record.id as i64
                ],
            )
            .db_context("Failed to update personal record")?;
        record.id
    };

    if let Some(entry) = record.history.last() {
        connection
            .execute(
                INSERT_HISTORY_SQL,
                params![
                    id as i64,
                    workout_id as i64,
                    timestamp_text(&entry.date),
                    entry.one_rep_max,
                    entry.volume
                ],
            )
            .db_context("Failed to insert record history")?;
    }

    Ok(id)
}

impl super::Database {
    /// Retrieves the record for an exercise, matched case-insensitively.
    pub fn get_record(&self, exercise_name: &str) -> Result<Option<PersonalRecord>> {
        find_record(&self.connection, exercise_name)
    }

    /// Lists every personal record with its history, by exercise name.
    pub fn list_records(&self) -> Result<Vec<PersonalRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_RECORDS_SQL)
            .db_context("Failed to prepare query")?;

        let mut records = stmt
            .query_map([], record_from_row)
            .db_context("Failed to query personal records")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch personal records")?;

        for record in &mut records {
            load_history(&self.connection, record)?;
        }

        Ok(records)
    }
}
