//! Personal records per exercise.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// One workout's contribution to a personal record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecordEntry {
    pub date: Timestamp,
    pub one_rep_max: f64,
    pub volume: f64,
}

/// Best estimated one-rep max and best single-workout volume for an
/// exercise, matched by case-insensitive name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalRecord {
    /// Journal row identifier (0 until stored)
    pub id: u64,
    pub exercise_name: String,
    pub one_rep_max: f64,
    pub max_volume: f64,
    pub last_updated: Timestamp,

    /// Oldest first
    #[serde(default)]
    pub history: Vec<RecordEntry>,
}

impl PersonalRecord {
    /// True when the record belongs to the named exercise.
    pub fn matches(&self, exercise_name: &str) -> bool {
        self.exercise_name.to_lowercase() == exercise_name.to_lowercase()
    }
}
