//! Tests for the journal module.

use jiff::Timestamp;
use tempfile::TempDir;

use super::*;
use crate::{
    error::PacerError,
    models::{CompletedExercise, LoggedSet, WorkoutSummary},
    params::{Id, ListHistory, ShowRecord},
};

/// Helper function to create a test journal
async fn create_test_journal() -> (TempDir, Journal) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let journal = JournalBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create journal");
    (temp_dir, journal)
}

fn lifted(name: &str, weight: f64, reps: &[u32]) -> CompletedExercise {
    CompletedExercise {
        exercise_id: name.to_lowercase(),
        name: name.to_string(),
        sets: reps
            .iter()
            .map(|&reps| LoggedSet {
                reps: Some(reps),
                duration_seconds: None,
                weight: Some(weight),
                completed_at: Timestamp::UNIX_EPOCH,
            })
            .collect(),
    }
}

fn summary(title: &str, completed_at: &str, exercises: Vec<CompletedExercise>) -> WorkoutSummary {
    WorkoutSummary {
        session_id: title.to_lowercase(),
        title: title.to_string(),
        completed_at: completed_at.parse().expect("Invalid timestamp"),
        duration_seconds: 1200,
        exercises,
        estimated_calories: 160,
    }
}

#[tokio::test]
async fn test_build_creates_parent_directories() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("nested").join("dir").join("pacer.db");

    let journal = JournalBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create journal");

    assert!(db_path.exists());
    assert_eq!(journal.database_path(), db_path.as_path());
}

#[tokio::test]
async fn test_record_and_get_workout() {
    let (_temp_dir, journal) = create_test_journal().await;

    let outcome = journal
        .record_workout(&summary(
            "Push Day",
            "2026-03-01T09:00:00Z",
            vec![lifted("Bench Press", 80.0, &[5, 5])],
        ))
        .await
        .expect("Failed to record workout");

    let workout = journal
        .get_workout(&Id {
            id: outcome.workout.id,
        })
        .await
        .expect("Failed to get workout")
        .expect("Workout should exist");

    assert_eq!(workout, outcome.workout);
    assert_eq!(workout.summary.exercises[0].sets.len(), 2);
    assert_eq!(workout.summary.estimated_calories, 160);
}

#[tokio::test]
async fn test_list_workouts_newest_first_with_limit() {
    let (_temp_dir, journal) = create_test_journal().await;

    for (title, date) in [
        ("First", "2026-03-01T09:00:00Z"),
        ("Third", "2026-03-03T09:00:00Z"),
        ("Second", "2026-03-02T09:00:00Z"),
    ] {
        journal
            .record_workout(&summary(title, date, vec![]))
            .await
            .expect("Failed to record workout");
    }

    let all = journal
        .list_workouts(&ListHistory::default())
        .await
        .expect("Failed to list workouts");
    let titles: Vec<_> = all.iter().map(|w| w.summary.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Second", "First"]);

    let limited = journal
        .list_workouts(&ListHistory { limit: Some(1) })
        .await
        .expect("Failed to list workouts");
    assert_eq!(limited.len(), 1);
    assert_eq!(limited[0].summary.title, "Third");
}

#[tokio::test]
async fn test_list_workouts_orders_within_the_same_second() {
    let (_temp_dir, journal) = create_test_journal().await;

    for (title, date) in [
        ("Later", "2026-03-01T09:00:00.250Z"),
        ("Earlier", "2026-03-01T09:00:00Z"),
    ] {
        journal
            .record_workout(&summary(title, date, vec![]))
            .await
            .expect("Failed to record workout");
    }

    let all = journal
        .list_workouts(&ListHistory::default())
        .await
        .expect("Failed to list workouts");
    let titles: Vec<_> = all.iter().map(|w| w.summary.title.as_str()).collect();
    assert_eq!(titles, vec!["Later", "Earlier"]);
    assert_eq!(
        all[0].summary.completed_at,
        "2026-03-01T09:00:00.250Z".parse::<Timestamp>().unwrap()
    );
}

#[tokio::test]
async fn test_show_missing_workout() {
    let (_temp_dir, journal) = create_test_journal().await;

    let error = journal.show_workout(&Id { id: 42 }).await.unwrap_err();
    assert!(matches!(error, PacerError::WorkoutNotFound { id: 42 }));
}

#[tokio::test]
async fn test_records_track_best_values_across_workouts() {
    let (_temp_dir, journal) = create_test_journal().await;

    let first = journal
        .record_workout(&summary(
            "Day 1",
            "2026-03-01T09:00:00Z",
            vec![lifted("Bench Press", 100.0, &[5])],
        ))
        .await
        .expect("Failed to record workout");
    assert_eq!(first.improved().count(), 1);

    // Same exercise, different casing, weaker session
    let second = journal
        .record_workout(&summary(
            "Day 2",
            "2026-03-02T09:00:00Z",
            vec![lifted("bench press", 60.0, &[5])],
        ))
        .await
        .expect("Failed to record workout");
    assert_eq!(second.updates.len(), 1);
    assert_eq!(second.improved().count(), 0);

    let records = journal.list_records().await.expect("Failed to list records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exercise_name, "Bench Press");
    assert_eq!(records[0].one_rep_max, 117.0);
    assert_eq!(records[0].max_volume, 500.0);
    assert_eq!(records[0].history.len(), 2);
    assert_eq!(records[0].history[1].volume, 300.0);
}

#[tokio::test]
async fn test_repeated_exercise_counts_once_per_workout() {
    let (_temp_dir, journal) = create_test_journal().await;

    let mut second_block = lifted("squat", 100.0, &[5]);
    second_block.exercise_id = "block-2-ex-1".to_string();

    let outcome = journal
        .record_workout(&summary(
            "Leg Day",
            "2026-03-01T09:00:00Z",
            vec![lifted("Squat", 100.0, &[5]), second_block],
        ))
        .await
        .expect("Failed to record workout");
    assert_eq!(outcome.updates.len(), 1);

    let records = journal.list_records().await.expect("Failed to list records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].exercise_name, "Squat");
    assert_eq!(records[0].max_volume, 1000.0);
    assert_eq!(records[0].history.len(), 1);
    assert_eq!(records[0].history[0].volume, 1000.0);

    // The stored workout keeps both entries as logged
    let stored = journal
        .get_workout(&Id {
            id: outcome.workout.id,
        })
        .await
        .expect("Failed to get workout")
        .expect("Workout should exist");
    assert_eq!(stored.summary.exercises.len(), 2);
}

#[tokio::test]
async fn test_unweighted_work_creates_no_record() {
    let (_temp_dir, journal) = create_test_journal().await;

    let mut plank = lifted("Plank", 0.0, &[]);
    plank.sets.push(LoggedSet {
        reps: None,
        duration_seconds: Some(60),
        weight: None,
        completed_at: Timestamp::UNIX_EPOCH,
    });

    let outcome = journal
        .record_workout(&summary("Core", "2026-03-01T09:00:00Z", vec![plank]))
        .await
        .expect("Failed to record workout");

    assert!(outcome.updates.is_empty());
    assert!(journal.list_records().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_record_is_case_insensitive() {
    let (_temp_dir, journal) = create_test_journal().await;

    journal
        .record_workout(&summary(
            "Legs",
            "2026-03-01T09:00:00Z",
            vec![lifted("Back Squat", 120.0, &[1])],
        ))
        .await
        .expect("Failed to record workout");

    let record = journal
        .get_record(&ShowRecord {
            exercise: "  back SQUAT ".to_string(),
        })
        .await
        .expect("Failed to get record")
        .expect("Record should exist");
    assert_eq!(record.one_rep_max, 120.0);

    let missing = journal
        .get_record(&ShowRecord {
            exercise: "Deadlift".to_string(),
        })
        .await
        .expect("Failed to get record");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_get_record_rejects_empty_name() {
    let (_temp_dir, journal) = create_test_journal().await;

    let error = journal
        .get_record(&ShowRecord {
            exercise: "   ".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(error, PacerError::InvalidInput { .. }));
}

#[tokio::test]
async fn test_handlers_format_output() {
    let (_temp_dir, journal) = create_test_journal().await;

    let history = journal
        .history(&ListHistory::default())
        .await
        .expect("Failed to list history");
    assert!(history.is_empty());
    assert_eq!(history.to_string(), "No workouts recorded.\n");

    let result = journal
        .record_workout_result(&summary(
            "Pull Day",
            "2026-03-01T09:00:00Z",
            vec![lifted("Row", 50.0, &[10])],
        ))
        .await
        .expect("Failed to record workout");
    let output = result.to_string();
    assert!(output.contains("Recorded workout with ID: 1"));
    assert!(output.contains("- Row: 1RM 67, volume 500"));

    let records = journal.records().await.expect("Failed to list records");
    assert_eq!(records.len(), 1);
    assert!(records.to_string().contains("## Row"));
}
