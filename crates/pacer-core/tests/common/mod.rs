use pacer_core::{Journal, JournalBuilder, WorkoutSession};
use tempfile::TempDir;

/// Helper function to create a test journal
pub async fn create_test_journal() -> (TempDir, Journal) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let journal = JournalBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create journal");
    (temp_dir, journal)
}

/// A strength block followed by a two-round circuit.
pub fn sample_session() -> WorkoutSession {
    WorkoutSession::from_json(
        r#"{
            "title": "Sample Session",
            "totalDurationMin": 20,
            "blocks": [
                {
                    "type": "strength",
                    "exercises": [
                        { "name": "Deadlift", "sets": 2, "reps": 5, "weight": 140, "restSeconds": 3 }
                    ]
                },
                {
                    "type": "circuit",
                    "rounds": 2,
                    "exercises": [
                        { "name": "Burpee", "reps": 10, "restSeconds": 2 },
                        { "name": "Plank", "durationSeconds": 4, "restSeconds": 0 }
                    ]
                }
            ]
        }"#,
    )
    .expect("Failed to parse sample session")
}
