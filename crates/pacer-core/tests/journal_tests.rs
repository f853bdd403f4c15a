mod common;

use pacer_core::{
    params::{Id, ListHistory, ShowRecord},
    queue, Database, Player, PlayerEvent, SessionStatus, WorkoutSummary,
};

/// Drives a player to the end: ticks timed steps, completes rep steps.
fn play_to_end(player: &mut Player) -> Vec<PlayerEvent> {
    let mut events = Vec::new();
    while player.status() == SessionStatus::Active {
        let event = match player.current_step() {
            Some(step) if step.is_timed() => player.tick(),
            _ => player.complete_step(),
        };
        events.push(event);
    }
    events
}

#[test]
fn test_sample_session_queue_shape() {
    let queue = queue::compile(&common::sample_session());

    assert_eq!(queue.len(), 10);
    assert!(!queue.last().unwrap().is_rest());
    assert_eq!(queue.iter().filter(|s| s.is_rest()).count(), 4);
}

#[tokio::test]
async fn test_played_session_lands_in_journal() {
    let (_temp_dir, journal) = common::create_test_journal().await;

    let mut player = Player::new();
    player
        .start(common::sample_session())
        .expect("Failed to start");
    let events = play_to_end(&mut player);

    assert_eq!(events.last(), Some(&PlayerEvent::Completed));
    assert_eq!(player.elapsed_seconds(), 18);

    let mut db = Database::new(journal.database_path()).expect("Failed to open database");
    let summary = player
        .finish(true, &mut db)
        .expect("Failed to finish")
        .expect("Expected a summary");

    assert_eq!(summary.sets_completed(), 6);
    assert_eq!(summary.estimated_calories, 13);

    let history = journal
        .list_workouts(&ListHistory::default())
        .await
        .expect("Failed to list workouts");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].summary, summary);

    let stored = journal
        .get_workout(&Id { id: history[0].id })
        .await
        .expect("Failed to get workout")
        .expect("Workout should exist");
    assert_eq!(stored.summary.exercises.len(), 3);

    let deadlift = journal
        .get_record(&ShowRecord {
            exercise: "deadlift".to_string(),
        })
        .await
        .expect("Failed to get record")
        .expect("Record should exist");
    assert_eq!(deadlift.one_rep_max, 163.0);
    assert_eq!(deadlift.max_volume, 1400.0);

    // Burpees and planks carry no weight
    let records = journal.list_records().await.expect("Failed to list records");
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_aborted_session_records_nothing() {
    let (_temp_dir, journal) = common::create_test_journal().await;

    let mut player = Player::new();
    player
        .start(common::sample_session())
        .expect("Failed to start");
    player.complete_step();
    player.tick();

    let mut db = Database::new(journal.database_path()).expect("Failed to open database");
    assert!(player.finish(false, &mut db).unwrap().is_none());
    assert_eq!(player.status(), SessionStatus::Idle);

    let history = journal
        .list_workouts(&ListHistory::default())
        .await
        .expect("Failed to list workouts");
    assert!(history.is_empty());
}

#[tokio::test]
async fn test_buffered_summary_recorded_through_journal() {
    let (_temp_dir, journal) = common::create_test_journal().await;

    let mut player = Player::new();
    player
        .start(common::sample_session())
        .expect("Failed to start");
    play_to_end(&mut player);

    let mut finished: Vec<WorkoutSummary> = Vec::new();
    player.finish(true, &mut finished).expect("Failed to finish");
    assert_eq!(finished.len(), 1);

    let outcome = journal
        .record_workout(&finished[0])
        .await
        .expect("Failed to record");
    assert_eq!(outcome.updates.len(), 1);
    assert!(outcome.updates[0].improved);
}
