//! Tests for the session player.

use super::*;
use crate::models::{BlockKind, Exercise, WorkoutBlock};

fn reps(id: &str, sets: u32, rest_seconds: u32) -> Exercise {
    let mut exercise = Exercise::new(id.to_uppercase());
    exercise.id = id.to_string();
    exercise.sets = sets;
    exercise.reps = Some(10);
    exercise.rest_seconds = rest_seconds;
    exercise.weight = Some(50.0);
    exercise
}

fn timed(id: &str, seconds: u32, rest_seconds: u32) -> Exercise {
    let mut exercise = Exercise::new(id.to_uppercase());
    exercise.id = id.to_string();
    exercise.sets = 1;
    exercise.duration_seconds = Some(seconds);
    exercise.rest_seconds = rest_seconds;
    exercise
}

fn session(exercises: Vec<Exercise>) -> WorkoutSession {
    WorkoutSession {
        id: "player-test".to_string(),
        title: "Player Test".to_string(),
        description: String::new(),
        total_duration_min: 20,
        difficulty: Default::default(),
        blocks: vec![WorkoutBlock::new(BlockKind::Strength, exercises)],
    }
}

fn started(exercises: Vec<Exercise>) -> Player {
    let mut player = Player::new();
    player.start(session(exercises)).expect("Failed to start session");
    player
}

#[test]
fn test_new_player_is_idle() {
    let player = Player::new();
    assert_eq!(player.status(), SessionStatus::Idle);
    assert!(player.current_step().is_none());
    assert!(player.queue().is_empty());
}

#[test]
fn test_start_activates_first_step() {
    let mut player = Player::new();
    let event = player
        .start(session(vec![reps("a", 2, 30)]))
        .expect("Failed to start session");

    assert_eq!(event, PlayerEvent::Started { steps: 3 });
    assert_eq!(player.status(), SessionStatus::Active);
    assert_eq!(player.current_index(), 0);
    assert!(!player.is_paused());
    // 10 reps at the nominal 3 seconds each
    assert_eq!(player.countdown(), 30);
}

#[test]
fn test_start_rejects_empty_session() {
    let mut player = Player::new();
    let error = player.start(session(vec![])).unwrap_err();

    assert!(matches!(error, PacerError::EmptySession { .. }));
    assert_eq!(player.status(), SessionStatus::Idle);
}

#[test]
fn test_start_rejects_second_active_session() {
    let mut player = started(vec![reps("a", 1, 0)]);
    let error = player.start(session(vec![reps("b", 1, 0)])).unwrap_err();

    assert!(matches!(error, PacerError::SessionInProgress));
    assert_eq!(player.session().unwrap().id, "player-test");
}

#[test]
fn test_completing_every_step_reaches_completed() {
    let mut player = started(vec![reps("a", 2, 30), timed("b", 20, 10)]);
    let total = player.queue().len();
    let mut last_index = player.current_index();

    for _ in 0..total {
        player.complete_step();
        assert!(player.current_index() >= last_index);
        last_index = player.current_index();
    }

    assert_eq!(player.status(), SessionStatus::Completed);
    assert!(player.current_step().is_none());
    assert_eq!(player.countdown(), 0);
    assert_eq!(player.complete_step(), PlayerEvent::Ignored);
}

#[test]
fn test_tick_counts_down_timed_step_and_advances() {
    let mut player = started(vec![timed("plank", 3, 0), reps("b", 1, 0)]);
    assert_eq!(player.countdown(), 3);

    assert_eq!(player.tick(), PlayerEvent::Ticked { remaining: 2 });
    assert_eq!(player.tick(), PlayerEvent::Ticked { remaining: 1 });
    assert_eq!(player.tick(), PlayerEvent::Advanced { index: 1 });

    assert_eq!(player.current_index(), 1);
    assert_eq!(player.countdown(), 30);
    assert_eq!(player.elapsed_seconds(), 3);
}

#[test]
fn test_tick_does_not_decrement_rep_steps() {
    let mut player = started(vec![reps("a", 1, 0)]);

    for _ in 0..100 {
        assert_eq!(player.tick(), PlayerEvent::Ticked { remaining: 30 });
    }

    assert_eq!(player.current_index(), 0);
    assert_eq!(player.status(), SessionStatus::Active);
    assert_eq!(player.elapsed_seconds(), 100);
}

#[test]
fn test_rest_countdown_expires_into_next_work() {
    let mut player = started(vec![reps("a", 2, 2)]);
    assert_eq!(player.complete_step(), PlayerEvent::Advanced { index: 1 });
    assert!(player.current_step().unwrap().is_rest());
    assert_eq!(player.countdown(), 2);

    player.tick();
    assert_eq!(player.tick(), PlayerEvent::Advanced { index: 2 });
    assert!(!player.current_step().unwrap().is_rest());
}

#[test]
fn test_last_timed_step_completes_session() {
    let mut player = started(vec![timed("plank", 1, 0)]);
    assert_eq!(player.tick(), PlayerEvent::Completed);
    assert_eq!(player.status(), SessionStatus::Completed);
}

#[test]
fn test_ticks_while_paused_change_nothing() {
    let mut player = started(vec![timed("plank", 5, 0), reps("b", 1, 0)]);
    player.tick();
    assert_eq!(player.toggle_pause(), PlayerEvent::Paused);

    let index = player.current_index();
    let countdown = player.countdown();
    let elapsed = player.elapsed_seconds();
    for _ in 0..50 {
        assert_eq!(player.tick(), PlayerEvent::Ignored);
    }

    assert_eq!(player.current_index(), index);
    assert_eq!(player.countdown(), countdown);
    assert_eq!(player.elapsed_seconds(), elapsed);

    assert_eq!(player.toggle_pause(), PlayerEvent::Resumed);
    assert_eq!(player.tick(), PlayerEvent::Ticked { remaining: 3 });
}

#[test]
fn test_advancing_clears_pause() {
    let mut player = started(vec![reps("a", 2, 0)]);
    player.toggle_pause();
    assert!(player.is_paused());

    player.complete_step();
    assert!(!player.is_paused());
}

#[test]
fn test_skip_advances_regardless_of_countdown() {
    let mut player = started(vec![timed("plank", 60, 45), reps("b", 1, 0)]);
    player.tick();

    assert_eq!(player.skip(), PlayerEvent::Advanced { index: 1 });
    assert_eq!(player.countdown(), 45);
    assert_eq!(player.skip(), PlayerEvent::Advanced { index: 2 });
    assert_eq!(player.skip(), PlayerEvent::Completed);
}

#[test]
fn test_transitions_outside_active_are_ignored() {
    let mut player = Player::new();
    assert_eq!(player.tick(), PlayerEvent::Ignored);
    assert_eq!(player.toggle_pause(), PlayerEvent::Ignored);
    assert_eq!(player.skip(), PlayerEvent::Ignored);
    assert_eq!(player.abort(), PlayerEvent::Ignored);
    assert_eq!(player.status(), SessionStatus::Idle);
}

#[test]
fn test_abort_discards_session() {
    let mut player = started(vec![reps("a", 3, 30)]);
    player.complete_step();

    assert_eq!(player.abort(), PlayerEvent::Aborted);
    assert_eq!(player.status(), SessionStatus::Idle);
    assert!(player.queue().is_empty());
    assert!(player.session().is_none());
    assert!(player.completed_exercises().is_empty());
    assert_eq!(player.current_index(), 0);
}

#[test]
fn test_restart_after_completion() {
    let mut player = started(vec![reps("a", 1, 0)]);
    player.complete_step();
    assert_eq!(player.status(), SessionStatus::Completed);

    let event = player
        .start(session(vec![reps("b", 2, 0)]))
        .expect("Failed to restart");
    assert_eq!(event, PlayerEvent::Started { steps: 2 });
    assert!(player.completed_exercises().is_empty());
}

#[test]
fn test_completed_work_is_logged_per_exercise() {
    let mut player = started(vec![reps("a", 2, 30), timed("b", 20, 0)]);
    while player.status() == SessionStatus::Active {
        player.complete_step();
    }

    let log = player.completed_exercises();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].exercise_id, "a");
    assert_eq!(log[0].sets.len(), 2);
    assert_eq!(log[0].sets[0].reps, Some(10));
    assert_eq!(log[0].sets[0].weight, Some(50.0));
    assert_eq!(log[1].sets[0].duration_seconds, Some(20));
    assert_eq!(log[1].sets[0].reps, None);
}

#[test]
fn test_exercises_sharing_an_id_are_logged_apart() {
    let mut press = reps("a", 1, 0);
    press.name = "Press".to_string();
    let mut row = reps("a", 1, 0);
    row.name = "Row".to_string();

    let mut player = started(vec![press, row]);
    while player.status() == SessionStatus::Active {
        player.complete_step();
    }

    let log = player.completed_exercises();
    assert_eq!(log.len(), 2);
    assert_eq!(log[0].name, "Press");
    assert_eq!(log[1].name, "Row");
    assert_eq!(log[1].sets.len(), 1);
}

#[test]
fn test_finish_records_summary_once() {
    let mut player = started(vec![reps("a", 1, 0), timed("b", 2, 0)]);
    player.complete_step();
    player.tick();
    player.tick();
    assert_eq!(player.status(), SessionStatus::Completed);

    let mut sink: Vec<WorkoutSummary> = Vec::new();
    let summary = player
        .finish(true, &mut sink)
        .expect("Failed to finish")
        .expect("Expected a summary");

    assert_eq!(sink.len(), 1);
    assert_eq!(summary.session_id, "player-test");
    assert_eq!(summary.duration_seconds, 2);
    assert_eq!(summary.exercises_completed(), 2);
    assert_eq!(summary.sets_completed(), 2);
    // 30s of reps + 2s timed work
    assert_eq!(summary.estimated_calories, estimate_calories(32));

    assert!(player.finish(true, &mut sink).unwrap().is_none());
    assert_eq!(sink.len(), 1);
    assert_eq!(player.status(), SessionStatus::Completed);
}

#[test]
fn test_finish_early_from_active() {
    let mut player = started(vec![reps("a", 3, 30)]);
    player.complete_step();

    let mut sink: Vec<WorkoutSummary> = Vec::new();
    let summary = player.finish(true, &mut sink).unwrap().unwrap();

    assert_eq!(player.status(), SessionStatus::Completed);
    assert_eq!(summary.sets_completed(), 1);
    assert_eq!(player.tick(), PlayerEvent::Ignored);
}

#[test]
fn test_finish_without_completion_aborts() {
    let mut player = started(vec![reps("a", 3, 30)]);
    let mut sink: Vec<WorkoutSummary> = Vec::new();

    assert!(player.finish(false, &mut sink).unwrap().is_none());
    assert!(sink.is_empty());
    assert_eq!(player.status(), SessionStatus::Idle);
}

#[test]
fn test_finish_while_idle_records_nothing() {
    let mut player = Player::new();
    let mut sink: Vec<WorkoutSummary> = Vec::new();

    assert!(player.finish(true, &mut sink).unwrap().is_none());
    assert!(sink.is_empty());
}

struct FailingSink;

impl CompletionSink for FailingSink {
    fn record(&mut self, _summary: &WorkoutSummary) -> Result<()> {
        Err(PacerError::Configuration {
            message: "disk full".to_string(),
        })
    }
}

#[test]
fn test_finish_keeps_state_when_sink_fails() {
    let mut player = started(vec![reps("a", 2, 0)]);
    player.complete_step();

    assert!(player.finish(true, &mut FailingSink).is_err());
    assert_eq!(player.status(), SessionStatus::Active);

    let mut sink: Vec<WorkoutSummary> = Vec::new();
    assert!(player.finish(true, &mut sink).unwrap().is_some());
    assert_eq!(sink.len(), 1);
}
