//! Session queue compiler.
//!
//! Expands a declarative [`WorkoutSession`] into the flat list of work and
//! rest steps the [`crate::player::Player`] walks through:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │ WorkoutSession  │    │  expand blocks  │    │ trim + annotate │
//! │ (blocks of      │───▶│ (strength-like  │───▶│ (no trailing    │
//! │  exercises)     │    │  or circuit)    │    │  rest, nextUp)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Compilation is pure and total. Blocks without exercises, circuits with
//! zero rounds and exercises with zero sets contribute no steps; nothing is
//! normalized here.

use crate::models::{
    Exercise, NextUp, RestStep, SessionStep, Target, WorkStep, WorkoutBlock, WorkoutSession,
};


/// Compiles a session into its ordered step queue.
///
/// # Examples
///
/// ```rust
/// use pacer_core::{
///     models::{BlockKind, Exercise, WorkoutBlock, WorkoutSession},
///     queue::compile,
/// };
///
/// let mut squat = Exercise::new("Squat");
/// squat.id = "squat".to_string();
/// squat.sets = 2;
/// squat.reps = Some(5);
/// squat.rest_seconds = 90;
///
/// let session = WorkoutSession {
///     id: "legs".to_string(),
///     title: "Legs".to_string(),
///     description: String::new(),
///     total_duration_min: 10,
///     difficulty: Default::default(),
///     blocks: vec![WorkoutBlock::new(BlockKind::Strength, vec![squat])],
/// };
///
/// let queue = compile(&session);
/// // work, rest, work: the trailing rest is dropped
/// assert_eq!(queue.len(), 3);
/// assert!(!queue.last().unwrap().is_rest());
/// ```
pub fn compile(session: &WorkoutSession) -> Vec<SessionStep> {
    let mut queue = Vec::new();

    for (index, block) in session.blocks.iter().enumerate() {
        if block.kind.is_circuit_like() {
            expand_rounds(index, block, &mut queue);
        } else {
            expand_sets(index, block, &mut queue);
        }
    }

    if matches!(queue.last(), Some(SessionStep::Rest(_))) {
        queue.pop();
    }

    annotate_next_up(&mut queue);
    queue
}

/// Strength-like expansion: every set of one exercise before the next.
fn expand_sets(block_index: usize, block: &WorkoutBlock, queue: &mut Vec<SessionStep>) {
    for (position, exercise) in block.exercises.iter().enumerate() {
        let slot = Slot::new(block_index, position, exercise);
        for set in 1..=exercise.sets {
            queue.push(work_step(&slot, block, exercise, set, exercise.sets));

            if exercise.rest_seconds > 0 {
                queue.push(rest_step(&slot, set, exercise.rest_seconds));
            }
        }
    }
}

/// Circuit-like expansion: every exercise once per round.
fn expand_rounds(block_index: usize, block: &WorkoutBlock, queue: &mut Vec<SessionStep>) {
    let Some(last) = block.exercises.len().checked_sub(1) else {
        return;
    };

    for round in 1..=block.rounds {
        for (position, exercise) in block.exercises.iter().enumerate() {
            let slot = Slot::new(block_index, position, exercise);
            queue.push(work_step(&slot, block, exercise, round, block.rounds));

            let is_last_station = position == last;
            let is_final_round = round == block.rounds;

            // Inter-station rest, or end-of-round rest before another round.
            if exercise.rest_seconds > 0 && (!is_last_station || !is_final_round) {
                queue.push(rest_step(&slot, round, exercise.rest_seconds));
            }
        }
    }
}

/// Where an exercise sits in the session, as used in step ids.
///
/// The position keeps ids unique when two exercises in a block share an id.
struct Slot(String);

impl Slot {
    fn new(block_index: usize, position: usize, exercise: &Exercise) -> Self {
        Self(format!("{block_index}-{position}-{}", exercise.id))
    }
}

fn work_step(
    slot: &Slot,
    block: &WorkoutBlock,
    exercise: &Exercise,
    set_number: u32,
    total_sets: u32,
) -> SessionStep {
    SessionStep::Work(WorkStep {
        id: format!("work-{}-{set_number}", slot.0),
        exercise: exercise.clone(),
        block: block.kind,
        set_number,
        total_sets,
        target: Target::for_exercise(exercise),
        next_up: None,
    })
}

fn rest_step(slot: &Slot, number: u32, duration: u32) -> SessionStep {
    SessionStep::Rest(RestStep {
        id: format!("rest-{}-{number}", slot.0),
        duration,
        next_up: None,
    })
}

/// Points every step at the nearest following work step.
///
/// Steps with no work after them get the `Finish` marker; the last step
/// always gets `Complete`.
fn annotate_next_up(queue: &mut [SessionStep]) {
    let Some(last) = queue.len().checked_sub(1) else {
        return;
    };

    let mut upcoming: Option<NextUp> = None;
    for index in (0..queue.len()).rev() {
        let next_up = if index == last {
            NextUp::complete()
        } else {
            upcoming.clone().unwrap_or_else(NextUp::finish)
        };

        let step = &mut queue[index];
        if let Some(work) = step.as_work() {
            upcoming = Some(NextUp::from(work));
        }
        step.set_next_up(next_up);
    }
}
