//! Personal record estimation.
//!
//! A record tracks the best estimated one-rep max (Epley) and the best
//! single-workout volume for an exercise. Only completed sets that carry both
//! a weight and a rep count qualify.

use jiff::Timestamp;

use crate::models::{CompletedExercise, CompletedWorkout, LoggedSet, PersonalRecord, RecordEntry};

/// What recording a finished workout produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordOutcome {
    pub workout: CompletedWorkout,

    /// One entry per exercise with qualifying sets, in workout order
    pub updates: Vec<RecordUpdate>,
}

impl RecordOutcome {
    /// Records that were created or beaten by this workout.
    pub fn improved(&self) -> impl Iterator<Item = &PersonalRecord> {
        self.updates
            .iter()
            .filter(|update| update.improved)
            .map(|update| &update.record)
    }
}

/// Result of folding one workout into an exercise's record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordUpdate {
    pub record: PersonalRecord,

    /// True when the workout set a new best 1RM or volume, or created the
    /// record
    pub improved: bool,
}

/// Estimated one-rep max using the Epley formula.
///
/// # Examples
///
/// ```rust
/// use pacer_core::records::one_rep_max;
///
/// assert_eq!(one_rep_max(100.0, 1), 100.0);
/// assert_eq!(one_rep_max(100.0, 10), 133.0);
/// ```
pub fn one_rep_max(weight: f64, reps: u32) -> f64 {
    match reps {
        0 => 0.0,
        1 => weight,
        reps => (weight * (1.0 + f64::from(reps) / 30.0)).round(),
    }
}

fn weighted_reps(set: &LoggedSet) -> Option<(f64, u32)> {
    match (set.weight, set.reps) {
        (Some(weight), Some(reps)) if weight > 0.0 && reps > 0 => Some((weight, reps)),
        _ => None,
    }
}

/// Best 1RM and total volume across the sets of one workout.
pub fn workout_best(sets: &[LoggedSet]) -> (f64, f64) {
    sets.iter()
        .filter_map(weighted_reps)
        .fold((0.0, 0.0), |(best, volume), (weight, reps)| {
            (
                best.max(one_rep_max(weight, reps)),
                volume + weight * f64::from(reps),
            )
        })
}

/// Merges entries that name the same exercise, case-insensitively.
///
/// A workout can log one movement under several exercise ids (the same lift
/// in two blocks); a record takes one combined entry per workout. The first
/// entry's id and spelling win, and order of first appearance is kept.
pub fn group_by_name(exercises: &[CompletedExercise]) -> Vec<CompletedExercise> {
    let mut grouped: Vec<CompletedExercise> = Vec::new();
    for exercise in exercises {
        match grouped
            .iter_mut()
            .find(|entry| entry.name.eq_ignore_ascii_case(&exercise.name))
        {
            Some(entry) => entry.sets.extend(exercise.sets.iter().cloned()),
            None => grouped.push(exercise.clone()),
        }
    }
    grouped
}

/// Folds a completed exercise into its existing record, if any.
///
/// Returns `None` when the exercise logged no weighted rep sets.
pub fn update_personal_record(
    existing: Option<&PersonalRecord>,
    exercise: &CompletedExercise,
    date: Timestamp,
) -> Option<RecordUpdate> {
    let (best, volume) = workout_best(&exercise.sets);
    if best == 0.0 && volume == 0.0 {
        return None;
    }

    let entry = RecordEntry {
        date,
        one_rep_max: best,
        volume,
    };

    let update = match existing {
        Some(record) => {
            let improved = best > record.one_rep_max || volume > record.max_volume;
            let mut record = record.clone();
            record.one_rep_max = record.one_rep_max.max(best);
            record.max_volume = record.max_volume.max(volume);
            record.last_updated = date;
            record.history.push(entry);
            RecordUpdate { record, improved }
        }
        None => RecordUpdate {
            record: PersonalRecord {
                id: 0,
                exercise_name: exercise.name.clone(),
                one_rep_max: best,
                max_volume: volume,
                last_updated: date,
                history: vec![entry],
            },
            improved: true,
        },
    };

    Some(update)
}
