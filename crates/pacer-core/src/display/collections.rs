//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper formats its items with the item's own `Display` and prints a
//! fixed message when the collection is empty.

use std::fmt;

use crate::models::{CompletedWorkout, PersonalRecord, SessionStep};

/// Newtype wrapper for displaying a compiled step queue as a numbered list.
///
/// # Examples
///
/// ```rust
/// use pacer_core::{
///     display::Queue,
///     models::{BlockKind, Exercise, WorkoutBlock, WorkoutSession},
///     queue::compile,
/// };
///
/// let mut plank = Exercise::new("Plank");
/// plank.sets = 1;
/// plank.duration_seconds = Some(45);
///
/// let session = WorkoutSession {
///     id: "core".to_string(),
///     title: "Core".to_string(),
///     description: String::new(),
///     total_duration_min: 1,
///     difficulty: Default::default(),
///     blocks: vec![WorkoutBlock::new(BlockKind::Strength, vec![plank])],
/// };
///
/// let output = Queue(compile(&session)).to_string();
/// assert!(output.contains("1. **Plank** Set 1/1: 0:45"));
/// ```
pub struct Queue(pub Vec<SessionStep>);

impl Queue {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SessionStep> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a SessionStep;
    type IntoIter = std::slice::Iter<'a, SessionStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No steps to play.");
        }

        let work = self.0.iter().filter(|s| !s.is_rest()).count();
        let rest_seconds: u32 = self
            .0
            .iter()
            .filter(|s| s.is_rest())
            .map(SessionStep::initial_countdown)
            .sum();

        writeln!(
            f,
            "{} steps: {work} work, {} rest ({}s)",
            self.0.len(),
            self.0.len() - work,
            rest_seconds
        )?;
        writeln!(f)?;

        for (index, step) in self.0.iter().enumerate() {
            writeln!(f, "{}. {step}", index + 1)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the workout history.
pub struct Workouts(pub Vec<CompletedWorkout>);

impl Workouts {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Workouts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No workouts recorded.")
        } else {
            for workout in &self.0 {
                write!(f, "{workout}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying personal records.
pub struct Records(pub Vec<PersonalRecord>);

impl Records {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Records {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No personal records yet.")
        } else {
            for record in &self.0 {
                write!(f, "{record}")?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_collections() {
        assert_eq!(Queue(vec![]).to_string(), "No steps to play.\n");
        assert_eq!(Workouts(vec![]).to_string(), "No workouts recorded.\n");
        assert_eq!(Records(vec![]).to_string(), "No personal records yet.\n");
    }
}
