//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::records::RecordOutcome;

/// Wrapper type for displaying the result of recording a workout.
///
/// Shows the stored workout's ID, the session summary and any personal
/// records the workout set.
pub struct RecordResult {
    pub outcome: RecordOutcome,
}

impl RecordResult {
    /// Create a new RecordResult wrapper.
    pub fn new(outcome: RecordOutcome) -> Self {
        Self { outcome }
    }
}

impl fmt::Display for RecordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let workout = &self.outcome.workout;
        writeln!(f, "Recorded workout with ID: {}", workout.id)?;
        writeln!(f)?;
        write!(f, "{}", workout.summary)?;

        let improved: Vec<_> = self.outcome.improved().collect();
        if !improved.is_empty() {
            writeln!(f)?;
            writeln!(f, "### New personal records")?;
            writeln!(f)?;
            for record in improved {
                writeln!(
                    f,
                    "- {}: 1RM {}, volume {}",
                    record.exercise_name, record.one_rep_max, record.max_volume
                )?;
            }
        }

        Ok(())
    }
}
