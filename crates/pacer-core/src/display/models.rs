//! Display implementations for domain models.
//!
//! Kept apart from the model definitions. Every implementation writes
//! markdown for the terminal renderer and the MCP server.

use std::fmt;

use super::datetime::{Clock, LocalDateTime};
use crate::{
    models::{
        BlockKind, CompletedWorkout, Difficulty, Exercise, ExerciseKind, NextUp, NextUpKind,
        PersonalRecord, RestStep, SessionStep, Target, TargetKind, WorkStep, WorkoutSession,
        WorkoutSummary,
    },
    player::SessionStatus,
};

impl fmt::Display for ExerciseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TargetKind::Reps => write!(f, "{} reps", self.value)?,
            TargetKind::Time => write!(f, "{}", Clock(self.value))?,
        }
        if let Some(weight) = self.weight {
            write!(f, " @ {weight}")?;
        }
        Ok(())
    }
}

impl fmt::Display for NextUp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NextUpKind::Reps => write!(f, "{} ({} reps)", self.name, self.value),
            NextUpKind::Time => write!(f, "{} ({})", self.name, Clock(self.value)),
            NextUpKind::End => write!(f, "{}", self.name),
        }
    }
}

impl fmt::Display for WorkStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "**{}** {} {}/{}: {}",
            self.exercise.name,
            self.set_label(),
            self.set_number,
            self.total_sets,
            self.target
        )?;
        if let Some(tempo) = &self.exercise.tempo {
            write!(f, ", tempo {tempo}")?;
        }
        Ok(())
    }
}

impl fmt::Display for RestStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rest {}", Clock(self.duration))
    }
}

impl fmt::Display for SessionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStep::Work(step) => write!(f, "{step}")?,
            SessionStep::Rest(step) => write!(f, "{step}")?,
        }
        if let Some(next_up) = self.next_up() {
            write!(f, " (next: {next_up})")?;
        }
        Ok(())
    }
}

impl Exercise {
    fn fmt_line(&self, f: &mut fmt::Formatter<'_>, circuit: bool) -> fmt::Result {
        write!(f, "- {}", self.name)?;

        let target = Target::for_exercise(self);
        if circuit {
            write!(f, ": {target}")?;
        } else {
            write!(f, ": {} x {target}", self.sets)?;
        }

        if self.rest_seconds > 0 {
            write!(f, ", rest {}", Clock(self.rest_seconds))?;
        }
        writeln!(f)?;

        if let Some(notes) = &self.notes {
            writeln!(f, "  - {notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for WorkoutSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        writeln!(f, "- Difficulty: {}", self.difficulty)?;
        if self.total_duration_min > 0 {
            writeln!(f, "- Duration: {} min", self.total_duration_min)?;
        }
        writeln!(f, "- Exercises: {}", self.exercise_count())?;

        if !self.description.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.description)?;
        }

        if self.blocks.is_empty() {
            writeln!(f, "\nNo blocks in this session.")?;
            return Ok(());
        }

        for block in &self.blocks {
            writeln!(f)?;
            if block.kind.is_circuit_like() {
                writeln!(f, "## {} x {} rounds", block.kind, block.rounds)?;
            } else {
                writeln!(f, "## {}", block.kind)?;
            }
            writeln!(f)?;
            for exercise in &block.exercises {
                exercise.fmt_line(f, block.kind.is_circuit_like())?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Completed: {}", LocalDateTime(&self.completed_at))?;
        writeln!(f, "- Duration: {}", Clock::from_secs(self.duration_seconds))?;
        writeln!(
            f,
            "- Work: {} exercises, {} sets",
            self.exercises_completed(),
            self.sets_completed()
        )?;
        writeln!(f, "- Calories: ~{}", self.estimated_calories)?;

        if !self.exercises.is_empty() {
            writeln!(f)?;
            for exercise in &self.exercises {
                let sets: Vec<String> = exercise
                    .sets
                    .iter()
                    .map(|set| match (set.reps, set.duration_seconds, set.weight) {
                        (Some(reps), _, Some(weight)) => format!("{reps} @ {weight}"),
                        (Some(reps), _, None) => reps.to_string(),
                        (None, Some(seconds), _) => Clock(seconds).to_string(),
                        (None, None, _) => "done".to_string(),
                    })
                    .collect();
                writeln!(f, "- {}: {}", exercise.name, sets.join(", "))?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for CompletedWorkout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = &self.summary;
        writeln!(f, "## {} (ID: {})", summary.title, self.id)?;
        writeln!(f)?;
        writeln!(f, "- **Completed**: {}", LocalDateTime(&summary.completed_at))?;
        writeln!(
            f,
            "- **Duration**: {}",
            Clock::from_secs(summary.duration_seconds)
        )?;
        writeln!(
            f,
            "- **Sets**: {} across {} exercises",
            summary.sets_completed(),
            summary.exercises_completed()
        )?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for PersonalRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.exercise_name)?;
        writeln!(f)?;
        writeln!(f, "- **Estimated 1RM**: {}", self.one_rep_max)?;
        writeln!(f, "- **Best volume**: {}", self.max_volume)?;
        writeln!(f, "- **Updated**: {}", LocalDateTime(&self.last_updated))?;

        if self.history.len() > 1 {
            writeln!(f)?;
            writeln!(f, "| Date | 1RM | Volume |")?;
            writeln!(f, "|---|---|---|")?;
            for entry in self.history.iter().rev() {
                writeln!(
                    f,
                    "| {} | {} | {} |",
                    LocalDateTime(&entry.date),
                    entry.one_rep_max,
                    entry.volume
                )?;
            }
        }

        writeln!(f)?;
        Ok(())
    }
}
