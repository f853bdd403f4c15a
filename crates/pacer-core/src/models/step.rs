//! Compiled queue steps and their look-ahead metadata.

use serde::{Deserialize, Serialize};

use super::{BlockKind, Exercise, TargetKind};

/// Nominal seconds per repetition, used for rep-based countdowns and
/// estimates.
pub const SECONDS_PER_REP: u32 = 3;

/// Resolved goal of a work step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Target {
    #[serde(rename = "type")]
    pub kind: TargetKind,

    /// Repetitions or seconds, depending on `kind`
    pub value: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Target {
    /// Resolves the target of an exercise.
    ///
    /// A positive `duration_seconds` makes the target time-based; otherwise
    /// it is rep-based with `reps` (or 0 when absent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pacer_core::models::{Exercise, Target, TargetKind};
    ///
    /// let mut plank = Exercise::new("Plank");
    /// plank.duration_seconds = Some(30);
    /// plank.reps = Some(10);
    /// assert_eq!(Target::for_exercise(&plank).kind, TargetKind::Time);
    ///
    /// plank.duration_seconds = Some(0);
    /// let target = Target::for_exercise(&plank);
    /// assert_eq!((target.kind, target.value), (TargetKind::Reps, 10));
    /// ```
    pub fn for_exercise(exercise: &Exercise) -> Self {
        match exercise.duration_seconds {
            Some(seconds) if seconds > 0 => Self {
                kind: TargetKind::Time,
                value: seconds,
                weight: exercise.weight,
            },
            _ => Self {
                kind: TargetKind::Reps,
                value: exercise.reps.unwrap_or(0),
                weight: exercise.weight,
            },
        }
    }

    /// Planned seconds of work for one set at this target.
    pub fn estimated_seconds(&self) -> u32 {
        match self.kind {
            TargetKind::Time => self.value,
            TargetKind::Reps => self.value.saturating_mul(SECONDS_PER_REP),
        }
    }
}

/// What a `NextUp` preview points at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NextUpKind {
    Reps,
    Time,
    /// No work remains
    End,
}

impl From<TargetKind> for NextUpKind {
    fn from(kind: TargetKind) -> Self {
        match kind {
            TargetKind::Reps => NextUpKind::Reps,
            TargetKind::Time => NextUpKind::Time,
        }
    }
}

/// Preview of the next work step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NextUp {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: NextUpKind,

    pub value: u32,
}

impl NextUp {
    /// Marker for a step with no work after it.
    pub fn finish() -> Self {
        Self::end("Finish")
    }

    /// Marker carried by the last step of a queue.
    pub fn complete() -> Self {
        Self::end("Complete")
    }

    fn end(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: NextUpKind::End,
            value: 0,
        }
    }

    /// True for the `Finish`/`Complete` markers.
    pub fn is_end(&self) -> bool {
        self.kind == NextUpKind::End
    }
}

impl From<&WorkStep> for NextUp {
    fn from(step: &WorkStep) -> Self {
        Self {
            name: step.exercise.name.clone(),
            kind: step.target.kind.into(),
            value: step.target.value,
        }
    }
}

/// One exercise set (or circuit round) to perform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkStep {
    pub id: String,
    pub exercise: Exercise,

    /// Type of the block the step was expanded from
    pub block: BlockKind,

    /// Set number, or round number for circuit-like blocks (1-based)
    pub set_number: u32,

    /// Set count, or round count for circuit-like blocks
    pub total_sets: u32,

    pub target: Target,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_up: Option<NextUp>,
}

impl WorkStep {
    /// "Round" for circuit-like blocks, "Set" otherwise.
    pub fn set_label(&self) -> &'static str {
        if self.block.is_circuit_like() {
            "Round"
        } else {
            "Set"
        }
    }
}

/// A timed recovery interval.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestStep {
    pub id: String,

    /// Seconds of rest
    pub duration: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_up: Option<NextUp>,
}

/// One unit of the compiled queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SessionStep {
    Work(WorkStep),
    Rest(RestStep),
}

impl SessionStep {
    pub fn id(&self) -> &str {
        match self {
            SessionStep::Work(step) => &step.id,
            SessionStep::Rest(step) => &step.id,
        }
    }

    pub fn next_up(&self) -> Option<&NextUp> {
        match self {
            SessionStep::Work(step) => step.next_up.as_ref(),
            SessionStep::Rest(step) => step.next_up.as_ref(),
        }
    }

    pub(crate) fn set_next_up(&mut self, next_up: NextUp) {
        match self {
            SessionStep::Work(step) => step.next_up = Some(next_up),
            SessionStep::Rest(step) => step.next_up = Some(next_up),
        }
    }

    pub fn as_work(&self) -> Option<&WorkStep> {
        match self {
            SessionStep::Work(step) => Some(step),
            SessionStep::Rest(_) => None,
        }
    }

    pub fn is_rest(&self) -> bool {
        matches!(self, SessionStep::Rest(_))
    }

    /// True when the step advances on its own once the countdown runs out.
    ///
    /// Rest steps and time-based work are timer driven; rep-based work waits
    /// for an explicit completion.
    pub fn is_timed(&self) -> bool {
        match self {
            SessionStep::Rest(_) => true,
            SessionStep::Work(step) => step.target.kind == TargetKind::Time,
        }
    }

    /// Countdown value the step starts with when it becomes current.
    ///
    /// Rep-based work gets a nominal estimate of [`SECONDS_PER_REP`] per
    /// repetition, which is shown but never decremented.
    pub fn initial_countdown(&self) -> u32 {
        match self {
            SessionStep::Rest(step) => step.duration,
            SessionStep::Work(step) => step.target.estimated_seconds(),
        }
    }
}
