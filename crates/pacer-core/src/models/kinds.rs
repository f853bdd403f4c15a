//! Enumerations for exercise, block, difficulty and target kinds.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Movement category of an exercise.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum ExerciseKind {
    /// Loaded or bodyweight resistance work
    #[default]
    Strength,

    /// Conditioning work
    Cardio,

    /// Range-of-motion work
    Mobility,

    /// Jumps and other explosive work
    Plyometric,
}

impl FromStr for ExerciseKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(ExerciseKind::Strength),
            "cardio" => Ok(ExerciseKind::Cardio),
            "mobility" => Ok(ExerciseKind::Mobility),
            "plyometric" => Ok(ExerciseKind::Plyometric),
            _ => Err(format!("Invalid exercise type: {s}")),
        }
    }
}

impl ExerciseKind {
    /// Lowercase name as used in session files.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseKind::Strength => "strength",
            ExerciseKind::Cardio => "cardio",
            ExerciseKind::Mobility => "mobility",
            ExerciseKind::Plyometric => "plyometric",
        }
    }
}

/// Block type, which decides how a block expands into steps.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Warmup,
    Circuit,
    Superset,
    #[default]
    Strength,
    Cooldown,
}

impl FromStr for BlockKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warmup" => Ok(BlockKind::Warmup),
            "circuit" => Ok(BlockKind::Circuit),
            "superset" => Ok(BlockKind::Superset),
            "strength" => Ok(BlockKind::Strength),
            "cooldown" => Ok(BlockKind::Cooldown),
            _ => Err(format!("Invalid block type: {s}")),
        }
    }
}

impl BlockKind {
    /// Lowercase name as used in session files.
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Warmup => "warmup",
            BlockKind::Circuit => "circuit",
            BlockKind::Superset => "superset",
            BlockKind::Strength => "strength",
            BlockKind::Cooldown => "cooldown",
        }
    }

    /// Circuit-like blocks run every exercise once per round.
    ///
    /// Every other block type runs one exercise through all of its sets
    /// before moving on to the next.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pacer_core::models::BlockKind;
    ///
    /// assert!(BlockKind::Superset.is_circuit_like());
    /// assert!(!BlockKind::Warmup.is_circuit_like());
    /// ```
    pub fn is_circuit_like(&self) -> bool {
        matches!(self, BlockKind::Circuit | BlockKind::Superset)
    }
}

/// Declared difficulty of a session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Elite,
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "elite" => Ok(Difficulty::Elite),
            _ => Err(format!("Invalid difficulty: {s}")),
        }
    }
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Elite => "elite",
        }
    }
}

/// Whether a work step is counted in repetitions or in seconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Reps,
    Time,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetKind::Reps => "reps",
            TargetKind::Time => "time",
        }
    }
}
