//! Declarative workout description: sessions, blocks and exercises.
//!
//! These types are the input to the queue compiler. They deserialize from the
//! camelCase JSON produced by plan generators, fill in the same defaults the
//! generators rely on (`sets = 3`, `restSeconds = 60`, `rounds = 1`) and are
//! never mutated once a session starts.

use std::path::Path;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{BlockKind, Difficulty, ExerciseKind};
use crate::error::{PacerError, Result};

fn default_sets() -> u32 {
    3
}

fn default_rest_seconds() -> u32 {
    60
}

fn default_rounds() -> u32 {
    1
}

/// One movement definition within a block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    /// Identifier, filled in from the block position when missing
    #[serde(default)]
    pub id: String,

    /// Display name of the movement
    pub name: String,

    /// Movement category
    #[serde(rename = "type", default)]
    pub kind: ExerciseKind,

    /// Free-form coaching notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Number of sets (strength-like blocks only)
    #[serde(default = "default_sets")]
    pub sets: u32,

    /// Repetitions per set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,

    /// Work duration for timed moves; wins over `reps` when non-zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<u32>,

    /// Rest after each set or station
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,

    /// Tempo annotation such as "3-0-1-0"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,

    /// External load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Exercise {
    /// Creates a rep-based exercise with the default set and rest counts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            kind: ExerciseKind::default(),
            notes: None,
            sets: default_sets(),
            reps: None,
            duration_seconds: None,
            rest_seconds: default_rest_seconds(),
            tempo: None,
            weight: None,
        }
    }

    /// True when the exercise is performed against a clock.
    pub fn is_timed(&self) -> bool {
        self.duration_seconds.is_some_and(|d| d > 0)
    }
}

/// An ordered group of exercises sharing an expansion strategy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WorkoutBlock {
    /// Identifier, filled in from the session position when missing
    #[serde(default)]
    pub id: String,

    /// Block type
    #[serde(rename = "type")]
    pub kind: BlockKind,

    /// Exercises in block order
    #[serde(default)]
    pub exercises: Vec<Exercise>,

    /// Round count, only meaningful for circuit-like blocks
    #[serde(default = "default_rounds")]
    pub rounds: u32,
}

impl WorkoutBlock {
    /// Creates a block with a single round.
    pub fn new(kind: BlockKind, exercises: Vec<Exercise>) -> Self {
        Self {
            id: String::new(),
            kind,
            exercises,
            rounds: default_rounds(),
        }
    }
}

/// The unit of input to the compiler: ordered blocks plus metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    #[serde(default)]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Estimated total duration in minutes
    #[serde(default)]
    pub total_duration_min: u32,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default)]
    pub blocks: Vec<WorkoutBlock>,
}

impl WorkoutSession {
    /// Parses a session from JSON, fills in missing identifiers and validates
    /// it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pacer_core::models::WorkoutSession;
    ///
    /// let session = WorkoutSession::from_json(
    ///     r#"{
    ///         "title": "Leg day",
    ///         "blocks": [
    ///             { "type": "strength", "exercises": [{ "name": "Squat", "reps": 5 }] }
    ///         ]
    ///     }"#,
    /// )?;
    ///
    /// let squat = &session.blocks[0].exercises[0];
    /// assert_eq!(squat.sets, 3);
    /// assert_eq!(squat.rest_seconds, 60);
    /// assert_eq!(squat.id, "block-1-ex-1");
    /// # Ok::<(), pacer_core::PacerError>(())
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let mut session: WorkoutSession = serde_json::from_str(json)?;
        session.fill_missing_ids();
        session.validate()?;
        Ok(session)
    }

    /// Reads and parses a session file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| PacerError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&json)
    }

    /// Assigns positional identifiers to blocks and exercises that have none.
    pub fn fill_missing_ids(&mut self) {
        if self.id.trim().is_empty() {
            self.id = slug(&self.title);
        }
        for (b, block) in self.blocks.iter_mut().enumerate() {
            if block.id.trim().is_empty() {
                block.id = format!("block-{}", b + 1);
            }
            for (e, exercise) in block.exercises.iter_mut().enumerate() {
                if exercise.id.trim().is_empty() {
                    exercise.id = format!("{}-ex-{}", block.id, e + 1);
                }
            }
        }
    }

    /// Checks the fields a player cannot work without.
    ///
    /// Zero sets and zero rounds are accepted; they simply compile to no
    /// steps.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PacerError::invalid_input("title").with_reason("must not be empty"));
        }

        for (b, block) in self.blocks.iter().enumerate() {
            for (e, exercise) in block.exercises.iter().enumerate() {
                let field = |name: &str| format!("blocks[{b}].exercises[{e}].{name}");

                if exercise.name.trim().is_empty() {
                    return Err(PacerError::invalid_input(field("name"))
                        .with_reason("must not be empty"));
                }

                if let Some(weight) = exercise.weight {
                    if !weight.is_finite() || weight < 0.0 {
                        return Err(PacerError::invalid_input(field("weight"))
                            .with_reason(format!("must be a non-negative number, got {weight}")));
                    }
                }
            }
        }

        Ok(())
    }

    /// Total number of exercises across all blocks.
    pub fn exercise_count(&self) -> usize {
        self.blocks.iter().map(|b| b.exercises.len()).sum()
    }
}

fn slug(title: &str) -> String {
    let slug = title
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-");

    if slug.is_empty() {
        "session".to_string()
    } else {
        slug
    }
}
