//! Parameter structures for Pacer operations
//!
//! Shared between the CLI and the MCP server without framework-specific
//! derives. Interface layers wrap these in their own types (clap `Args`,
//! transparent serde wrappers with `JsonSchema`) and convert with `.into()`:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! JSON schema generation is only compiled in with the `schema` feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for show_workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for compiling a session file into its step queue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CompileSession {
    /// Path to a workout session JSON file
    pub path: String,
}

/// Parameters for listing completed workouts, newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListHistory {
    /// Maximum number of workouts to return (all when omitted)
    #[serde(default)]
    pub limit: Option<u32>,
}

/// Parameters for looking up the personal record of one exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowRecord {
    /// Exercise name, matched case-insensitively
    pub exercise: String,
}
