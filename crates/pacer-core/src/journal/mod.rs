//! Async workout journal.
//!
//! The [`Journal`] stores finished workouts and the personal records they
//! produce. Each operation opens its own SQLite connection on a blocking
//! thread, so a `Journal` is cheap to clone and share between the CLI and
//! the MCP server:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │ (display-ready  │───▶│ (spawn_blocking │───▶│   (via db/)     │
//! │  wrappers)      │    │  per call)      │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Creates [`Journal`] instances, resolving the default path
//! - [`ops`]: Operations returning models
//! - [`handlers`]: Operations returning [`crate::display`] wrappers
//!
//! ```rust,no_run
//! use pacer_core::{params::ListHistory, JournalBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let journal = JournalBuilder::new()
//!     .with_database_path(Some("/tmp/pacer.db"))
//!     .build()
//!     .await?;
//!
//! let history = journal.list_workouts(&ListHistory { limit: Some(5) }).await?;
//! for workout in &history {
//!     println!("{}", workout.summary.title);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

pub mod builder;
pub mod handlers;
pub mod ops;

#[cfg(test)]
mod tests;

pub use builder::JournalBuilder;

/// Handle to the workout journal database.
#[derive(Debug, Clone)]
pub struct Journal {
    pub(crate) db_path: PathBuf,
}

impl Journal {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Location of the journal database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }
}
