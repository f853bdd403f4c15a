//! Builder for creating and configuring Journal instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Journal;
use crate::{
    db::Database,
    error::{PacerError, Result},
};

/// Builder for creating and configuring Journal instances.
#[derive(Debug, Clone, Default)]
pub struct JournalBuilder {
    database_path: Option<PathBuf>,
}

impl JournalBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/pacer/pacer.db` or `~/.local/share/pacer/pacer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the journal, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `PacerError::XdgDirectory` if no default path can be resolved
    /// Returns `PacerError::FileSystem` if the parent directory can't be created
    /// Returns `PacerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Journal> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| PacerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening journal at {}", db_path.display());

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || Database::new(&db_path_clone).map(|_| ()))
            .await
            .map_err(PacerError::join)??;

        Ok(Journal::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("pacer")
            .place_data_file("pacer.db")
            .map_err(|e| PacerError::XdgDirectory(e.to_string()))
    }
}
