//! Error types for the pacer library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all pacer operations.
#[derive(Error, Debug)]
pub enum PacerError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Completed workout not found for the given ID
    #[error("Workout with ID {id} not found")]
    WorkoutNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The session compiled to a queue with nothing to play
    #[error("Session '{title}' has no steps to play")]
    EmptySession { title: String },
    /// A session is already running in the player
    #[error("A session is already in progress")]
    SessionInProgress,
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> PacerError {
        PacerError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PacerError {
        PacerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PacerError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Wraps a `spawn_blocking` join failure.
    pub(crate) fn join(error: tokio::task::JoinError) -> Self {
        PacerError::Configuration {
            message: format!("Task join error: {error}"),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| PacerError::database(message).with_source(e))
    }
}

/// Result type alias for pacer operations
pub type Result<T> = std::result::Result<T, PacerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder_message() {
        let error = PacerError::invalid_input("title").with_reason("must not be empty");
        assert_eq!(
            error.to_string(),
            "Invalid input for field 'title': must not be empty"
        );
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let error = result.db_context("Failed to load record").unwrap_err();
        assert!(matches!(error, PacerError::Database { .. }));
        assert_eq!(error.to_string(), "Database error: Failed to load record");
    }
}
