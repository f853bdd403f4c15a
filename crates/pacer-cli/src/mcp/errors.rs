//! Error handling utilities for MCP server

use pacer_core::PacerError;
use rmcp::ErrorData;

/// Helper to convert journal errors to MCP errors
///
/// Errors caused by the caller's arguments become `invalid_params`; the rest
/// are reported as internal errors.
pub fn to_mcp_error(message: &str, error: &PacerError) -> ErrorData {
    let message = format!("{message}: {error}");
    match error {
        PacerError::WorkoutNotFound { .. }
        | PacerError::InvalidInput { .. }
        | PacerError::EmptySession { .. }
        | PacerError::Serialization { .. }
        | PacerError::FileSystem { .. } => ErrorData::invalid_params(message, None),
        _ => ErrorData::internal_error(message, None),
    }
}
