//! Status and confirmation message types for operation feedback.

use std::fmt;

use crate::player::PlayerEvent;

/// Wrapper type for displaying operation confirmation messages.
pub struct OperationStatus {
    pub message: String,
    pub success: bool,
}

impl OperationStatus {
    /// Create a new success status.
    pub fn success(message: String) -> Self {
        Self {
            message,
            success: true,
        }
    }

    /// Create a new failure status.
    pub fn failure(message: String) -> Self {
        Self {
            message,
            success: false,
        }
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {}",
            if self.success { "Success:" } else { "Error:" },
            self.message
        )
    }
}

impl From<PlayerEvent> for OperationStatus {
    fn from(event: PlayerEvent) -> Self {
        match event {
            PlayerEvent::Started { steps } => {
                Self::success(format!("Started session with {steps} steps"))
            }
            PlayerEvent::Ticked { remaining } => Self::success(format!("{remaining}s remaining")),
            PlayerEvent::Advanced { index } => {
                Self::success(format!("Moved to step {}", index + 1))
            }
            PlayerEvent::Completed => Self::success("Session complete".to_string()),
            PlayerEvent::Paused => Self::success("Paused".to_string()),
            PlayerEvent::Resumed => Self::success("Resumed".to_string()),
            PlayerEvent::Aborted => {
                Self::success("Session aborted, nothing recorded".to_string())
            }
            PlayerEvent::Ignored => {
                Self::failure("Nothing to do in the current state".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_status_display() {
        let success = OperationStatus::success("Workout recorded".to_string());
        assert!(format!("{success}").contains("Success:"));

        let failure = OperationStatus::failure("Workout not found".to_string());
        assert!(format!("{failure}").contains("Error:"));
    }

    #[test]
    fn test_player_event_status() {
        let status = OperationStatus::from(PlayerEvent::Advanced { index: 0 });
        assert_eq!(status.to_string(), "Success: Moved to step 1\n");

        let status = OperationStatus::from(PlayerEvent::Ignored);
        assert!(!status.success);
    }
}
