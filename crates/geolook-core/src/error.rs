//! Centralized error types for the geolook application.
//!
//! Stage errors stay typed in `geolook-services`; this module aggregates
//! them into one application error with UI-ready messages.

use thiserror::Error;

use geolook_services::types::{LookupError, PositionError};

/// Top-level application error type.
///
/// Use `user_message()` to get a message suitable for a notification.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Position error: {0}")]
    Position(#[from] PositionError),

    #[error("Lookup error: {0}")]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Position(e) => e.user_message(),
            AppError::Lookup(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_error_converts() {
        let app_err: AppError = PositionError::PermissionDenied.into();
        assert!(matches!(
            app_err,
            AppError::Position(PositionError::PermissionDenied)
        ));
    }

    #[test]
    fn user_message_propagates() {
        let app_err = AppError::Lookup(LookupError::MissingCoordinates);
        assert_eq!(app_err.user_message(), "Get the current position first.");
    }

    #[test]
    fn user_messages_are_non_empty() {
        let errors = [
            AppError::Position(PositionError::SensorUnavailable("timeout".into())),
            AppError::Lookup(LookupError::NoMatch),
            AppError::Other(anyhow::anyhow!("boom")),
        ];

        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
