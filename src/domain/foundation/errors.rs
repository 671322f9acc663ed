//! Error types for the domain layer.
//!
//! Validation failures are NOT errors here: malformed user input is a
//! normal, retryable condition expressed through the flow engine's
//! `ValidationResult`. `DomainError` covers misuse of the session
//! itself, such as writing to a completed transcript.

use std::fmt;

use thiserror::Error;

/// Errors raised by session state misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Transcript messages must carry visible text.
    #[error("Message text cannot be empty")]
    EmptyMessage,

    /// The session reached its terminal step; transcript and answers
    /// are frozen.
    #[error("Session is complete and can no longer be modified")]
    SessionComplete,
}

impl DomainError {
    /// Returns the stable code for this error, for logs and API bodies.
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::EmptyMessage => ErrorCode::EmptyMessage,
            DomainError::SessionComplete => ErrorCode::SessionComplete,
        }
    }
}

/// Stable error codes, decoupled from the display texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EmptyMessage,
    SessionComplete,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            ErrorCode::EmptyMessage => "EMPTY_MESSAGE",
            ErrorCode::SessionComplete => "SESSION_COMPLETE",
        };
        write!(f, "{}", code)
    }
}
