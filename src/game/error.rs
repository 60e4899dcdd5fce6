//! Error types for board construction and random draws.

use std::fmt;

/// Errors raised by the core. Both variants signal a caller bug, never a
/// runtime condition of normal play (a full board is not an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// An argument is outside its accepted domain (zero grid size,
    /// non-unit direction vector).
    InvalidArgument {
        /// What went wrong.
        reason: String,
    },
    /// An operation was called in a state its contract forbids.
    PreconditionViolation {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::PreconditionViolation { reason } => {
                write!(f, "precondition violation: {reason}")
            }
        }
    }
}

impl std::error::Error for GameError {}
