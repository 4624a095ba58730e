//! Error taxonomy for the scoreboard
//!
//! Three error kinds using thiserror; every fallible registry operation
//! returns exactly one of these.

use thiserror::Error;

/// Scoreboard error
///
/// A call that returns an error has changed nothing: the registry is never
/// left in an inconsistent state by a failed operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreBoardError {
    /// Malformed input: blank team name, identical normalized team names,
    /// or a negative score.
    #[error("invalid argument: {message}")]
    InvalidArgument { message: String },

    /// A match for the ordered (home, away) pair is already active.
    #[error("match between {home} and {away} already exists")]
    AlreadyExists { home: String, away: String },

    /// No active match for the ordered (home, away) pair.
    #[error("no active match between {home} and {away}")]
    NotFound { home: String, away: String },
}

impl ScoreBoardError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}
