//! Error types for the matchcal ecosystem.

use thiserror::Error;

/// Errors that can occur in matchcal operations.
#[derive(Error, Debug)]
pub enum MatchCalError {
    #[error("Match has no scheduled date")]
    MissingDate,

    #[error("Match has no scheduled time")]
    MissingTime,

    #[error("Match time is not determined yet")]
    TimeUndetermined,

    #[error("Unknown month name: {0}")]
    UnknownMonth(String),

    #[error("Invalid date/time: {0}")]
    InvalidMoment(String),
}

/// Result type alias for matchcal operations.
pub type MatchCalResult<T> = Result<T, MatchCalError>;
