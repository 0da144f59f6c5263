//! Error types for freetime-engine operations.

use chrono::{NaiveTime, Weekday};
use thiserror::Error;

/// Input-validation failures. The computation itself cannot fail once the input
/// has been accepted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Overlap analysis needs at least two people.
    #[error("At least 2 participant schedules are required, got {0}")]
    InsufficientParticipants(usize),

    /// A schedule entry whose start is not strictly before its end.
    #[error("Invalid interval for '{participant}' on {day}: {start} is not before {end}")]
    InvalidInterval {
        participant: String,
        day: Weekday,
        start: NaiveTime,
        end: NaiveTime,
    },

    #[error("Invalid day bounds: {start} is not before {end}")]
    InvalidDayBounds { start: NaiveTime, end: NaiveTime },

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Duplicate participant: {0}")]
    DuplicateParticipant(String),

    #[error("Unknown participant: {0}")]
    UnknownParticipant(String),

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid day of week: {0}")]
    InvalidDay(String),
}

pub type Result<T> = std::result::Result<T, MatchError>;
