use thiserror::Error;

/// Errors reported when validating an event before it is stored or edited.
///
/// These are advisory: the layout and recurrence engines accept any event
/// and degrade malformed fields to defaults instead of failing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("Event anchor date is missing or invalid")]
    InvalidAnchorDate,
    #[error("Unrecognized time format: {0}")]
    UnrecognizedTime(String),
    #[error("End time must be after start time")]
    InvalidTimeRange,
}
