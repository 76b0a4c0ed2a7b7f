//! Error types for plancal.

use thiserror::Error;

/// Errors that can occur in plancal operations.
///
/// Malformed date/time strings on events are not errors: the overlap engine
/// turns them into [`Instant::Invalid`](crate::datetime::Instant::Invalid).
#[derive(Error, Debug)]
pub enum PlanCalError {
    #[error("Repeat interval must be a positive integer, got {0}")]
    InvalidInterval(i64),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Recurring event '{0}' has no end date and no expansion horizon was given")]
    MissingHorizon(String),

    #[error("Recurring event '{0}' expands to more than {1} occurrences")]
    TooManyOccurrences(String, u16),

    #[error("Failed to expand recurrence: {0}")]
    Recurrence(String),

    #[error("Recurring series not found: {0}")]
    SeriesNotFound(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for plancal operations.
pub type PlanCalResult<T> = Result<T, PlanCalError>;
