//! Error types raised by registry operations.
//!
//! Admission failures are not errors; they are reported as a
//! [`Rejection`](crate::reservation::Rejection) instead.

/// Top-level error for room registry operations and lookups.
#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("duplicate room")]
    Duplicate(#[from] DuplicateError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),
}

/// Malformed input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Room name is empty or only whitespace.
    #[error("room name must not be empty")]
    EmptyName,

    /// Capacity is zero, negative, or out of range.
    #[error("capacity must be a positive integer, got {0}")]
    NonPositiveCapacity(i64),

    /// Time-of-day string is not `HH:MM`.
    #[error("invalid time of day {0:?}, expected HH:MM")]
    InvalidTime(String),
}

/// A room with this name already exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("room {name:?} already exists")]
pub struct DuplicateError {
    pub name: String,
}

/// The requested item does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {key:?} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub key: String,
}
