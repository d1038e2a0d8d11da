//! Reservation — an admitted booking of one room for one time range on one date.

use serde::{Deserialize, Serialize};

use crate::id::{ReservationId, RoomId};
use crate::time::{Date, TimeOfDay, TimeRange};

/// An admitted booking. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: ReservationId,
    pub room_id: RoomId,
    pub date: Date,
    pub range: TimeRange,
    pub attendee_count: u32,
}

/// Everything the admission pipeline needs to decide on a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Name of the room to book.
    pub room: String,
    pub date: Date,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub attendee_count: u32,
}

impl BookingRequest {
    #[must_use]
    pub fn range(&self) -> TimeRange {
        TimeRange::new(self.start, self.end)
    }
}

/// Why a booking was not admitted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("room {0:?} does not exist")]
    UnknownRoom(String),

    #[error("date {0} is in the past")]
    PastDate(Date),

    #[error("a reservation needs at least one attendee")]
    NoAttendees,

    #[error("{requested} attendees exceed the room capacity of {capacity}")]
    CapacityExceeded { requested: u32, capacity: u32 },

    #[error("start {start} must be before end {end}")]
    EmptyRange { start: TimeOfDay, end: TimeOfDay },

    #[error("{0} is outside operating hours 08:00-18:00")]
    OutsideOperatingHours(TimeRange),

    #[error("overlaps existing reservation {conflicting}")]
    Overlap { conflicting: ReservationId },
}

impl Rejection {
    /// Stable machine-readable code for this rejection.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownRoom(_) => "unknown_room",
            Self::PastDate(_) => "past_date",
            Self::NoAttendees => "no_attendees",
            Self::CapacityExceeded { .. } => "capacity_exceeded",
            Self::EmptyRange { .. } => "empty_range",
            Self::OutsideOperatingHours(_) => "outside_operating_hours",
            Self::Overlap { .. } => "overlap",
        }
    }
}
