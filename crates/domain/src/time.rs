//! Calendar dates, times of day, and half-open time ranges.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Calendar date of a reservation, `YYYY-MM-DD` on the wire.
pub type Date = NaiveDate;

/// Return the current local calendar date.
#[must_use]
pub fn today() -> Date {
    Local::now().date_naive()
}

/// Time of day at minute precision, written as zero-padded `HH:MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Build from hour and minute; `None` unless `hour < 24` and `minute < 60`.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self {
                minutes: hour as u16 * 60 + minute as u16,
            })
        } else {
            None
        }
    }

    /// Whole-hour constructor for compile-time constants.
    const fn at_hour(hour: u16) -> Self {
        Self { minutes: hour * 60 }
    }

    #[must_use]
    pub fn hour(self) -> u8 {
        // minutes < 24 * 60, so the quotient always fits
        u8::try_from(self.minutes / 60).unwrap_or(u8::MAX)
    }

    #[must_use]
    pub fn minute(self) -> u8 {
        u8::try_from(self.minutes % 60).unwrap_or(u8::MAX)
    }

    /// Minutes elapsed since midnight.
    #[must_use]
    pub fn minutes_since_midnight(self) -> u16 {
        self.minutes
    }
}

/// Earliest admissible start of a reservation.
pub const OPENING: TimeOfDay = TimeOfDay::at_hour(8);

/// Latest admissible end of a reservation.
pub const CLOSING: TimeOfDay = TimeOfDay::at_hour(18);

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidTime(s.to_string());
        if s.len() != 5 {
            return Err(invalid());
        }
        let time = NaiveTime::parse_from_str(s, "%H:%M").map_err(|_| invalid())?;
        let hour = u8::try_from(time.hour()).map_err(|_| invalid())?;
        let minute = u8::try_from(time.minute()).map_err(|_| invalid())?;
        Self::new(hour, minute).ok_or_else(invalid)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

/// Half-open interval `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl TimeRange {
    #[must_use]
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// True when `start >= end`, i.e. the range holds no instant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True when the whole range lies inside `[open, close]`.
    #[must_use]
    pub fn is_within(&self, open: TimeOfDay, close: TimeOfDay) -> bool {
        self.start >= open && self.end <= close
    }

    /// Two non-empty ranges overlap when they share at least one instant.
    /// Touching ranges (`a.end == b.start`) do not overlap.
    #[must_use]
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
