//! Room — a bookable meeting room with a unique name and a capacity.

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, ValidationError};
use crate::id::RoomId;

/// A meeting room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
}

impl Room {
    /// Create a builder for constructing a [`Room`].
    #[must_use]
    pub fn builder() -> RoomBuilder {
        RoomBuilder::default()
    }
}

/// Partial change applied by a room update; `None` fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomUpdate {
    pub name: Option<String>,
    pub capacity: Option<i64>,
}

/// Check that a room name holds something other than whitespace.
///
/// # Errors
///
/// Returns [`ValidationError::EmptyName`] for empty or blank names.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Check that a requested capacity is a positive integer that fits a room.
///
/// # Errors
///
/// Returns [`ValidationError::NonPositiveCapacity`] for zero, negative, or
/// oversized values.
pub fn validate_capacity(capacity: i64) -> Result<u32, ValidationError> {
    match u32::try_from(capacity) {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(ValidationError::NonPositiveCapacity(capacity)),
    }
}

/// Step-by-step builder for [`Room`].
#[derive(Debug, Default)]
pub struct RoomBuilder {
    id: Option<RoomId>,
    name: Option<String>,
    capacity: Option<i64>,
}

impl RoomBuilder {
    #[must_use]
    pub fn id(mut self, id: RoomId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn capacity(mut self, capacity: i64) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Consume the builder, validate, and return a [`Room`].
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] if `name` is missing or blank,
    /// or if `capacity` is missing or not positive.
    pub fn build(self) -> Result<Room, BookingError> {
        let name = self.name.unwrap_or_default();
        validate_name(&name)?;
        let capacity = validate_capacity(self.capacity.unwrap_or_default())?;
        Ok(Room {
            id: self.id.unwrap_or_default(),
            name,
            capacity,
        })
    }
}
