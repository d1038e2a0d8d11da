//! Booking engine — room registry, booking admission, and read queries.
//!
//! The engine owns every room and reservation in memory. Registry mutations
//! report malformed input through [`BookingError`]; admission reports refused
//! bookings through [`Rejection`]. A failed call never leaves partial state.

use roombook_domain::error::{BookingError, DuplicateError, NotFoundError};
use roombook_domain::id::{ReservationId, RoomId};
use roombook_domain::reservation::{BookingRequest, Rejection, Reservation};
use roombook_domain::room::{Room, RoomUpdate, validate_capacity, validate_name};
use roombook_domain::time::{CLOSING, Date, OPENING, TimeRange};

use crate::ports::{Clock, SystemClock};

/// In-memory registry of rooms and their reservations.
#[derive(Debug)]
pub struct BookingEngine<C = SystemClock> {
    clock: C,
    rooms: Vec<Room>,
    reservations: Vec<Reservation>,
}

impl Default for BookingEngine<SystemClock> {
    fn default() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl BookingEngine<SystemClock> {
    /// Create an empty engine reading the local wall-clock date.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> BookingEngine<C> {
    /// Create an empty engine with the given clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            rooms: Vec::new(),
            reservations: Vec::new(),
        }
    }

    // ── Room registry ────────────────────────────────────────────

    /// Register a new room.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] if `name` is blank or `capacity`
    /// is not positive, and [`BookingError::Duplicate`] if a room with the
    /// same name exists.
    pub fn add_room(&mut self, name: impl Into<String>, capacity: i64) -> Result<Room, BookingError> {
        let name = name.into();
        validate_name(&name)?;
        if self.find_room(&name).is_some() {
            return Err(DuplicateError { name }.into());
        }
        let room = Room::builder().name(name).capacity(capacity).build()?;
        self.rooms.push(room.clone());
        Ok(room)
    }

    /// Look up a room by exact name.
    #[must_use]
    pub fn find_room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|room| room.name == name)
    }

    /// All rooms, in registration order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// Name of the room with the given id, if it still exists.
    #[must_use]
    pub fn room_name(&self, id: RoomId) -> Option<&str> {
        self.rooms
            .iter()
            .find(|room| room.id == id)
            .map(|room| room.name.as_str())
    }

    /// Remove a room together with all of its reservations.
    /// Removing an unknown name does nothing.
    pub fn remove_room(&mut self, name: &str) {
        let Some(position) = self.rooms.iter().position(|room| room.name == name) else {
            return;
        };
        let removed = self.rooms.remove(position);
        self.reservations
            .retain(|reservation| reservation.room_id != removed.id);
    }

    /// Rename a room and/or change its capacity.
    ///
    /// Returns `Ok(false)` when the room does not exist or when the new name
    /// is already held by another room. Existing reservations are not
    /// re-checked against a reduced capacity.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::Validation`] if the new name is blank or the
    /// new capacity is not positive. Nothing is modified in that case.
    pub fn update_room(&mut self, name: &str, update: RoomUpdate) -> Result<bool, BookingError> {
        let Some(position) = self.rooms.iter().position(|room| room.name == name) else {
            return Ok(false);
        };

        if let Some(new_name) = &update.name {
            validate_name(new_name)?;
            let taken = self
                .rooms
                .iter()
                .enumerate()
                .any(|(index, room)| index != position && &room.name == new_name);
            if taken {
                return Ok(false);
            }
        }
        let capacity = update.capacity.map(validate_capacity).transpose()?;

        let room = &mut self.rooms[position];
        if let Some(new_name) = update.name {
            room.name = new_name;
        }
        if let Some(capacity) = capacity {
            room.capacity = capacity;
        }
        Ok(true)
    }

    // ── Admission ────────────────────────────────────────────────

    /// Admit a booking if every rule passes, checked in order: room exists,
    /// date not in the past, at least one attendee who fits the room, time
    /// range valid, no overlap.
    ///
    /// The past-date rule compares dates only, so a booking for earlier
    /// today is still admitted.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] encountered. The engine is unchanged
    /// on rejection.
    pub fn reserve(&mut self, request: BookingRequest) -> Result<Reservation, Rejection> {
        let room = self
            .find_room(&request.room)
            .ok_or_else(|| Rejection::UnknownRoom(request.room.clone()))?;

        if request.date < self.clock.today() {
            return Err(Rejection::PastDate(request.date));
        }

        if request.attendee_count == 0 {
            return Err(Rejection::NoAttendees);
        }
        if request.attendee_count > room.capacity {
            return Err(Rejection::CapacityExceeded {
                requested: request.attendee_count,
                capacity: room.capacity,
            });
        }

        let range = request.range();
        if range.is_empty() {
            return Err(Rejection::EmptyRange {
                start: range.start,
                end: range.end,
            });
        }
        if !range.is_within(OPENING, CLOSING) {
            return Err(Rejection::OutsideOperatingHours(range));
        }

        if let Some(existing) = self.conflicting(room.id, request.date, &range) {
            return Err(Rejection::Overlap {
                conflicting: existing.id,
            });
        }

        let reservation = Reservation {
            id: ReservationId::new(),
            room_id: room.id,
            date: request.date,
            range,
            attendee_count: request.attendee_count,
        };
        self.reservations.push(reservation.clone());
        Ok(reservation)
    }

    /// Whether `range` on `date` is free of existing reservations for the
    /// named room. Only the overlap rule is consulted.
    ///
    /// # Errors
    ///
    /// Returns [`BookingError::NotFound`] if the room does not exist.
    pub fn is_available(&self, room: &str, date: Date, range: &TimeRange) -> Result<bool, BookingError> {
        let room = self.find_room(room).ok_or_else(|| NotFoundError {
            entity: "Room",
            key: room.to_string(),
        })?;
        Ok(self.conflicting(room.id, date, range).is_none())
    }

    fn conflicting(&self, room_id: RoomId, date: Date, range: &TimeRange) -> Option<&Reservation> {
        self.reservations.iter().find(|reservation| {
            reservation.room_id == room_id
                && reservation.date == date
                && reservation.range.overlaps(range)
        })
    }

    // ── Queries ──────────────────────────────────────────────────

    /// Every reservation, in admission order.
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Reservations falling on `date`, in admission order.
    #[must_use]
    pub fn reservations_on_date(&self, date: Date) -> Vec<&Reservation> {
        self.reservations
            .iter()
            .filter(|reservation| reservation.date == date)
            .collect()
    }

    /// Reservations of the room currently named `name`, in admission order.
    #[must_use]
    pub fn reservations_for_room(&self, name: &str) -> Vec<&Reservation> {
        let Some(room) = self.find_room(name) else {
            return Vec::new();
        };
        self.reservations
            .iter()
            .filter(|reservation| reservation.room_id == room.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::FixedClock;
    use roombook_domain::error::ValidationError;
    use roombook_domain::time::TimeOfDay;

    fn today() -> Date {
        Date::from_ymd_opt(2025, 11, 15).unwrap()
    }

    fn day(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn make_engine() -> BookingEngine<FixedClock> {
        BookingEngine::with_clock(FixedClock(today()))
    }

    fn request(room: &str, date: Date, start: &str, end: &str, attendees: u32) -> BookingRequest {
        BookingRequest {
            room: room.to_string(),
            date,
            start: t(start),
            end: t(end),
            attendee_count: attendees,
        }
    }

    fn engine_with_room(name: &str, capacity: i64) -> BookingEngine<FixedClock> {
        let mut engine = make_engine();
        engine.add_room(name, capacity).unwrap();
        engine
    }

    // ── Registry ─────────────────────────────────────────────────

    #[test]
    fn should_find_room_after_adding_it() {
        let mut engine = make_engine();
        let created = engine.add_room("Salle A", 10).unwrap();

        let found = engine.find_room("Salle A").unwrap();
        assert_eq!(found, &created);
        assert_eq!(found.name, "Salle A");
        assert_eq!(found.capacity, 10);
    }

    #[test]
    fn should_reject_duplicate_room_name() {
        let mut engine = engine_with_room("Salle A", 10);

        let result = engine.add_room("Salle A", 20);
        assert!(matches!(result, Err(BookingError::Duplicate(ref e)) if e.name == "Salle A"));
        assert_eq!(engine.rooms().len(), 1);
        assert_eq!(engine.find_room("Salle A").unwrap().capacity, 10);
    }

    #[test]
    fn should_reject_blank_room_name() {
        let mut engine = make_engine();
        for name in ["", "   "] {
            assert!(matches!(
                engine.add_room(name, 5),
                Err(BookingError::Validation(ValidationError::EmptyName))
            ));
        }
        assert!(engine.rooms().is_empty());
    }

    #[test]
    fn should_reject_non_positive_capacity() {
        let mut engine = make_engine();
        for capacity in [0, -5] {
            assert!(matches!(
                engine.add_room("Salle A", capacity),
                Err(BookingError::Validation(ValidationError::NonPositiveCapacity(c))) if c == capacity
            ));
        }
        assert!(engine.rooms().is_empty());
    }

    #[test]
    fn should_return_none_for_unknown_room() {
        let engine = engine_with_room("Salle A", 10);
        assert!(engine.find_room("Salle B").is_none());
        assert!(engine.find_room("salle a").is_none());
    }

    #[test]
    fn should_list_rooms_in_insertion_order() {
        let mut engine = make_engine();
        engine.add_room("Salle B", 4).unwrap();
        engine.add_room("Salle A", 8).unwrap();

        let names: Vec<&str> = engine.rooms().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Salle B", "Salle A"]);
    }

    #[test]
    fn should_remove_room_and_its_reservations() {
        let mut engine = engine_with_room("Salle A", 10);
        engine.add_room("Salle B", 10).unwrap();
        let date = day("2025-12-01");
        engine.reserve(request("Salle A", date, "09:00", "10:00", 2)).unwrap();
        engine.reserve(request("Salle B", date, "09:00", "10:00", 2)).unwrap();

        engine.remove_room("Salle A");

        assert!(engine.find_room("Salle A").is_none());
        assert!(engine.reservations_for_room("Salle A").is_empty());
        assert_eq!(engine.reservations().len(), 1);
        assert_eq!(engine.reservations_for_room("Salle B").len(), 1);
    }

    #[test]
    fn should_ignore_removal_of_unknown_room() {
        let mut engine = engine_with_room("Salle A", 10);
        engine.remove_room("Salle Z");
        engine.remove_room("Salle Z");
        assert_eq!(engine.rooms().len(), 1);
    }

    #[test]
    fn should_return_false_when_updating_unknown_room() {
        let mut engine = make_engine();
        let updated = engine
            .update_room(
                "Salle A",
                RoomUpdate {
                    capacity: Some(3),
                    ..RoomUpdate::default()
                },
            )
            .unwrap();
        assert!(!updated);
    }

    #[test]
    fn should_rename_and_resize_room() {
        let mut engine = engine_with_room("Salle A", 10);
        let updated = engine
            .update_room(
                "Salle A",
                RoomUpdate {
                    name: Some("Salle Z".to_string()),
                    capacity: Some(25),
                },
            )
            .unwrap();

        assert!(updated);
        assert!(engine.find_room("Salle A").is_none());
        assert_eq!(engine.find_room("Salle Z").unwrap().capacity, 25);
    }

    #[test]
    fn should_allow_renaming_room_to_its_own_name() {
        let mut engine = engine_with_room("Salle A", 10);
        let update = RoomUpdate {
            name: Some("Salle A".to_string()),
            ..RoomUpdate::default()
        };
        assert!(engine.update_room("Salle A", update).unwrap());
    }

    #[test]
    fn should_return_false_when_new_name_is_taken() {
        let mut engine = engine_with_room("Salle A", 10);
        engine.add_room("Salle B", 5).unwrap();

        let update = RoomUpdate {
            name: Some("Salle B".to_string()),
            capacity: Some(99),
        };
        assert!(!engine.update_room("Salle A", update).unwrap());
        assert_eq!(engine.find_room("Salle A").unwrap().capacity, 10);
    }

    #[test]
    fn should_raise_when_update_is_invalid() {
        let mut engine = engine_with_room("Salle A", 10);

        let blank = RoomUpdate {
            name: Some("  ".to_string()),
            ..RoomUpdate::default()
        };
        assert!(matches!(
            engine.update_room("Salle A", blank),
            Err(BookingError::Validation(ValidationError::EmptyName))
        ));

        let bad_capacity = RoomUpdate {
            name: Some("Salle Z".to_string()),
            capacity: Some(0),
        };
        assert!(matches!(
            engine.update_room("Salle A", bad_capacity),
            Err(BookingError::Validation(ValidationError::NonPositiveCapacity(0)))
        ));
        let room = engine.find_room("Salle A").unwrap();
        assert_eq!(room.capacity, 10);
    }

    #[test]
    fn should_keep_reservations_attached_after_rename() {
        let mut engine = engine_with_room("Salle A", 10);
        let date = day("2025-12-01");
        engine.reserve(request("Salle A", date, "09:00", "10:00", 2)).unwrap();

        let update = RoomUpdate {
            name: Some("Salle Z".to_string()),
            ..RoomUpdate::default()
        };
        engine.update_room("Salle A", update).unwrap();

        assert!(engine.reservations_for_room("Salle A").is_empty());
        let moved = engine.reservations_for_room("Salle Z");
        assert_eq!(moved.len(), 1);
        assert_eq!(engine.room_name(moved[0].room_id), Some("Salle Z"));
    }

    #[test]
    fn should_not_revalidate_reservations_when_capacity_shrinks() {
        let mut engine = engine_with_room("Salle A", 10);
        let date = day("2025-12-01");
        engine.reserve(request("Salle A", date, "09:00", "10:00", 8)).unwrap();

        let update = RoomUpdate {
            capacity: Some(2),
            ..RoomUpdate::default()
        };
        assert!(engine.update_room("Salle A", update).unwrap());
        assert_eq!(engine.reservations_for_room("Salle A")[0].attendee_count, 8);
    }

    // ── Admission ────────────────────────────────────────────────

    #[test]
    fn should_reject_unknown_room() {
        let mut engine = make_engine();
        let result = engine.reserve(request("Nowhere", day("2025-12-01"), "09:00", "10:00", 1));
        assert_eq!(result, Err(Rejection::UnknownRoom("Nowhere".to_string())));
    }

    #[test]
    fn should_reject_overlapping_booking_but_admit_touching_one() {
        let mut engine = engine_with_room("R", 10);
        let date = day("2025-12-01");
        let first = engine.reserve(request("R", date, "09:00", "10:00", 5)).unwrap();

        let overlapping = engine.reserve(request("R", date, "09:30", "10:30", 5));
        assert_eq!(
            overlapping,
            Err(Rejection::Overlap {
                conflicting: first.id
            })
        );

        assert!(engine.reserve(request("R", date, "10:00", "11:00", 5)).is_ok());
        assert_eq!(engine.reservations().len(), 2);
    }

    #[test]
    fn should_reject_containing_and_contained_bookings() {
        let mut engine = engine_with_room("R", 10);
        let date = day("2025-12-01");
        engine.reserve(request("R", date, "10:00", "12:00", 1)).unwrap();

        assert!(engine.reserve(request("R", date, "09:00", "13:00", 1)).is_err());
        assert!(engine.reserve(request("R", date, "10:30", "11:30", 1)).is_err());
        assert!(engine.reserve(request("R", date, "10:00", "12:00", 1)).is_err());
    }

    #[test]
    fn should_admit_same_slot_on_other_room_or_date() {
        let mut engine = engine_with_room("R", 10);
        engine.add_room("S", 10).unwrap();
        let date = day("2025-12-01");
        engine.reserve(request("R", date, "09:00", "10:00", 1)).unwrap();

        assert!(engine.reserve(request("S", date, "09:00", "10:00", 1)).is_ok());
        assert!(engine.reserve(request("R", day("2025-12-02"), "09:00", "10:00", 1)).is_ok());
    }

    #[test]
    fn should_enforce_capacity() {
        let mut engine = engine_with_room("R", 10);
        let date = day("2025-12-01");

        assert_eq!(
            engine.reserve(request("R", date, "09:00", "10:00", 15)),
            Err(Rejection::CapacityExceeded {
                requested: 15,
                capacity: 10
            })
        );
        assert!(engine.reserve(request("R", date, "09:00", "10:00", 10)).is_ok());
    }

    #[test]
    fn should_reject_booking_without_attendees() {
        let mut engine = engine_with_room("R", 10);
        let date = day("2025-12-01");

        assert_eq!(
            engine.reserve(request("R", date, "09:00", "10:00", 0)),
            Err(Rejection::NoAttendees)
        );
        assert!(engine.reservations().is_empty());

        // past date still wins, and an empty booking beats a bad range
        let yesterday = today().pred_opt().unwrap();
        let result = engine.reserve(request("R", yesterday, "09:00", "10:00", 0));
        assert!(matches!(result, Err(Rejection::PastDate(_))));
        let result = engine.reserve(request("R", date, "11:00", "10:00", 0));
        assert_eq!(result, Err(Rejection::NoAttendees));
    }

    #[test]
    fn should_enforce_operating_hours() {
        let mut engine = engine_with_room("R", 10);
        let date = day("2025-12-01");

        let early = engine.reserve(request("R", date, "07:00", "09:00", 1));
        assert!(matches!(early, Err(Rejection::OutsideOperatingHours(_))));

        let late = engine.reserve(request("R", date, "17:00", "19:00", 1));
        assert!(matches!(late, Err(Rejection::OutsideOperatingHours(_))));

        let half_past = engine.reserve(request("R", date, "17:00", "18:30", 1));
        assert!(matches!(half_past, Err(Rejection::OutsideOperatingHours(_))));

        assert!(engine.reserve(request("R", date, "08:00", "18:00", 1)).is_ok());
    }

    #[test]
    fn should_reject_empty_or_inverted_range() {
        let mut engine = engine_with_room("R", 10);
        let date = day("2025-12-01");

        assert_eq!(
            engine.reserve(request("R", date, "10:00", "10:00", 1)),
            Err(Rejection::EmptyRange {
                start: t("10:00"),
                end: t("10:00")
            })
        );
        assert!(matches!(
            engine.reserve(request("R", date, "11:00", "10:00", 1)),
            Err(Rejection::EmptyRange { .. })
        ));
    }

    #[test]
    fn should_reject_past_date_and_admit_today_or_later() {
        let mut engine = engine_with_room("R", 10);
        let yesterday = today().pred_opt().unwrap();

        assert_eq!(
            engine.reserve(request("R", yesterday, "09:00", "10:00", 1)),
            Err(Rejection::PastDate(yesterday))
        );
        assert!(engine.reserve(request("R", today(), "08:00", "09:00", 1)).is_ok());
        assert!(engine.reserve(request("R", today().succ_opt().unwrap(), "08:00", "09:00", 1)).is_ok());
    }

    #[test]
    fn should_check_rules_in_order() {
        let mut engine = engine_with_room("R", 10);
        let yesterday = today().pred_opt().unwrap();

        // past date wins over capacity and hours
        let result = engine.reserve(request("R", yesterday, "07:00", "19:00", 50));
        assert!(matches!(result, Err(Rejection::PastDate(_))));

        // capacity wins over hours
        let result = engine.reserve(request("R", today(), "07:00", "19:00", 50));
        assert!(matches!(result, Err(Rejection::CapacityExceeded { .. })));
    }

    #[test]
    fn should_report_availability() {
        let mut engine = engine_with_room("R", 10);
        let date = day("2025-12-01");
        engine.reserve(request("R", date, "09:00", "10:00", 1)).unwrap();

        let busy = TimeRange::new(t("09:30"), t("10:30"));
        let free = TimeRange::new(t("10:00"), t("11:00"));
        assert!(!engine.is_available("R", date, &busy).unwrap());
        assert!(engine.is_available("R", date, &free).unwrap());
        assert!(matches!(
            engine.is_available("Nowhere", date, &free),
            Err(BookingError::NotFound(_))
        ));
    }

    // ── Queries ──────────────────────────────────────────────────

    #[test]
    fn should_return_empty_lists_when_nothing_matches() {
        let engine = engine_with_room("R", 10);
        assert!(engine.reservations_on_date(day("2025-12-01")).is_empty());
        assert!(engine.reservations_for_room("R").is_empty());
        assert!(engine.reservations_for_room("Nowhere").is_empty());
    }

    #[test]
    fn should_filter_queries_preserving_insertion_order() {
        let mut engine = engine_with_room("R", 10);
        engine.add_room("S", 10).unwrap();
        let d1 = day("2025-12-01");
        let d2 = day("2025-12-02");

        let a = engine.reserve(request("R", d1, "14:00", "15:00", 1)).unwrap();
        let b = engine.reserve(request("S", d2, "09:00", "10:00", 1)).unwrap();
        let c = engine.reserve(request("S", d1, "08:00", "09:00", 1)).unwrap();
        let d = engine.reserve(request("R", d2, "11:00", "12:00", 1)).unwrap();

        let on_d1: Vec<ReservationId> = engine.reservations_on_date(d1).iter().map(|r| r.id).collect();
        assert_eq!(on_d1, [a.id, c.id]);

        let for_r: Vec<ReservationId> = engine.reservations_for_room("R").iter().map(|r| r.id).collect();
        assert_eq!(for_r, [a.id, d.id]);

        let for_s: Vec<ReservationId> = engine.reservations_for_room("S").iter().map(|r| r.id).collect();
        assert_eq!(for_s, [b.id, c.id]);
    }

    #[test]
    fn should_run_end_to_end_scenario() {
        let mut engine = make_engine();
        engine.add_room("Salle A", 10).unwrap();
        let date = day("2025-12-01");

        assert!(engine.reserve(request("Salle A", date, "09:00", "11:00", 5)).is_ok());
        assert!(matches!(
            engine.reserve(request("Salle A", date, "10:00", "12:00", 5)),
            Err(Rejection::Overlap { .. })
        ));
        assert_eq!(engine.reservations_on_date(date).len(), 1);

        engine.remove_room("Salle A");
        assert!(engine.reservations_for_room("Salle A").is_empty());
        assert!(engine.reservations_on_date(date).is_empty());
    }

    #[test]
    fn should_use_system_clock_by_default() {
        let mut engine = BookingEngine::new();
        engine.add_room("R", 2).unwrap();
        let today = roombook_domain::time::today();
        let tomorrow = today.succ_opt().unwrap();
        assert!(engine.reserve(request("R", tomorrow, "09:00", "10:00", 1)).is_ok());
    }
}
