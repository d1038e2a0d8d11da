//! # roombook-domain
//!
//! Pure domain model for the roombook meeting-room booking system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, dates and times
//! - Define **Rooms** (bookable resources with a unique name and a capacity)
//! - Define **Reservations** (admitted bookings) and the **Rejection** reasons
//!   returned when a booking is refused
//! - Define **`TimeOfDay`** / **`TimeRange`** with numeric ordering and the
//!   half-open overlap rule
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.

pub mod error;
pub mod id;
pub mod time;

pub mod reservation;
pub mod room;
