//! # roombook-app
//!
//! Application layer — the booking engine and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** the engine depends on:
//!   - `Clock` — source of "today" for the past-date rule
//! - Provide the **`BookingEngine`**:
//!   - room registry (add, find, update, remove with cascading deletion)
//!   - booking admission (past date, capacity, operating hours, overlap)
//!   - read queries (reservations by date, by room)
//!
//! ## Concurrency
//! The engine is synchronous and holds no lock. Hosts that serve overlapping
//! requests must wrap it in their own mutex.
//!
//! ## Dependency rule
//! Depends on `roombook-domain` only. Never imports adapter crates.
//! The engine never logs; diagnostics belong to the caller.

pub mod booking_engine;
pub mod ports;
