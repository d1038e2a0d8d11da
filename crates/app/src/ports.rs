//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the application core and the outside world.

pub mod clock;

pub use clock::{Clock, FixedClock, SystemClock};
