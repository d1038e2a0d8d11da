//! Clock port — where the engine learns the current date.

use std::sync::Arc;

use roombook_domain::time::{self, Date};

/// Supplies the current calendar date.
pub trait Clock {
    fn today(&self) -> Date;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        time::today()
    }
}

/// A clock frozen on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

impl<T: Clock + ?Sized> Clock for Arc<T> {
    fn today(&self) -> Date {
        (**self).today()
    }
}
