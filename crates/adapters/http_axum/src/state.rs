//! Shared application state for axum handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use roombook_app::booking_engine::BookingEngine;
use roombook_app::ports::Clock;

/// Application state shared across all axum handlers.
///
/// The engine itself is not thread-safe, so it sits behind a mutex.
/// `Clone` is implemented manually so the clock type does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<C> {
    pub engine: Arc<Mutex<BookingEngine<C>>>,
}

impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<C> AppState<C>
where
    C: Clock + Send + Sync + 'static,
{
    /// Take ownership of an engine and share it with the handlers.
    pub fn new(engine: BookingEngine<C>) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
        }
    }
}
