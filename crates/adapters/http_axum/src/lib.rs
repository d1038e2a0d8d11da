//! # roombook-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for rooms and reservations
//!   (`/api/rooms`, `/api/reservations`, …)
//! - Map HTTP requests into booking engine calls (driving adapter)
//! - Map engine results, errors, and rejections into HTTP responses
//! - Serialize access to the engine: every handler holds the engine lock
//!   for the whole of its engine interaction
//!
//! ## Dependency rule
//! Depends on `roombook-app` (for the engine and ports) and `roombook-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod extract;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
