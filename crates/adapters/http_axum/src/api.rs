//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod reservations;
#[allow(clippy::missing_errors_doc)]
pub mod rooms;

use axum::Router;
use axum::routing::{get, post};

use roombook_app::ports::Clock;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        // Rooms
        .route("/rooms", get(rooms::list::<C>).post(rooms::create::<C>))
        .route(
            "/rooms/{name}",
            get(rooms::get::<C>)
                .put(rooms::update::<C>)
                .delete(rooms::delete::<C>),
        )
        // Reservations
        .route("/reservations", post(reservations::create::<C>))
        .route("/reservations/check", post(reservations::check::<C>))
        .route("/reservations/day/{date}", get(reservations::on_date::<C>))
        .route("/reservations/room/{name}", get(reservations::for_room::<C>))
}
