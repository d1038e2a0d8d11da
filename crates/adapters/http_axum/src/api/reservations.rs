//! JSON REST handlers for reservations.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use roombook_app::booking_engine::BookingEngine;
use roombook_app::ports::Clock;
use roombook_domain::id::ReservationId;
use roombook_domain::reservation::{BookingRequest, Reservation};
use roombook_domain::time::{Date, TimeOfDay, TimeRange};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for the availability check.
#[derive(Deserialize)]
pub struct AvailabilityRequest {
    pub room: String,
    pub date: Date,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// A reservation as returned to clients, with its room resolved to a name.
#[derive(Debug, Serialize)]
pub struct ReservationView {
    pub id: ReservationId,
    pub room: String,
    pub date: Date,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
    pub attendee_count: u32,
}

impl ReservationView {
    fn new<C: Clock>(engine: &BookingEngine<C>, reservation: &Reservation) -> Self {
        Self {
            id: reservation.id,
            room: engine
                .room_name(reservation.room_id)
                .map(str::to_string)
                .unwrap_or_default(),
            date: reservation.date,
            start: reservation.range.start,
            end: reservation.range.end,
            attendee_count: reservation.attendee_count,
        }
    }
}

/// Possible responses from the list endpoints.
pub enum ListResponse {
    Ok(Json<Vec<ReservationView>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<ReservationView>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

fn views<'a, C: Clock>(
    engine: &BookingEngine<C>,
    reservations: impl IntoIterator<Item = &'a Reservation>,
) -> Vec<ReservationView> {
    reservations
        .into_iter()
        .map(|reservation| ReservationView::new(engine, reservation))
        .collect()
}

/// `POST /api/reservations`
pub async fn create<C>(
    State(state): State<AppState<C>>,
    ApiJson(req): ApiJson<BookingRequest>,
) -> Result<CreateResponse, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let mut guard = state.engine.lock().await;
    let room = req.room.clone();
    match guard.reserve(req) {
        Ok(reservation) => {
            tracing::info!(%room, date = %reservation.date, range = %reservation.range, "reservation admitted");
            let engine: &BookingEngine<C> = &guard;
            Ok(CreateResponse::Created(Json(ReservationView::new(
                engine,
                &reservation,
            ))))
        }
        Err(rejection) => {
            tracing::info!(%room, reason = rejection.code(), "reservation rejected: {rejection}");
            Err(rejection.into())
        }
    }
}

/// `GET /api/reservations/day/:date`
pub async fn on_date<C>(
    State(state): State<AppState<C>>,
    Path(date): Path<Date>,
) -> ListResponse
where
    C: Clock + Send + Sync + 'static,
{
    let guard = state.engine.lock().await;
    let engine: &BookingEngine<C> = &guard;
    let found = views(engine, engine.reservations_on_date(date));
    ListResponse::Ok(Json(found))
}

/// `GET /api/reservations/room/:name`
pub async fn for_room<C>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
) -> ListResponse
where
    C: Clock + Send + Sync + 'static,
{
    let guard = state.engine.lock().await;
    let engine: &BookingEngine<C> = &guard;
    let found = views(engine, engine.reservations_for_room(&name));
    ListResponse::Ok(Json(found))
}

/// `POST /api/reservations/check`
pub async fn check<C>(
    State(state): State<AppState<C>>,
    ApiJson(req): ApiJson<AvailabilityRequest>,
) -> Result<Json<bool>, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let engine = state.engine.lock().await;
    let range = TimeRange::new(req.start, req.end);
    let available = engine.is_available(&req.room, req.date, &range)?;
    Ok(Json(available))
}
