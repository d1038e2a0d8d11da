//! JSON REST handlers for rooms.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use roombook_app::ports::Clock;
use roombook_domain::error::{BookingError, DuplicateError};
use roombook_domain::room::{Room, RoomUpdate};

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::state::AppState;

/// Request body for creating a room.
#[derive(Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub capacity: i64,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Room>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get and update endpoints.
pub enum GetResponse {
    Ok(Json<Room>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Room>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /api/rooms`
pub async fn list<C>(State(state): State<AppState<C>>) -> ListResponse
where
    C: Clock + Send + Sync + 'static,
{
    let engine = state.engine.lock().await;
    ListResponse::Ok(Json(engine.rooms().to_vec()))
}

/// `GET /api/rooms/:name`
pub async fn get<C>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
) -> Result<GetResponse, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let engine = state.engine.lock().await;
    let room = engine
        .find_room(&name)
        .cloned()
        .ok_or_else(|| ApiError::room_not_found(&name))?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `POST /api/rooms`
pub async fn create<C>(
    State(state): State<AppState<C>>,
    ApiJson(req): ApiJson<CreateRoomRequest>,
) -> Result<CreateResponse, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let mut engine = state.engine.lock().await;
    let room = engine.add_room(req.name, req.capacity)?;
    tracing::info!(room = %room.name, capacity = room.capacity, "room added");
    Ok(CreateResponse::Created(Json(room)))
}

/// `PUT /api/rooms/:name`
pub async fn update<C>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
    ApiJson(req): ApiJson<RoomUpdate>,
) -> Result<GetResponse, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let mut engine = state.engine.lock().await;
    if engine.find_room(&name).is_none() {
        return Err(ApiError::room_not_found(&name));
    }

    let new_name = req.name.clone().unwrap_or_else(|| name.clone());
    if !engine.update_room(&name, req)? {
        // the room exists, so the only way to fail here is a taken name
        return Err(BookingError::from(DuplicateError { name: new_name }).into());
    }

    let room = engine
        .find_room(&new_name)
        .cloned()
        .ok_or_else(|| ApiError::room_not_found(&new_name))?;
    Ok(GetResponse::Ok(Json(room)))
}

/// `DELETE /api/rooms/:name`
pub async fn delete<C>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    let mut engine = state.engine.lock().await;
    if engine.find_room(&name).is_none() {
        return Err(ApiError::room_not_found(&name));
    }
    engine.remove_room(&name);
    tracing::info!(room = %name, "room removed with its reservations");
    Ok(DeleteResponse::NoContent)
}
