//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roombook_domain::error::{BookingError, NotFoundError};
use roombook_domain::reservation::Rejection;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
}

/// Maps engine failures to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    Booking(BookingError),
    Rejected(Rejection),
    /// The request body is not JSON of the expected shape.
    MalformedBody(JsonRejection),
}

impl ApiError {
    /// Shorthand for a missing room.
    #[must_use]
    pub fn room_not_found(name: &str) -> Self {
        Self::Booking(
            NotFoundError {
                entity: "Room",
                key: name.to_string(),
            }
            .into(),
        )
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        Self::Booking(err)
    }
}

impl From<Rejection> for ApiError {
    fn from(rejection: Rejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::MalformedBody(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, reason) = match &self {
            Self::Booking(BookingError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string(), None)
            }
            Self::Booking(BookingError::Duplicate(err)) => {
                (StatusCode::CONFLICT, err.to_string(), None)
            }
            Self::Booking(BookingError::NotFound(err)) => {
                (StatusCode::NOT_FOUND, err.to_string(), None)
            }
            Self::Rejected(rejection) => {
                let status = match rejection {
                    Rejection::UnknownRoom(_) => StatusCode::NOT_FOUND,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, rejection.to_string(), Some(rejection.code()))
            }
            Self::MalformedBody(rejection) => {
                (StatusCode::BAD_REQUEST, rejection.body_text(), None)
            }
        };

        (status, Json(ErrorBody { error, reason })).into_response()
    }
}
