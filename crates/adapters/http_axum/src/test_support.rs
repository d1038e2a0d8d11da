//! Shared helpers for router-level tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use roombook_app::booking_engine::BookingEngine;
use roombook_app::ports::FixedClock;
use roombook_domain::time::Date;

use crate::router;
use crate::state::AppState;

/// Date the test engine believes is today.
pub fn today() -> Date {
    Date::from_ymd_opt(2025, 11, 15).unwrap()
}

pub struct TestApp {
    router: Router,
}

pub fn test_app() -> TestApp {
    let engine = BookingEngine::with_clock(FixedClock(today()));
    TestApp {
        router: router::build(AppState::new(engine)),
    }
}

impl TestApp {
    /// Send a request and decode the response body as JSON (`Null` when empty).
    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, json)
    }
}
