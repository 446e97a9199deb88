// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use weekend_runs::clock::FixedClock;
use weekend_runs::config::Config;
use weekend_runs::routes::create_router;
use weekend_runs::AppState;

/// Wednesday 2026-03-04 09:00 UTC; next Saturday is 2026-03-07.
#[allow(dead_code)]
pub fn test_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-03-04T09:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

/// Create a test app with an empty store and a fixed clock.
/// Returns the router, the shared state and the clock.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, FixedClock) {
    create_test_app_with(Config::test_default())
}

/// Create a test app seeded with the sample data.
#[allow(dead_code)]
pub fn create_seeded_test_app() -> (axum::Router, Arc<AppState>, FixedClock) {
    create_test_app_with(Config {
        seed_sample_data: true,
        ..Config::test_default()
    })
}

fn create_test_app_with(config: Config) -> (axum::Router, Arc<AppState>, FixedClock) {
    let clock = FixedClock::new(test_now());
    let state = Arc::new(AppState::new(config, Arc::new(clock.clone())));
    (create_router(state.clone()), state, clock)
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub fn post_empty(uri: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
