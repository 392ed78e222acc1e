//! Common test utilities for integration tests.
//!
//! Every test builds its own router over a fresh in-memory session registry,
//! so tests never share alerts.

// Not every integration test uses every helper.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, HeaderValue, Method, Request},
    response::Response,
    Router,
};
use eco_pulse_api::{
    app::{create_app_with_state, AppState},
    config::Config,
};
use tower::ServiceExt;

pub const COOKIE_NAME: &str = "eco_pulse_session";

/// Test configuration from embedded defaults.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

pub fn create_test_app(config: Config) -> Router {
    create_app_with_state(AppState::new(config))
}

/// Router plus a handle on its state, for tests that inspect the registry.
pub fn create_test_app_with_state(config: Config) -> (Router, AppState) {
    let state = AppState::new(config);
    (create_app_with_state(state.clone()), state)
}

pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null)
}

pub async fn response_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// `name=value` pair of the session cookie set by `response`, if any.
pub fn session_cookie(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with(&format!("{}=", COOKIE_NAME)))
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

fn with_cookie(
    builder: axum::http::request::Builder,
    cookie: Option<&str>,
) -> axum::http::request::Builder {
    match cookie {
        Some(cookie) => builder.header(header::COOKIE, HeaderValue::from_str(cookie).unwrap()),
        None => builder,
    }
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    with_cookie(Request::builder().method(Method::GET).uri(uri), cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn delete_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    with_cookie(Request::builder().method(Method::DELETE).uri(uri), cookie)
        .body(Body::empty())
        .unwrap()
}

pub fn json_request(uri: &str, body: serde_json::Value, cookie: Option<&str>) -> Request<Body> {
    with_cookie(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json"),
        cookie,
    )
    .body(Body::from(serde_json::to_string(&body).unwrap()))
    .unwrap()
}

pub fn form_request(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    with_cookie(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded"),
        cookie,
    )
    .body(Body::from(body.to_string()))
    .unwrap()
}

/// Starts a session by loading the page and returns its cookie.
pub async fn start_session(app: &Router) -> String {
    let response = app.clone().oneshot(get_request("/", None)).await.unwrap();
    session_cookie(&response).expect("First visit should set a session cookie")
}

/// Names of the session's alerts, in store order.
pub async fn alert_names(app: &Router, cookie: &str) -> Vec<String> {
    let response = app
        .clone()
        .oneshot(get_request("/api/v1/alerts", Some(cookie)))
        .await
        .unwrap();
    parse_response_body(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|alert| alert["name"].as_str().unwrap().to_string())
        .collect()
}
