//! Session middleware.
//!
//! `session_middleware` resolves the visitor's session from the session
//! cookie, creating a fresh seeded session when the cookie is missing,
//! malformed or expired. `optional_session_middleware` only attaches a session
//! that already exists and never creates one.

use axum::{
    body::Body,
    extract::State,
    http::{header::SET_COOKIE, HeaderValue, Request},
    middleware::Next,
    response::Response,
};
use tracing::info;

use crate::app::AppState;
use crate::middleware::trace_id::get_request_id;
use crate::services::sessions::SessionHandle;

pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let requested = state.cookies.extract_session_id(req.headers());
    let handle: SessionHandle = state.sessions.resolve(requested);

    if handle.created {
        info!(
            session_id = %handle.id,
            request_id = %get_request_id(req.extensions()),
            "Session created"
        );
    }

    req.extensions_mut().insert(handle);
    let mut response = next.run(req).await;

    // A session ended by the handler itself gets no cookie.
    if handle.created && state.sessions.contains(handle.id) {
        let cookie = state.cookies.build_session_cookie(handle.id);
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().append(SET_COOKIE, value);
        }
    }

    response
}

/// Attaches the visitor's live session, if any, without creating one.
pub async fn optional_session_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let requested = state.cookies.extract_session_id(req.headers());
    if let Some(handle) = state.sessions.lookup(requested) {
        req.extensions_mut().insert(handle);
    }

    next.run(req).await
}
