//! JSON alert routes.
//!
//! All handlers act on the visitor's own session. Reads from a visitor with
//! no live session see the seed alerts and leave the registry untouched.

use axum::{
    extract::State,
    http::{header::SET_COOKIE, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::info;

use domain::models::{Alert, AlertInput};
use domain::services::{CardGrid, DashboardView, DeckSpec};

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::middleware::metrics::record_alert_submitted;
use crate::routes::{read_dashboard, with_dashboard};

/// GET /api/v1/alerts
pub async fn list_alerts(
    State(state): State<AppState>,
    session: Option<CurrentSession>,
) -> Result<Json<Vec<Alert>>, ApiError> {
    let alerts = read_dashboard(&state, session.as_ref(), |d| d.alerts().to_vec())?;
    Ok(Json(alerts))
}

/// POST /api/v1/alerts
///
/// Returns 201 with the alert as stored, color included.
pub async fn create_alert(
    State(state): State<AppState>,
    session: CurrentSession,
    Json(input): Json<AlertInput>,
) -> Result<(StatusCode, Json<Alert>), ApiError> {
    let submission = with_dashboard(&state, &session, |d| d.submit(input))??;

    record_alert_submitted(submission.alert.status());
    info!(
        session_id = %session.id,
        index = submission.index,
        "Alert added from API"
    );

    Ok((StatusCode::CREATED, Json(submission.alert)))
}

/// GET /api/v1/dashboard
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Option<CurrentSession>,
) -> Result<Json<DashboardView>, ApiError> {
    let view = read_dashboard(&state, session.as_ref(), |d| d.view().clone())?;
    Ok(Json(view))
}

/// GET /api/v1/map
pub async fn get_map(
    State(state): State<AppState>,
    session: Option<CurrentSession>,
) -> Result<Json<DeckSpec>, ApiError> {
    let map = read_dashboard(&state, session.as_ref(), |d| d.view().map.clone())?;
    Ok(Json(map))
}

/// GET /api/v1/cards
pub async fn get_cards(
    State(state): State<AppState>,
    session: Option<CurrentSession>,
) -> Result<Json<CardGrid>, ApiError> {
    let cards = read_dashboard(&state, session.as_ref(), |d| d.view().cards.clone())?;
    Ok(Json(cards))
}

/// DELETE /api/v1/session
///
/// Drops the session with its alerts and clears the cookie. The next page
/// load starts over from the seed alerts.
pub async fn end_session(
    State(state): State<AppState>,
    session: Option<CurrentSession>,
) -> Response {
    if let Some(session) = session {
        if state.sessions.end(session.id) {
            info!(session_id = %session.id, "Session ended");
        }
    }

    (
        StatusCode::NO_CONTENT,
        [(SET_COOKIE, state.cookies.build_clear_cookie())],
    )
        .into_response()
}
