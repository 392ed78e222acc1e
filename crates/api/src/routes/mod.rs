//! HTTP route handlers.

pub mod alerts;
pub mod dashboard;
pub mod health;

use domain::services::Dashboard;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentSession;

/// Runs `f` against the current session's dashboard.
///
/// The session can disappear between the middleware and the handler when the
/// sweep job or a capacity eviction removes it.
pub(crate) fn with_dashboard<R>(
    state: &AppState,
    session: &CurrentSession,
    f: impl FnOnce(&mut Dashboard) -> R,
) -> Result<R, ApiError> {
    state
        .sessions
        .with_dashboard(session.id, f)
        .ok_or_else(|| ApiError::NotFound("Session expired, reload the page".to_string()))
}

/// Runs `f` against the visitor's dashboard for a read-only request.
///
/// Without a live session `f` sees a freshly seeded dashboard that is dropped
/// afterwards, so anonymous reads never take a registry slot.
pub(crate) fn read_dashboard<R>(
    state: &AppState,
    session: Option<&CurrentSession>,
    f: impl FnOnce(&Dashboard) -> R,
) -> Result<R, ApiError> {
    match session {
        Some(session) => with_dashboard(state, session, |d| f(d)),
        None => Ok(f(&Dashboard::new(state.config.dashboard.map_style.clone()))),
    }
}
