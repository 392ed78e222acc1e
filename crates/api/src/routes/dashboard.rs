//! Dashboard page routes.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;
use tracing::{info, warn};

use domain::models::{AlertFormFields, AlertInput};
use domain::services::SUCCESS_MESSAGE;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::middleware::metrics::record_alert_submitted;
use crate::pages::{render_dashboard_page, Flash};
use crate::routes::with_dashboard;

/// Where a successful form submission lands.
pub const ADDED_REDIRECT: &str = "/?added=1";

#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub added: Option<String>,
}

impl DashboardQuery {
    fn flash(&self) -> Option<Flash> {
        match self.added.as_deref() {
            Some("1") => Some(Flash::Success(SUCCESS_MESSAGE.to_string())),
            _ => None,
        }
    }
}

fn render_page(
    state: &AppState,
    session: &CurrentSession,
    flash: Option<Flash>,
    status: StatusCode,
) -> Result<Response, ApiError> {
    // Rendering happens after the registry lock is released.
    let view = with_dashboard(state, session, |dashboard| dashboard.view().clone())?;
    let html = render_dashboard_page(&view, flash.as_ref(), &state.config.dashboard)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize map: {}", e)))?;

    Ok((status, Html(html)).into_response())
}

/// GET /
pub async fn show_dashboard(
    State(state): State<AppState>,
    session: CurrentSession,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, ApiError> {
    render_page(&state, &session, query.flash(), StatusCode::OK)
}

/// POST /alerts
///
/// Post/redirect/get: a valid submission redirects back to the page with the
/// acknowledgement, an invalid one re-renders the page with the error and
/// leaves the store untouched.
pub async fn submit_alert_form(
    State(state): State<AppState>,
    session: CurrentSession,
    Form(fields): Form<AlertFormFields>,
) -> Result<Response, ApiError> {
    let result = match AlertInput::try_from(fields) {
        Ok(input) => with_dashboard(&state, &session, |dashboard| dashboard.submit(input))?,
        Err(err) => Err(err),
    };

    match result {
        Ok(submission) => {
            record_alert_submitted(submission.alert.status());
            info!(
                session_id = %session.id,
                index = submission.index,
                "Alert added from form"
            );
            Ok(Redirect::to(ADDED_REDIRECT).into_response())
        }
        Err(err) => {
            let message = ApiError::from(err).public_message();
            warn!(session_id = %session.id, error = %message, "Alert form rejected");
            render_page(
                &state,
                &session,
                Some(Flash::Error(message)),
                StatusCode::BAD_REQUEST,
            )
        }
    }
}
