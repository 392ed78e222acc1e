use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, optional_session_middleware,
    security_headers_middleware, session_middleware, trace_id,
};
use crate::routes::{alerts, dashboard, health};
use crate::services::{SessionCookie, SessionRegistry};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub sessions: Arc<SessionRegistry>,
    pub cookies: SessionCookie,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let sessions = Arc::new(SessionRegistry::from_config(&config));
        let cookies = SessionCookie::new(config.session.clone());
        Self {
            config: Arc::new(config),
            sessions,
            cookies,
        }
    }
}

pub fn create_app(config: Config) -> Router {
    create_app_with_state(AppState::new(config))
}

pub fn create_app_with_state(state: AppState) -> Router {
    let config = state.config.clone();

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Page load and submissions, bound to a session created on demand
    let session_routes = Router::new()
        .route("/", get(dashboard::show_dashboard))
        .route("/alerts", post(dashboard::submit_alert_form))
        .route("/api/v1/alerts", post(alerts::create_alert))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    // Reads use an existing session when there is one and never create one
    let read_routes = Router::new()
        .route("/api/v1/alerts", get(alerts::list_alerts))
        .route("/api/v1/dashboard", get(alerts::get_dashboard))
        .route("/api/v1/map", get(alerts::get_map))
        .route("/api/v1/cards", get(alerts::get_cards))
        .route("/api/v1/session", delete(alerts::end_session))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            optional_session_middleware,
        ));

    // Public routes (no session)
    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .merge(read_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
