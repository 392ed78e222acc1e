//! Integration tests for the dashboard page and the sidebar form.

mod common;

use axum::http::{header, StatusCode};
use common::{
    alert_names, create_test_app, form_request, get_request, response_text, session_cookie,
    start_session, test_config,
};
use tower::ServiceExt;

const SOIL_EROSION_FORM: &str =
    "name=Soil+Erosion&status=Active&latitude=41.8006&longitude=-73.1212&radius=500";

#[tokio::test]
async fn test_first_visit_renders_seeded_dashboard() {
    let app = create_test_app(test_config());

    let response = app.clone().oneshot(get_request("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_some());
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );

    let html = response_text(response).await;
    assert!(html.contains("<title>Torrington Eco Zoning</title>"));
    assert!(html.contains("Tracking 3 active environmental zones in Torrington, CT."));
    assert!(html.contains("Wetland Filling (Naugatuck River)"));
    assert!(html.contains("Unauthorized Clearing"));
    assert!(html.contains("Runoff Near Burr Pond"));
    assert!(!html.contains("Alert added to the map!"));
}

#[tokio::test]
async fn test_returning_visit_keeps_session() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(get_request("/", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_cookie(&response).is_none());
}

#[tokio::test]
async fn test_form_submission_redirects_with_acknowledgement() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(form_request("/alerts", SOIL_EROSION_FORM, Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/?added=1");

    let response = app
        .clone()
        .oneshot(get_request("/?added=1", Some(&cookie)))
        .await
        .unwrap();
    let html = response_text(response).await;

    assert!(html.contains("Alert added to the map!"));
    assert!(html.contains("Tracking 4 active environmental zones in Torrington, CT."));
    assert!(html.contains("🔵 <strong>Soil Erosion</strong>"));
}

#[tokio::test]
async fn test_acknowledgement_is_not_sticky() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    app.clone()
        .oneshot(form_request("/alerts", SOIL_EROSION_FORM, Some(&cookie)))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get_request("/", Some(&cookie)))
        .await
        .unwrap();
    let html = response_text(response).await;

    assert!(!html.contains("Alert added to the map!"));
    assert!(html.contains("Tracking 4 active"));
}

#[tokio::test]
async fn test_form_without_cookie_starts_session() {
    let app = create_test_app(test_config());

    let response = app
        .clone()
        .oneshot(form_request("/alerts", SOIL_EROSION_FORM, None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&response).expect("Session cookie should be set");

    let names = alert_names(&app, &cookie).await;
    assert_eq!(names.len(), 4);
    assert_eq!(names[3], "Soil Erosion");
}

#[tokio::test]
async fn test_blank_form_uses_defaults() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(form_request(
            "/alerts",
            "name=&status=Urgent&latitude=&longitude=&radius=",
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let names = alert_names(&app, &cookie).await;
    assert_eq!(names, vec![
        "Wetland Filling (Naugatuck River)".to_string(),
        "Unauthorized Clearing".to_string(),
        "Runoff Near Burr Pond".to_string(),
        String::new(),
    ]);
}

#[tokio::test]
async fn test_out_of_range_radius_rerenders_with_error() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(form_request(
            "/alerts",
            "name=Too+Big&status=Active&latitude=41.8&longitude=-73.1&radius=5000",
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = response_text(response).await;
    assert!(html.contains("Radius must be between 100 and 2000 meters"));
    assert!(html.contains("Tracking 3 active"));

    assert_eq!(alert_names(&app, &cookie).await.len(), 3);
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(form_request(
            "/alerts",
            "name=x&status=Critical&latitude=41.8&longitude=-73.1&radius=500",
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = response_text(response).await;
    assert!(html.contains("Unknown alert status: Critical"));
    assert_eq!(alert_names(&app, &cookie).await.len(), 3);
}

#[tokio::test]
async fn test_non_numeric_latitude_is_rejected() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(form_request(
            "/alerts",
            "name=x&status=Active&latitude=north&longitude=-73.1&radius=500",
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(alert_names(&app, &cookie).await.len(), 3);
}

#[tokio::test]
async fn test_page_escapes_submitted_names() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    app.clone()
        .oneshot(form_request(
            "/alerts",
            "name=%3Cb%3Ebold%3C%2Fb%3E&status=Watching&latitude=41.8&longitude=-73.1&radius=300",
            Some(&cookie),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(get_request("/", Some(&cookie)))
        .await
        .unwrap();
    let html = response_text(response).await;

    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
    assert!(!html.contains("<b>bold</b>"));
}
