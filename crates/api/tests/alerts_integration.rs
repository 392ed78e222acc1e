//! Integration tests for the JSON alert endpoints.

mod common;

use axum::http::StatusCode;
use common::{
    alert_names, create_test_app, get_request, json_request, parse_response_body, start_session,
    test_config,
};
use fake::faker::lorem::en::Words;
use fake::Fake;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_list_seed_alerts() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/alerts", Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    let alerts = body.as_array().unwrap();
    assert_eq!(alerts.len(), 3);

    assert_eq!(alerts[0]["name"], "Wetland Filling (Naugatuck River)");
    assert_eq!(alerts[0]["status"], "Urgent");
    assert_eq!(alerts[0]["lat"], 41.8006);
    assert_eq!(alerts[0]["lon"], -73.1212);
    assert_eq!(alerts[0]["color"], json!([255, 0, 0, 150]));
    assert_eq!(alerts[0]["radius"], 400);

    assert_eq!(alerts[1]["status"], "Watching");
    assert_eq!(alerts[1]["color"], json!([255, 165, 0, 150]));
    assert_eq!(alerts[2]["status"], "Active");
    assert_eq!(alerts[2]["color"], json!([0, 0, 255, 150]));
}

#[tokio::test]
async fn test_soil_erosion_scenario() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(json_request(
            "/api/v1/alerts",
            json!({
                "name": "Soil Erosion",
                "status": "Active",
                "lat": 41.8006,
                "lon": -73.1212,
                "radius": 500
            }),
            Some(&cookie),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_response_body(response).await;
    assert_eq!(created["name"], "Soil Erosion");
    assert_eq!(created["color"], json!([0, 0, 255, 150]));

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/map", Some(&cookie)))
        .await
        .unwrap();
    let map = parse_response_body(response).await;
    assert_eq!(map["layers"][0]["data"].as_array().unwrap().len(), 4);
    assert_eq!(map["initialViewState"]["latitude"], 41.8006);

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/cards", Some(&cookie)))
        .await
        .unwrap();
    let cards = parse_response_body(response).await;
    let first_column = cards["columns"][0].as_array().unwrap();
    assert_eq!(first_column.len(), 2);
    assert_eq!(first_column[1]["index"], 3);
    assert_eq!(first_column[1]["name"], "Soil Erosion");
    assert_eq!(first_column[1]["icon"], "blue_circle");

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/dashboard", Some(&cookie)))
        .await
        .unwrap();
    let view = parse_response_body(response).await;
    assert_eq!(view["zone_count"], 4);
    assert_eq!(
        view["headline"],
        "Tracking 4 active environmental zones in Torrington, CT."
    );
}

#[tokio::test]
async fn test_create_alert_with_defaults() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let response = app
        .clone()
        .oneshot(json_request("/api/v1/alerts", json!({}), Some(&cookie)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let created = parse_response_body(response).await;
    assert_eq!(created["name"], "");
    assert_eq!(created["status"], "Urgent");
    assert_eq!(created["lat"], 41.8006);
    assert_eq!(created["lon"], -73.1212);
    assert_eq!(created["radius"], 500);
    assert_eq!(created["color"], json!([255, 0, 0, 150]));
}

#[tokio::test]
async fn test_create_alert_radius_out_of_range() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    for radius in [99, 2001] {
        let response = app
            .clone()
            .oneshot(json_request(
                "/api/v1/alerts",
                json!({ "name": "x", "status": "Resolved", "radius": radius }),
                Some(&cookie),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = parse_response_body(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "Radius must be between 100 and 2000 meters");
    }

    assert_eq!(alert_names(&app, &cookie).await.len(), 3);
}

#[tokio::test]
async fn test_radius_bounds_are_inclusive() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    for radius in [100, 2000] {
        let response = app
            .clone()
            .oneshot(json_request(
                "/api/v1/alerts",
                json!({ "name": "edge", "status": "Watching", "radius": radius }),
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    assert_eq!(alert_names(&app, &cookie).await.len(), 5);
}

#[tokio::test]
async fn test_submissions_are_appended_in_order() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let mut submitted = Vec::new();
    for _ in 0..5 {
        let words: Vec<String> = Words(1..4).fake();
        let name = words.join(" ");
        let response = app
            .clone()
            .oneshot(json_request(
                "/api/v1/alerts",
                json!({ "name": name, "status": "Watching", "radius": (100u32..=2000).fake::<u32>() }),
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        submitted.push(name);
    }

    let names = alert_names(&app, &cookie).await;
    assert_eq!(names.len(), 8);
    assert_eq!(&names[3..], submitted.as_slice());
}

#[tokio::test]
async fn test_reads_do_not_mutate() {
    let app = create_test_app(test_config());
    let cookie = start_session(&app).await;

    let first = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/dashboard", Some(&cookie)))
            .await
            .unwrap(),
    )
    .await;
    let second = parse_response_body(
        app.clone()
            .oneshot(get_request("/api/v1/dashboard", Some(&cookie)))
            .await
            .unwrap(),
    )
    .await;

    assert_eq!(first, second);
    assert_eq!(first["zone_count"], 3);
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = create_test_app(test_config());
    start_session(&app).await;

    let response = app
        .clone()
        .oneshot(get_request("/api/health", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["sessions"]["active"], 1);
    assert_eq!(body["sessions"]["max"], 100);

    for uri in ["/api/health/live", "/api/health/ready"] {
        let response = app.clone().oneshot(get_request(uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
