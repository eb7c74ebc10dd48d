use std::sync::Arc;

use axum::{
    body::{Body, to_bytes},
    http::Request,
};
use hyper::StatusCode;
use serde_json::json;
use tower::ServiceExt;
use wayline_directions_stub::{AppState, canned::Catalog, create_router};
use wayline_shared::{ApiError, DirectionsResponse};

fn test_app() -> axum::Router {
    let catalog = Catalog::embedded().expect("embedded catalog parses");
    create_router(AppState {
        catalog: Arc::new(catalog),
    })
}

fn post_directions(payload: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/directions")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn known_city_pair_returns_the_canned_leg() {
    let app = test_app();
    let payload = json!({
        "origin": "Sofia",
        "destination": "Plovdiv",
        "mode": "driving"
    });

    let response = app.oneshot(post_directions(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: DirectionsResponse = serde_json::from_slice(&bytes).unwrap();

    let leg = &body.routes[0].legs[0];
    assert_eq!(leg.distance.text, "140 km");
    assert_eq!(leg.duration.text, "1 hour 50 mins");
    assert_eq!(leg.start_address, "Sofia, Bulgaria");
    assert_eq!(leg.end_address, "Plovdiv, Bulgaria");
    assert!(leg.path.len() >= 3);
}

#[tokio::test]
async fn reversed_pair_reuses_the_canned_figures() {
    let app = test_app();
    let payload = json!({
        "origin": "Plovdiv",
        "destination": "Sofia"
    });

    let response = app.oneshot(post_directions(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: DirectionsResponse = serde_json::from_slice(&bytes).unwrap();

    let leg = &body.routes[0].legs[0];
    assert_eq!(leg.distance.text, "140 km");
    assert_eq!(leg.start_address, "Plovdiv, Bulgaria");
    assert_eq!(leg.end_address, "Sofia, Bulgaria");
}

#[tokio::test]
async fn unknown_place_is_a_404_with_a_message() {
    let app = test_app();
    let payload = json!({
        "origin": "Atlantis",
        "destination": "Sofia"
    });

    let response = app.oneshot(post_directions(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: ApiError = serde_json::from_slice(&bytes).unwrap();
    assert!(body.message.contains("Atlantis"));
}

#[tokio::test]
async fn coordinate_endpoints_get_a_synthesized_route() {
    let app = test_app();
    let payload = json!({
        "origin": { "lat": 42.698334, "lon": 23.319941 },
        "destination": { "lat": 42.1354, "lon": 24.7453 }
    });

    let response = app.oneshot(post_directions(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: DirectionsResponse = serde_json::from_slice(&bytes).unwrap();

    let leg = &body.routes[0].legs[0];
    assert!(leg.distance.value > 100_000.0);
    assert!(leg.duration.value > 0.0);
    assert!(!leg.distance.text.is_empty());
    assert!(!leg.duration.text.is_empty());
    assert_eq!(leg.start_address, "42.69833, 23.31994");

    let first = leg.path.first().unwrap();
    let last = leg.path.last().unwrap();
    assert_eq!(first.lat, 42.698334);
    assert_eq!(last.lon, 24.7453);
}

#[tokio::test]
async fn mixed_endpoints_resolve_independently() {
    let app = test_app();
    let payload = json!({
        "origin": "Varna",
        "destination": { "lat": 42.5048, "lon": 27.4626 }
    });

    let response = app.oneshot(post_directions(payload)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: DirectionsResponse = serde_json::from_slice(&bytes).unwrap();

    let leg = &body.routes[0].legs[0];
    assert_eq!(leg.start_address, "Varna, Bulgaria");
    assert_eq!(leg.end_address, "42.50480, 27.46260");
    assert!(leg.distance.value > 50_000.0);
}
