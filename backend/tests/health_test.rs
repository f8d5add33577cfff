//! Integration tests for health endpoints

mod common;

use axum::http::StatusCode;

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_endpoint() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_readiness_endpoint_with_database() {
    let app = common::TestApp::new().await;

    let (status, body) = app.get("/health/ready").await;
    assert_eq!(status, StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["database"]["status"], "healthy");
}
