//! Integration tests for the health check endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let t = common::build_test_app().await;
    let response = get(&t.app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_when_database_is_unreachable() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::test_config(dir.path().join("missing").join("enrollment.db"));
    let db = enrollment_db::Database::open(config.database_path.clone());
    let app = enrollment_api::router::build_app_router(
        enrollment_api::state::AppState { db },
        &config,
    );

    let json = body_json(get(&app, "/health").await).await;

    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let t = common::build_test_app().await;
    let response = get(&t.app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn health_check_does_not_create_missing_database() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::test_config(dir.path().join("enrollment.db"));
    let db = enrollment_db::Database::open(config.database_path.clone());
    let app = enrollment_api::router::build_app_router(
        enrollment_api::state::AppState { db: db.clone() },
        &config,
    );

    let json = body_json(get(&app, "/health").await).await;

    assert_eq!(json["db_healthy"], false);
    assert!(!db.exists());
}
