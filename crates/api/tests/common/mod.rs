#![allow(dead_code)]

use std::path::PathBuf;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Request, Response};
use axum::Router;
use enrollment_api::config::ServerConfig;
use enrollment_api::router::build_app_router;
use enrollment_api::state::AppState;
use enrollment_db::repositories::EnrollmentRepo;
use enrollment_db::Database;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

/// An application wired to a throwaway database file.
///
/// The temporary directory is removed when the value is dropped.
pub struct TestApp {
    pub app: Router,
    pub db: Database,
    _dir: TempDir,
}

/// Build a test `ServerConfig` pointing at `database_path` and the
/// workspace `static/` directory.
pub fn test_config(database_path: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_path,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static"),
        request_timeout_secs: 30,
    }
}

/// Build the production router over a fresh, initialized database.
pub async fn build_test_app() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = test_config(dir.path().join("enrollment.db"));
    let db = Database::open(config.database_path.clone());

    let mut conn = db.connect().await.expect("open test database");
    enrollment_db::ensure_schema(&mut conn)
        .await
        .expect("initialize schema");
    enrollment_db::release(conn).await;

    let app = build_app_router(AppState { db: db.clone() }, &config);

    TestApp { app, db, _dir: dir }
}

/// Build the production router over a database that was never initialized.
pub fn build_app_without_schema() -> TestApp {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config = test_config(dir.path().join("empty.db"));
    let db = Database::open(config.database_path.clone());
    let app = build_app_router(AppState { db: db.clone() }, &config);
    TestApp { app, db, _dir: dir }
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, pairs: &[(&str, &str)]) -> Response<Body> {
    let body = serde_urlencoded::to_string(pairs).unwrap();
    post_raw(app, uri, "application/x-www-form-urlencoded", body).await
}

pub async fn post_raw(
    app: &Router,
    uri: &str,
    content_type: &str,
    body: String,
) -> Response<Body> {
    let request = Request::post(uri)
        .header(CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("redirect should carry a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

pub async fn row_count(db: &Database) -> i64 {
    let mut conn = db.connect().await.unwrap();
    let count = EnrollmentRepo::count(&mut conn).await.unwrap();
    enrollment_db::release(conn).await;
    count
}

/// The sample submission: every required field, no optional ones.
pub fn ana() -> Vec<(&'static str, &'static str)> {
    vec![
        ("first_name", "Ana"),
        ("last_name", "Cruz"),
        ("address", "123 Rd"),
        ("date_of_birth", "2005-01-01"),
        ("place_of_birth", "Manila"),
        ("contact_number", "09171234567"),
        ("gender", "F"),
        ("citizenship", "Filipino"),
        ("status", "New"),
        ("course", "BSIT"),
    ]
}
