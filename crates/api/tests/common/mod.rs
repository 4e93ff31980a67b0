#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use bdsql_api::config::ServerConfig;
use bdsql_api::router::build_app_router;
use bdsql_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:4000` as CORS origin (matching the dev default)
/// and a 30-second request timeout. The database URL is never read because
/// tests receive a ready pool.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:4000".to_string()],
        request_timeout_secs: 30,
        database_url: "postgres://unused".to_string(),
        db_max_connections: 5,
    }
}

/// Build the full application router on top of `pool` without touching the
/// schema.
pub fn build_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState { pool }, &config).expect("test config should produce a router")
}

/// Bootstrap the record tables, then build the full application router.
///
/// This goes through the same `build_app_router` as `main.rs`, so tests
/// exercise the production middleware stack.
pub async fn build_test_app(pool: PgPool) -> Router {
    bdsql_db::bootstrap_schema(&pool)
        .await
        .expect("bootstrap should succeed");
    build_app(pool)
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, content_type: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
