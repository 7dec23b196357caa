#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use gearshelf_api::config::ServerConfig;
use gearshelf_api::router::build_app_router;
use gearshelf_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_max_connections: 5,
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST `body` to `uri`, assert `201 Created` and return the created JSON.
pub async fn create(pool: &PgPool, uri: &str, body: Value) -> Value {
    let response = post_json(build_test_app(pool.clone()), uri, body).await;
    assert_eq!(response.status(), axum::http::StatusCode::CREATED, "POST {uri}");
    body_json(response).await
}

pub async fn create_category(pool: &PgPool, slug: &str) -> i64 {
    let json = create(
        pool,
        "/api/v1/createCategory",
        serde_json::json!({ "name": slug, "slug": slug, "description": null }),
    )
    .await;
    json["id"].as_i64().unwrap()
}

/// Minimal valid `createProduct` payload.
pub fn product_body(slug: &str, category_id: i64, price: f64, is_featured: bool) -> Value {
    serde_json::json!({
        "name": slug,
        "slug": slug,
        "description": null,
        "price": price,
        "image_url": null,
        "category_id": category_id,
        "brand": null,
        "model": null,
        "is_featured": is_featured,
        "meta_title": null,
        "meta_description": null,
    })
}

pub async fn create_product(pool: &PgPool, slug: &str, category_id: i64) -> i64 {
    let json = create(
        pool,
        "/api/v1/createProduct",
        product_body(slug, category_id, 19.99, false),
    )
    .await;
    json["id"].as_i64().unwrap()
}

/// Sleep long enough for `NOW()` to move on between inserts.
pub async fn tick() {
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
}
