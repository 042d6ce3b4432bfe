//! Shared helpers for the integration suites.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use bookstore_api::{apply_migrations, connect_pool, AppState};

/// State with a pool that never dials out. Good enough for every path that
/// rejects before storage access.
pub fn lazy_state() -> AppState {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://localhost/bookstore_test")
        .expect("lazy pool");
    AppState { pool }
}

/// Connect, migrate, and wipe both tables so ids restart at 1.
///
/// Run the suites that use this with:
/// DATABASE_URL=postgres://... cargo test -- --ignored --test-threads=1
pub async fn fresh_state() -> AppState {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = connect_pool(&url, 2).await.expect("pool");
    apply_migrations(&pool).await.expect("migrations");
    sqlx::query("TRUNCATE books, sellers RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("truncate");
    AppState { pool }
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn put_json(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_len(response: axum::response::Response) -> usize {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .len()
}
