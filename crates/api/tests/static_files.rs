//! Integration tests for `/static` file serving and its caching headers.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_bytes, get, send};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: stylesheets are cached for a day and carry an ETag
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn css_gets_day_cache_and_etag(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/static/css/site.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "public, max-age=86400");
    let etag = response.headers()["etag"].to_str().unwrap().to_string();
    assert!(etag.starts_with('"') && etag.ends_with('"'));

    let body = body_bytes(response).await;
    assert!(String::from_utf8(body).unwrap().contains(".tour-card"));
}

// ---------------------------------------------------------------------------
// Test: images are immutable
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn placeholder_image_is_immutable(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/static/images/no-image.jpg").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["cache-control"],
        "public, max-age=31536000, immutable"
    );
}

// ---------------------------------------------------------------------------
// Test: other files get the short default
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_files_cached_for_an_hour(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/static/robots.txt").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["cache-control"], "public, max-age=3600");
}

// ---------------------------------------------------------------------------
// Test: a matching If-None-Match yields 304 with no body
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn matching_etag_returns_not_modified(pool: PgPool) {
    let app = common::build_test_app(pool);
    let first = get(app.clone(), "/static/css/site.css").await;
    let etag = first.headers()["etag"].clone();

    let request = Request::get("/static/css/site.css")
        .header("if-none-match", etag.clone())
        .body(Body::empty())
        .unwrap();
    let second = send(app, request).await;

    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert_eq!(second.headers()["etag"], etag);
    assert!(body_bytes(second).await.is_empty());
}

// ---------------------------------------------------------------------------
// Test: a stale ETag gets the full file
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn stale_etag_returns_full_body(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::get("/static/css/site.css")
        .header("if-none-match", "\"stale\"")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(!body_bytes(response).await.is_empty());
}

// ---------------------------------------------------------------------------
// Test: range requests stream the slice without an ETag
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn partial_content_is_not_tagged(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::get("/static/robots.txt")
        .header("range", "bytes=0-3")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::PARTIAL_CONTENT);
    assert!(response.headers().get("etag").is_none());
    assert_eq!(body_bytes(response).await.len(), 4);
}

// ---------------------------------------------------------------------------
// Test: missing files are 404 without cache headers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_static_file_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/static/images/missing.png").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().get("etag").is_none());
}
