//! Shared harness for the HTTP integration tests: app construction, request
//! helpers, and database seeding.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tour_api::auth::jwt::JwtConfig;
use tour_api::auth::password::hash_password;
use tour_api::config::ServerConfig;
use tour_api::router::build_app_router;
use tour_api::state::AppState;
use tour_db::models::user::CreateUser;
use tour_db::repositories::UserRepo;

/// Password given to every user created by [`create_user`].
pub const TEST_PASSWORD: &str = "correct-horse-battery";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and the repository's `static/` directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../static"),
        app_name: "Tour Server API".to_string(),
        app_env: "test".to_string(),
        semantic_index_on_startup: false,
        jwt: JwtConfig {
            secret: "integration-test-secret-with-enough-length".to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 7,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    let request = Request::put(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::delete(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Create a user with [`TEST_PASSWORD`] and return its id and a valid access token.
pub async fn create_user(pool: &PgPool, email: &str) -> (i64, String) {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        name: email.split('@').next().unwrap_or("user").to_string(),
        phone: None,
        role: "user".to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed");
    let token = test_config()
        .jwt
        .issue_access_token(user.id, &user.email, &user.role)
        .expect("token generation should succeed");
    (user.id, token)
}

pub async fn insert_location(pool: &PgPool, name: &str, country: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO locations (name, country) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(country)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Insert a tour with 30 seats in the given status.
pub async fn insert_tour_with_status(
    pool: &PgPool,
    title: &str,
    price: f64,
    rating: f64,
    status: &str,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO tours (title, description, price, rating, total_seats, status_id) \
         VALUES ($1, $2, $3, $4, 30, (SELECT id FROM statuses WHERE name = $5)) RETURNING id",
    )
    .bind(title)
    .bind(format!("{title} description"))
    .bind(price)
    .bind(rating)
    .bind(status)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_tour(pool: &PgPool, title: &str, price: f64, rating: f64) -> i64 {
    insert_tour_with_status(pool, title, price, rating, "active").await
}

/// Insert a tour date lasting `days` days with `seats` seats available.
pub async fn insert_date(
    pool: &PgPool,
    tour_id: i64,
    from_location: i64,
    to_location: i64,
    days: i32,
    seats: i32,
) -> i64 {
    let date_id: i64 = sqlx::query_scalar(
        "INSERT INTO tour_dates (tour_id, from_location_id, to_location_id, date_from, date_to) \
         VALUES ($1, $2, $3, NOW() + INTERVAL '30 days', \
                 NOW() + INTERVAL '30 days' + make_interval(days => $4)) \
         RETURNING id",
    )
    .bind(tour_id)
    .bind(from_location)
    .bind(to_location)
    .bind(days)
    .fetch_one(pool)
    .await
    .unwrap();

    sqlx::query("INSERT INTO tour_seats (tour_date_id, available_seats) VALUES ($1, $2)")
        .bind(date_id)
        .bind(seats)
        .execute(pool)
        .await
        .unwrap();

    date_id
}

pub async fn insert_gallery_image(pool: &PgPool, tour_id: i64, src: &str) {
    sqlx::query("INSERT INTO tour_gallery_images (tour_id, image_src) VALUES ($1, $2)")
        .bind(tour_id)
        .bind(src)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn insert_card_image(pool: &PgPool, tour_id: i64, src: &str) {
    sqlx::query("INSERT INTO tour_card_images (tour_id, image_src) VALUES ($1, $2)")
        .bind(tour_id)
        .bind(src)
        .execute(pool)
        .await
        .unwrap();
}
