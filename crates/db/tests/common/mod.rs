//! Seed helpers shared by the repository integration tests.

#![allow(dead_code)]

use sqlx::PgPool;
use tour_db::models::user::CreateUser;
use tour_db::repositories::UserRepo;

pub async fn status_id(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("SELECT id FROM statuses WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap_or_else(|e| panic!("status {name} missing: {e}"))
}

pub async fn insert_location(pool: &PgPool, name: &str, country: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO locations (name, country) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(country)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Insert an active tour with the given price and rating.
pub async fn insert_tour(pool: &PgPool, title: &str, price: f64, rating: f64) -> i64 {
    insert_tour_with_status(pool, title, price, rating, "active").await
}

pub async fn insert_tour_with_status(
    pool: &PgPool,
    title: &str,
    price: f64,
    rating: f64,
    status: &str,
) -> i64 {
    let status_id = status_id(pool, status).await;
    sqlx::query_scalar(
        "INSERT INTO tours (title, description, price, rating, total_seats, status_id) \
         VALUES ($1, $2, $3, $4, 30, $5) RETURNING id",
    )
    .bind(title)
    .bind(format!("{title} description"))
    .bind(price)
    .bind(rating)
    .bind(status_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Insert a tour date lasting `days` days, with a seat row holding `seats`.
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

pub async fn insert_card_image(pool: &PgPool, tour_id: i64, src: &str) {
    sqlx::query("INSERT INTO tour_card_images (tour_id, image_src) VALUES ($1, $2)")
        .bind(tour_id)
        .bind(src)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn create_user(pool: &PgPool, email: &str) -> i64 {
    let input = CreateUser {
        email: email.to_string(),
        password_hash: "not-a-real-hash".to_string(),
        name: email.split('@').next().unwrap_or("user").to_string(),
        phone: None,
        role: "user".to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}
