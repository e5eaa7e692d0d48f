//! HTTP-level integration tests for the public tour catalogue.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth};
use sqlx::PgPool;

/// Seed one tour from Kyiv to Rome with a 6-day date holding 12 seats.
async fn seed_roman_tour(pool: &PgPool) -> (i64, i64) {
    let kyiv = common::insert_location(pool, "Kyiv", "Ukraine").await;
    let rome = common::insert_location(pool, "Rome", "Italy").await;
    let tour = common::insert_tour(pool, "Roman holiday", 800.0, 4.6).await;
    let date = common::insert_date(pool, tour, kyiv, rome, 6, 12).await;
    (tour, date)
}

// ---------------------------------------------------------------------------
// Test: GET /tours lists tours with dates, duration, and seats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_tours_includes_dates(pool: PgPool) {
    let (tour, date) = seed_roman_tour(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, "/api/v1/tours").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let tours = json["data"].as_array().unwrap();
    assert_eq!(tours.len(), 1);
    assert_eq!(tours[0]["id"], tour);
    assert_eq!(tours[0]["status"], "active");
    assert_eq!(tours[0]["imageSrc"], "/static/images/no-image.jpg");

    let dates = tours[0]["dates"].as_array().unwrap();
    assert_eq!(dates[0]["id"], date);
    assert_eq!(dates[0]["duration"], 6);
    assert_eq!(dates[0]["availableSeats"], 12);
    assert_eq!(dates[0]["toCountry"], "Italy");
}

// ---------------------------------------------------------------------------
// Test: GET /tours/{id}
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_tour_by_id(pool: PgPool) {
    let (tour, _) = seed_roman_tour(&pool).await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/tours/{tour}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Roman holiday");
    assert_eq!(json["data"]["dates"][0]["fromLocation"], "Kyiv");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn get_missing_tour_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tours/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: cards, cards by ids, swiper, card images
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn cards_use_card_image_or_placeholder(pool: PgPool) {
    let with_image = common::insert_tour(&pool, "Carpathians", 300.0, 4.0).await;
    let without = common::insert_tour(&pool, "Odesa sea", 150.0, 3.5).await;
    common::insert_card_image(&pool, with_image, "/static/images/carpathians.jpg").await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, "/api/v1/tours/cards").await).await;
    let cards = json["data"].as_array().unwrap();
    assert_eq!(cards.len(), 2);

    let find = |id: i64| cards.iter().find(|c| c["id"] == id).unwrap().clone();
    assert_eq!(find(with_image)["imageSrc"], "/static/images/carpathians.jpg");
    assert_eq!(find(without)["imageSrc"], "/static/images/no-image.jpg");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cards_by_ids_skips_unknown(pool: PgPool) {
    let a = common::insert_tour(&pool, "A tour", 100.0, 4.0).await;
    let b = common::insert_tour(&pool, "B tour", 200.0, 4.0).await;
    common::insert_tour(&pool, "C tour", 300.0, 4.0).await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/v1/tours/cards/by-ids?ids={b},{a},999999");
    let json = body_json(get(app, &uri).await).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![a, b]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn cards_by_ids_rejects_non_integer(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/tours/cards/by-ids?ids=1,abc").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].as_str().unwrap().contains("abc"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn swiper_and_card_images(pool: PgPool) {
    let tour = common::insert_tour(&pool, "Lviv coffee", 90.0, 4.9).await;
    common::insert_card_image(&pool, tour, "/static/images/lviv.jpg").await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), "/api/v1/tours/swiper").await).await;
    assert_eq!(json["data"][0]["title"], "Lviv coffee");
    assert!(json["data"][0]["callToAction"].is_string());

    let json = body_json(get(app, "/api/v1/tour-images").await).await;
    assert_eq!(json["data"][0]["tourId"], tour);
    assert_eq!(json["data"][0]["imageSrc"], "/static/images/lviv.jpg");
}

// ---------------------------------------------------------------------------
// Test: seats and gallery
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn seats_carry_tour_price(pool: PgPool) {
    let (tour, date) = seed_roman_tour(&pool).await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app, &format!("/api/v1/tours/{tour}/seats")).await).await;
    let seats = &json["data"][0];
    assert_eq!(seats["tour_date_id"], date);
    assert_eq!(seats["available_seats"], 12);
    assert_eq!(seats["price"], 800.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn gallery_lists_images_and_404s_for_unknown_tour(pool: PgPool) {
    let tour = common::insert_tour(&pool, "Kyiv walks", 40.0, 4.2).await;
    common::insert_gallery_image(&pool, tour, "/static/images/kyiv-1.jpg").await;
    common::insert_gallery_image(&pool, tour, "/static/images/kyiv-2.jpg").await;
    let app = common::build_test_app(pool);

    let json = body_json(get(app.clone(), &format!("/api/v1/tours/{tour}/gallery")).await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 2);

    let response = get(app, "/api/v1/tours/999999/gallery").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: comments listing with ownership and pagination
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn comments_page_marks_owner(pool: PgPool) {
    let tour = common::insert_tour(&pool, "Dnipro cruise", 120.0, 4.1).await;
    let (_, alice) = common::create_user(&pool, "alice@example.com").await;
    let (_, bob) = common::create_user(&pool, "bob@example.com").await;
    let app = common::build_test_app(pool);

    for token in [&alice, &bob] {
        let body = serde_json::json!({ "tour_id": tour, "comment": "Lovely river views", "rating": 5 });
        let response = post_json_auth(app.clone(), "/api/v1/comments", body, token).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let uri = format!("/api/v1/tours/{tour}/comments?page=1&limit=1");
    let json = body_json(get_auth(app.clone(), &uri, &bob).await).await;
    assert_eq!(json["pagination"]["total"], 2);
    assert_eq!(json["pagination"]["total_pages"], 2);
    assert_eq!(json["pagination"]["limit"], 1);
    // Newest first: bob commented last.
    assert_eq!(json["data"][0]["user_name"], "bob");
    assert_eq!(json["data"][0]["is_owner"], true);

    let uri = format!("/api/v1/tours/{tour}/comments");
    let json = body_json(get(app, &uri).await).await;
    assert_eq!(json["pagination"]["limit"], 10);
    assert!(json["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|c| c["is_owner"] == false));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn comments_out_of_range_limit_falls_back(pool: PgPool) {
    let tour = common::insert_tour(&pool, "Chernihiv", 60.0, 3.9).await;
    let app = common::build_test_app(pool);

    let uri = format!("/api/v1/tours/{tour}/comments?limit=500&page=0");
    let json = body_json(get_auth(app, &uri, "garbage-token").await).await;
    assert_eq!(json["pagination"]["limit"], 10);
    assert_eq!(json["pagination"]["page"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn comments_huge_page_is_empty(pool: PgPool) {
    let tour = common::insert_tour(&pool, "Uzhhorod sakura", 75.0, 4.2).await;
    let (_, token) = common::create_user(&pool, "sakura@example.com").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "tour_id": tour, "comment": "Pink streets in April" });
    let response = post_json_auth(app.clone(), "/api/v1/comments", body, &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let uri = format!("/api/v1/tours/{tour}/comments?page=9223372036854775807&limit=50");
    let response = get(app, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["pagination"]["total"], 1);
    assert!(json["data"].as_array().unwrap().is_empty());
}
