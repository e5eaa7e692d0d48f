//! Route definitions for the public tour catalogue.

use axum::routing::get;
use axum::Router;

use crate::handlers::tours;
use crate::state::AppState;

/// Routes mounted at `/tours`.
///
/// ```text
/// GET /                 -> list_tours
/// GET /cards            -> list_cards
/// GET /cards/by-ids     -> list_cards_by_ids
/// GET /swiper           -> list_swiper
/// GET /{id}             -> get_tour
/// GET /{id}/seats       -> list_seats
/// GET /{id}/gallery     -> list_gallery
/// GET /{id}/reviews     -> list_reviews
/// GET /{id}/comments    -> list_comments (optional auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tours::list_tours))
        .route("/cards", get(tours::list_cards))
        .route("/cards/by-ids", get(tours::list_cards_by_ids))
        .route("/swiper", get(tours::list_swiper))
        .route("/{id}", get(tours::get_tour))
        .route("/{id}/seats", get(tours::list_seats))
        .route("/{id}/gallery", get(tours::list_gallery))
        .route("/{id}/reviews", get(tours::list_reviews))
        .route("/{id}/comments", get(tours::list_comments))
}
