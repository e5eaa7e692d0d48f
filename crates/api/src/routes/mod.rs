pub mod auth;
pub mod bookings;
pub mod comments;
pub mod favorites;
pub mod health;
pub mod info;
pub mod profile;
pub mod reviews;
pub mod search;
pub mod tours;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                    register (public)
/// /auth/login                       login (public)
/// /auth/refresh                     refresh (public)
/// /auth/logout                      logout (requires auth)
///
/// /profile                          get, update (requires auth)
///
/// /tours                            list with dates and seats
/// /tours/cards                      card list
/// /tours/cards/by-ids               cards for ?ids=1,2,3
/// /tours/swiper                     hero slider list
/// /tours/{id}                       detail
/// /tours/{id}/seats                 seat availability per date
/// /tours/{id}/gallery               gallery images
/// /tours/{id}/reviews               reviews
/// /tours/{id}/comments              paginated comments (optional auth)
///
/// /tour-images                      all card images
///
/// /search                           filtered search with pagination headers
/// /search/semantic                  nearest tours to a text query
/// /search/similar/{tour_id}         nearest tours to a tour
///
/// /bookings                         create (optional auth), list own (requires auth)
/// /reviews                          create (requires auth)
/// /favorites                        list, add (requires auth)
/// /favorites/{tour_id}              remove (requires auth)
/// /comments                         create (requires auth)
/// /comments/{id}                    update, delete own (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/profile", profile::router())
        .nest("/tours", tours::router())
        .route("/tour-images", get(handlers::tours::list_card_images))
        .nest("/search", search::router())
        .nest("/bookings", bookings::router())
        .nest("/reviews", reviews::router())
        .nest("/favorites", favorites::router())
        .nest("/comments", comments::router())
}
